//! Input resolver boundary
//!
//! Device polling живёт снаружи. Внешний слой каждый tick пишет состояние
//! actions в `InputActionMap` и позицию курсора в `PointerState`,
//! ECS системы только читают.
//!
//! # Flow
//!
//! ```text
//! Devices (keyboard/gamepad/mouse)
//!     ↓
//! внешний input layer
//!     ↓
//! InputActionMap + PointerState (resources)
//!     ↓
//! player_movement / minion_tick (FixedUpdate)
//! ```

pub mod actions;
pub mod pointer;

pub use actions::*;
pub use pointer::*;
