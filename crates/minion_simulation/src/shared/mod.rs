//! Shared domain: cross-cutting типы
//!
//! - Camera reference (CameraRig, screen → ground ray)
//! - Steering math (move_towards, exponential turn, flatten)

pub mod camera;
pub mod steering;

pub use camera::*;
pub use steering::*;
