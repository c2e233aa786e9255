//! Minion systems (FixedUpdate)

pub mod contacts;
pub mod cooldown;
pub mod tick;

// Re-export all systems
pub use contacts::*;
pub use cooldown::*;
pub use tick::*;
