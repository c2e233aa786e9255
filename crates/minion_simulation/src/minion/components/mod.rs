//! Minion components

pub mod agent;
pub mod state;


pub use agent::*;
pub use state::*;
