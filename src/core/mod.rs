//! Core types and constants for world-scale placement

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
