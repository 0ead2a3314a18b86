//! Shared content model for Sentinel worlds.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
