//! Business logic layer
//!
//! This module provides the high-level Generator API tying together
//! option validation, pool building, generation, scoring and history.

pub mod generator;

pub use generator::{GenerationResult, Generator};
