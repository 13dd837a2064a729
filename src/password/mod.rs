//! Password generation
//!
//! Character pool construction from selectable classes and uniform
//! random generation of single passwords or batches.

pub mod generate;
pub mod options;
pub mod pool;

pub use generate::{generate_batch, generate_one};
pub use options::PasswordOptions;
pub use pool::build_pool;
