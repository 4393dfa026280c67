pub mod error;
pub mod rewrite;
pub mod rules;

// Re-export common types for convenience
pub use error::{Error, Result};
