//! Domain layer containing value objects for account verification.

pub mod value_objects;

// Re-export commonly used domain types
pub use value_objects::*;
