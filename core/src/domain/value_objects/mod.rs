//! Value objects representing immutable domain concepts.

pub mod verification_code;

// Re-export commonly used types
pub use verification_code::{VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
