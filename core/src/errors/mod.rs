//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Verification failed: the code is expired, already used, or the
    /// candidate does not match. The causes are deliberately collapsed into
    /// one kind so callers cannot tell a guessed code from an expired one.
    #[error("Invalid verification code")]
    InvalidVerificationCode,
}

pub type DomainResult<T> = Result<T, DomainError>;
