//! # Account Core
//!
//! Domain layer for account verification. This crate contains the
//! verification code value object and the domain error types around it.
//! Time is supplied through the `DateTimeProvider` capability from
//! `account_shared` rather than read from a global clock.

pub mod domain;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
