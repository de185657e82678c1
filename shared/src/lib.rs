//! Shared abstractions for the account verification domain
//!
//! This crate provides cross-cutting capabilities consumed by the domain
//! layer. Currently that is the time provider abstraction, which decouples
//! time-dependent domain logic from the system clock.

pub mod clock;

// Re-export commonly used items at crate root
pub use clock::{DateTimeProvider, FixedClock, SystemClock};
