//! Verification code value object for account confirmation.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

use account_shared::clock::DateTimeProvider;

use crate::errors::{DomainError, DomainResult};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Single-use verification code for account confirmation
///
/// The code itself is fixed at creation and never reassigned; the only
/// state transition is `Created -> Verified`, performed by [`Self::verify`].
/// Expiration is not a stored state: it is computed against the supplied
/// time provider and blocks verification once the deadline has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The 6-digit verification code
    code: String,

    /// Timestamp when the code was created
    created_at: DateTime<Utc>,

    /// Timestamp after which the code can no longer be verified
    expires_at: DateTime<Utc>,

    /// Timestamp of successful verification, `None` until verified
    verified_at: Option<DateTime<Utc>>,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit code
    ///
    /// # Arguments
    ///
    /// * `clock` - Time provider used to stamp creation and expiration
    ///
    /// # Returns
    ///
    /// A new `VerificationCode` that expires [`DEFAULT_EXPIRATION_MINUTES`]
    /// after the clock's current instant
    pub fn new(clock: &dyn DateTimeProvider) -> Self {
        Self::new_with_expiration(clock, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time
    ///
    /// # Arguments
    ///
    /// * `clock` - Time provider used to stamp creation and expiration
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(clock: &dyn DateTimeProvider, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = clock.utc_now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            code,
            created_at: now,
            expires_at,
            verified_at: None,
        }
    }

    /// Generates a random 6-digit code
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// The generated code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Instant the code was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant after which verification fails
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Instant of successful verification, if any
    pub fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.verified_at
    }

    /// Whether the code has been successfully verified
    pub fn is_active(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Checks if the verification code has expired
    ///
    /// An instant exactly equal to the expiration deadline still counts as
    /// valid; only instants strictly after it are expired.
    pub fn is_expired(&self, clock: &dyn DateTimeProvider) -> bool {
        clock.utc_now() > self.expires_at
    }

    /// Gets the time remaining until expiration
    ///
    /// # Returns
    ///
    /// A `Duration` representing the time until expiration, or zero if expired
    pub fn time_until_expiration(&self, clock: &dyn DateTimeProvider) -> Duration {
        let now = clock.utc_now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }

    /// Verifies a candidate code against this verification code
    ///
    /// Verification fails if the code has expired, has already been
    /// verified, or the candidate does not match. All three causes produce
    /// [`DomainError::InvalidVerificationCode`]. On success the
    /// verification instant is stamped from a fresh clock read and the code
    /// becomes active.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The code to verify
    /// * `clock` - Time provider for the expiration check and the
    ///   verification timestamp
    pub fn verify(&mut self, candidate: &str, clock: &dyn DateTimeProvider) -> DomainResult<()> {
        let now = clock.utc_now();

        if now > self.expires_at {
            tracing::debug!(expires_at = %self.expires_at, "verification rejected: code expired");
            return Err(DomainError::InvalidVerificationCode);
        }

        // Single-use: a verified code can never be verified again
        if self.verified_at.is_some() {
            tracing::debug!("verification rejected: code already verified");
            return Err(DomainError::InvalidVerificationCode);
        }

        if !constant_time_eq(self.code.as_bytes(), candidate.as_bytes()) {
            tracing::debug!("verification rejected: code mismatch");
            return Err(DomainError::InvalidVerificationCode);
        }

        self.verified_at = Some(now);
        tracing::debug!(verified_at = %now, "verification code accepted");
        Ok(())
    }
}
