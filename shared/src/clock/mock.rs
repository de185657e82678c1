//! Mock time provider for testing.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use super::DateTimeProvider;

/// Time provider pinned to a fixed instant.
///
/// The instant only changes through [`FixedClock::set`] and
/// [`FixedClock::advance`], so tests can place themselves before or after
/// an expiration deadline deterministically.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(instant),
        }
    }

    /// Pin the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }

    /// Move the clock forward (or backward, with a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl DateTimeProvider for FixedClock {
    fn utc_now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 29, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let clock = FixedClock::new(instant());

        assert_eq!(clock.utc_now(), instant());
        // Repeated reads do not drift
        assert_eq!(clock.utc_now(), instant());
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(instant());
        let later = instant() + Duration::days(1);

        clock.set(later);

        assert_eq!(clock.utc_now(), later);
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::new(instant());

        clock.advance(Duration::minutes(5));
        assert_eq!(clock.utc_now(), instant() + Duration::minutes(5));

        clock.advance(Duration::milliseconds(1));
        assert_eq!(
            clock.utc_now(),
            instant() + Duration::minutes(5) + Duration::milliseconds(1)
        );
    }
}
