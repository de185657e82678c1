//! Production clock backed by the system time.

use chrono::{DateTime, Utc};

use super::DateTimeProvider;

/// Time provider that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl DateTimeProvider for SystemClock {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_system_clock_tracks_real_time() {
        let clock = SystemClock::new();
        let before = Utc::now();
        let now = clock.utc_now();
        let after = Utc::now();

        assert!(now >= before);
        assert!(now <= after);
        assert!(after - before < Duration::seconds(1));
    }
}
