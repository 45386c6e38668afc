//! Per-user message rate limiting.

use std::{
    collections::BTreeMap,
    sync::Mutex,
    time::{Duration, Instant},
};

/// Rejects messages that arrive too soon after the previous accepted one.
///
/// Only accepted arrivals advance the per-user clock; a rejected message
/// leaves the stored instant untouched.
pub struct RateLimiter {
    min_interval: Duration,
    last_seen: Mutex<BTreeMap<i64, Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum interval between messages.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_seen: Mutex::new(BTreeMap::new()),
        }
    }

    /// Record an arrival for the user. Returns `false` if it came sooner
    /// than the minimum interval after the previous accepted one.
    pub fn check(&self, user: i64) -> bool {
        let now = Instant::now();
        let mut last_seen = self.last_seen.lock().unwrap();
        match last_seen.get(&user) {
            Some(last) if now.duration_since(*last) < self.min_interval => false,
            _ => {
                last_seen.insert(user, now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn first_arrival_accepted() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        assert!(limiter.check(1));
    }

    #[test]
    fn burst_rejected() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        assert!(limiter.check(1));
        assert!(!limiter.check(1));
    }

    #[test]
    fn users_are_independent() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        assert!(limiter.check(1));
        assert!(limiter.check(2));
    }

    #[test]
    fn accepted_after_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(50));
        assert!(limiter.check(1));
        sleep(Duration::from_millis(60));
        assert!(limiter.check(1));
    }

    #[test]
    fn rejection_keeps_the_clock() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        assert!(limiter.check(1));
        sleep(Duration::from_millis(60));
        // Rejected, but the clock still points at the first arrival.
        assert!(!limiter.check(1));
        sleep(Duration::from_millis(150));
        assert!(limiter.check(1));
    }

    #[test]
    fn zero_interval_accepts_everything() {
        let limiter = RateLimiter::new(Duration::ZERO);
        assert!(limiter.check(1));
        assert!(limiter.check(1));
    }
}
