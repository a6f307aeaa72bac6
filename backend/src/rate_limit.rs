use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Admits at most one request per client within `window`.
pub struct RateLimiter {
    window: Duration,
    last_seen: Mutex<HashMap<String, Instant>>,
}

impl RateLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: Mutex::new(HashMap::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns false while `client` is inside its window. Rejected calls leave the window unchanged.
    pub fn admit(&self, client: &str, now: Instant) -> bool {
        let mut last_seen = self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(last) = last_seen.get(client) {
            if now.saturating_duration_since(*last) < self.window {
                return false;
            }
        }
        last_seen.insert(client.to_string(), now);
        true
    }

    /// Drops clients whose window has expired.
    pub fn sweep(&self, now: Instant) -> usize {
        let mut last_seen = self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
        let before = last_seen.len();
        last_seen.retain(|_, last| now.saturating_duration_since(*last) < self.window);
        before - last_seen.len()
    }

    pub fn tracked(&self) -> usize {
        self.last_seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(5);

    #[test]
    fn second_request_inside_window_is_rejected() {
        let limiter = RateLimiter::new(WINDOW);
        let start = Instant::now();

        assert!(limiter.admit("10.0.0.1", start));
        assert!(!limiter.admit("10.0.0.1", start + Duration::from_secs(1)));
        assert!(limiter.admit("10.0.0.2", start + Duration::from_secs(1)));
    }

    #[test]
    fn rejection_does_not_extend_window() {
        let limiter = RateLimiter::new(WINDOW);
        let start = Instant::now();

        assert!(limiter.admit("a", start));
        assert!(!limiter.admit("a", start + Duration::from_secs(4)));
        assert!(limiter.admit("a", start + WINDOW));
    }

    #[test]
    fn sweep_forgets_expired_clients() {
        let limiter = RateLimiter::new(WINDOW);
        let start = Instant::now();

        limiter.admit("old", start);
        limiter.admit("fresh", start + Duration::from_secs(4));

        assert_eq!(limiter.sweep(start + Duration::from_secs(6)), 1);
        assert_eq!(limiter.tracked(), 1);
        assert!(!limiter.admit("fresh", start + Duration::from_secs(6)));
    }
}
