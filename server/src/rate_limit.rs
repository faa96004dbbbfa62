//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! One limit is enforced: a handful of submissions per client IP per
//! window, enough for legitimate retries while keeping the email relay
//! from being driven as a spam cannon.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_LIMIT: usize = 5;
const DEFAULT_WINDOW_SECS: u64 = 600;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
#[error("rate limit exceeded (max {limit} submissions/{window_secs}s)")]
pub struct RateLimitError {
    pub limit: usize,
    pub window_secs: u64,
}

#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    /// Limit and window from `CONTACT_RATE_LIMIT` / `CONTACT_RATE_WINDOW_SECS`,
    /// with code defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_config(
            env_parse("CONTACT_RATE_LIMIT", DEFAULT_LIMIT),
            Duration::from_secs(env_parse("CONTACT_RATE_WINDOW_SECS", DEFAULT_WINDOW_SECS)),
        )
    }

    #[must_use]
    pub fn with_config(limit: usize, window: Duration) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            limit,
            window,
        }
    }

    /// Check the client's budget and record this request if allowed.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError`] when the client already spent its window
    /// budget; the request is not recorded in that case.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        let now = Instant::now();
        let mut requests = self.requests.lock().expect("rate limiter lock poisoned");
        let window = requests.entry(client).or_default();

        while let Some(&oldest) = window.front() {
            if now.duration_since(oldest) >= self.window {
                window.pop_front();
            } else {
                break;
            }
        }

        if window.len() >= self.limit {
            return Err(RateLimitError {
                limit: self.limit,
                window_secs: self.window.as_secs(),
            });
        }
        window.push_back(now);
        Ok(())
    }
}
