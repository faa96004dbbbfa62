//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! There is no database: the only server-side state is the shared HTTP
//! client for the email relay, the relay configuration, and the in-memory
//! rate limiter guarding the contact endpoint.

use crate::rate_limit::RateLimiter;
use crate::services::mailer::MailerConfig;

/// Clone is required by Axum — inner fields are cheap or Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub mailer: MailerConfig,
    pub limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: MailerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            mailer,
            limiter: RateLimiter::from_env(),
        }
    }
}
