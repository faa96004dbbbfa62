//! Server-side services.

pub mod mailer;
