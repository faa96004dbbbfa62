//! Contact submission endpoint.
//!
//! ERROR HANDLING
//! ==============
//! The payload is re-validated here because the endpoint is a trust
//! boundary: the browser form validates too, but anything can POST.
//! Relay failures are logged with their real cause and surfaced to the
//! client as a generic failure so nothing about the relay leaks.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use serde::Serialize;

use content::contact::{ContactError, ContactMessage};

use crate::services::mailer;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn ok() -> Self {
        Self { ok: true, error: None }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self { ok: false, error: Some(error.into()) }
    }
}

/// Map a validation failure to its response status.
fn validation_status(error: ContactError) -> StatusCode {
    match error {
        ContactError::MissingField | ContactError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `POST /api/contact`
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<ContactMessage>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Err(limit) = state.limiter.check_and_record(addr.ip()) {
        tracing::warn!(client = %addr.ip(), %limit, "contact submission rate limited");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ContactResponse::failed("Too many submissions. Please try again later.")),
        );
    }

    if let Err(validation) = payload.validate() {
        return (
            validation_status(validation),
            Json(ContactResponse::failed(validation.to_string())),
        );
    }

    match mailer::send_contact_email(&state.http, &state.mailer, &payload).await {
        Ok(()) => {
            tracing::info!(from = %payload.email, "contact submission relayed");
            (StatusCode::OK, Json(ContactResponse::ok()))
        }
        Err(error) => {
            tracing::warn!(%error, "contact relay failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ContactResponse::failed("Failed to send your message. Please try again later.")),
            )
        }
    }
}
