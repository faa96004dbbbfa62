//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use content::contact::ContactMessage;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Message surfaced for any relay failure; the real cause stays in the
/// console and server logs.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send your message. Please try again later.";

#[cfg(any(test, feature = "hydrate"))]
fn contact_endpoint() -> &'static str {
    "/api/contact"
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ContactResponse {
    ok: bool,
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns the generic user-facing message if the HTTP request fails, the
/// server responds with a non-OK status, or the relay reports failure. The
/// underlying error is logged to the console for diagnostics.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let result = send_contact_request(message).await;
        if let Err(detail) = &result {
            log::error!("contact submission failed: {detail}");
        }
        result.map_err(|_| SEND_FAILED_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn send_contact_request(message: &ContactMessage) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(contact_endpoint())
        .json(message)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("contact request failed: {}", resp.status()));
    }
    let body: ContactResponse = resp.json().await.map_err(|e| e.to_string())?;
    if !body.ok {
        return Err("relay reported failure".to_owned());
    }
    Ok(())
}
