//! Contact email relay.
//!
//! Submissions are delivered through the EmailJS transactional endpoint:
//! one HTTPS POST per accepted submission carrying the
//! `{service_id, template_id, user_id}` triple plus the template
//! parameters `{from_name, from_email, subject, message, to_email}`.
//! No retry policy: a failed relay surfaces as a generic error and the
//! visitor resubmits.

#[cfg(test)]
#[path = "mailer_test.rs"]
mod mailer_test;

use content::contact::ContactMessage;
use serde::Serialize;

/// EmailJS REST endpoint.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Placeholder credentials used when the environment is not configured.
pub const PLACEHOLDER_SERVICE_ID: &str = "service_id";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "template_id";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "public_key";

/// Inbox that receives contact submissions unless overridden.
const DEFAULT_TO_EMAIL: &str = "sham251087@gmail.com";

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("email relay request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email relay rejected the message: status {status}")]
    Rejected { status: u16 },
}

/// Relay credentials and the fixed recipient, sourced from the environment.
#[derive(Clone, Debug)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
}

impl MailerConfig {
    /// Read `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_PUBLIC_KEY`, and `CONTACT_TO_EMAIL`, defaulting each to its
    /// placeholder when absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var("EMAILJS_SERVICE_ID").ok(),
            std::env::var("EMAILJS_TEMPLATE_ID").ok(),
            std::env::var("EMAILJS_PUBLIC_KEY").ok(),
            std::env::var("CONTACT_TO_EMAIL").ok(),
        )
    }

    #[must_use]
    pub fn from_parts(
        service_id: Option<String>,
        template_id: Option<String>,
        public_key: Option<String>,
        to_email: Option<String>,
    ) -> Self {
        Self {
            service_id: service_id.unwrap_or_else(|| PLACEHOLDER_SERVICE_ID.to_owned()),
            template_id: template_id.unwrap_or_else(|| PLACEHOLDER_TEMPLATE_ID.to_owned()),
            public_key: public_key.unwrap_or_else(|| PLACEHOLDER_PUBLIC_KEY.to_owned()),
            to_email: to_email.unwrap_or_else(|| DEFAULT_TO_EMAIL.to_owned()),
        }
    }

    /// True when any credential is still a placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}

/// EmailJS request body.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
}

/// Build the wire payload for one submission.
#[must_use]
pub fn relay_payload<'a>(config: &'a MailerConfig, message: &'a ContactMessage) -> RelayRequest<'a> {
    RelayRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: TemplateParams {
            from_name: &message.name,
            from_email: &message.email,
            subject: message.effective_subject(),
            message: &message.message,
            to_email: &config.to_email,
        },
    }
}

/// Deliver one contact submission through the relay.
///
/// # Errors
///
/// [`MailerError::Request`] on transport failure, [`MailerError::Rejected`]
/// when the relay answers with a non-success status.
pub async fn send_contact_email(
    http: &reqwest::Client,
    config: &MailerConfig,
    message: &ContactMessage,
) -> Result<(), MailerError> {
    let response = http
        .post(EMAILJS_ENDPOINT)
        .json(&relay_payload(config, message))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(MailerError::Rejected { status: response.status().as_u16() });
    }
    Ok(())
}
