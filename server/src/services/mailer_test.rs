use super::*;

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Hello from the form".to_owned(),
    }
}

#[test]
fn missing_env_falls_back_to_placeholders() {
    let config = MailerConfig::from_parts(None, None, None, None);
    assert_eq!(config.service_id, PLACEHOLDER_SERVICE_ID);
    assert_eq!(config.template_id, PLACEHOLDER_TEMPLATE_ID);
    assert_eq!(config.public_key, PLACEHOLDER_PUBLIC_KEY);
    assert!(config.is_placeholder());
}

#[test]
fn full_credentials_are_not_placeholder() {
    let config = MailerConfig::from_parts(
        Some("svc_123".to_owned()),
        Some("tpl_456".to_owned()),
        Some("key_789".to_owned()),
        Some("inbox@example.com".to_owned()),
    );
    assert!(!config.is_placeholder());
    assert_eq!(config.to_email, "inbox@example.com");
}

#[test]
fn partial_credentials_still_count_as_placeholder() {
    let config =
        MailerConfig::from_parts(Some("svc_123".to_owned()), None, Some("key_789".to_owned()), None);
    assert!(config.is_placeholder());
}

#[test]
fn payload_carries_the_credential_triple_and_all_fields() {
    let config = MailerConfig::from_parts(
        Some("svc_123".to_owned()),
        Some("tpl_456".to_owned()),
        Some("key_789".to_owned()),
        Some("inbox@example.com".to_owned()),
    );
    let payload = serde_json::to_value(relay_payload(&config, &message())).unwrap();

    assert_eq!(payload["service_id"], "svc_123");
    assert_eq!(payload["template_id"], "tpl_456");
    assert_eq!(payload["user_id"], "key_789");

    let params = &payload["template_params"];
    assert_eq!(params["from_name"], "Ada Lovelace");
    assert_eq!(params["from_email"], "ada@example.com");
    assert_eq!(params["subject"], content::contact::DEFAULT_SUBJECT);
    assert_eq!(params["message"], "Hello from the form");
    assert_eq!(params["to_email"], "inbox@example.com");
}

#[test]
fn explicit_subject_is_forwarded_verbatim() {
    let config = MailerConfig::from_parts(None, None, None, None);
    let mut msg = message();
    msg.subject = "Collaboration".to_owned();
    let payload = serde_json::to_value(relay_payload(&config, &msg)).unwrap();
    assert_eq!(payload["template_params"]["subject"], "Collaboration");
}
