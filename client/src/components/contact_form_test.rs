use super::*;

#[test]
fn build_message_trims_every_field() {
    let msg = build_message("  Ada ", " ada@example.com ", "  ", "  hi there ").unwrap();
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.subject, "");
    assert_eq!(msg.message, "hi there");
}

#[test]
fn build_message_rejects_missing_fields_before_any_send() {
    let err = build_message("", "ada@example.com", "", "hi").unwrap_err();
    assert_eq!(err, "Please fill in all required fields");
}

#[test]
fn build_message_rejects_malformed_email() {
    let err = build_message("Ada", "a@b", "", "hi").unwrap_err();
    assert_eq!(err, "Please enter a valid email address");
}

#[test]
fn status_busy_only_while_sending() {
    assert!(!SubmitStatus::Idle.busy());
    assert!(SubmitStatus::Sending.busy());
    assert!(!SubmitStatus::Sent.busy());
    assert!(!SubmitStatus::Failed("x".to_owned()).busy());
}

#[test]
fn status_error_surfaces_only_failures() {
    assert_eq!(SubmitStatus::Idle.error(), None);
    assert_eq!(SubmitStatus::Sent.error(), None);
    assert_eq!(SubmitStatus::Failed("boom".to_owned()).error(), Some("boom"));
}
