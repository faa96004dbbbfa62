use super::*;

#[test]
fn validation_failures_map_to_unprocessable_entity() {
    assert_eq!(validation_status(ContactError::MissingField), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(validation_status(ContactError::InvalidEmail), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn ok_response_has_no_error_field() {
    let body = serde_json::to_value(ContactResponse::ok()).unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[test]
fn failed_response_carries_the_message() {
    let body = serde_json::to_value(ContactResponse::failed("nope")).unwrap();
    assert_eq!(body, serde_json::json!({ "ok": false, "error": "nope" }));
}

#[test]
fn invalid_payloads_never_reach_the_relay() {
    // The handler validates before touching the mailer; mirror that gate
    // here so a regression in ordering shows up.
    let invalid = ContactMessage {
        name: "Ada".to_owned(),
        email: "a@b".to_owned(),
        subject: String::new(),
        message: "hi".to_owned(),
    };
    assert!(invalid.validate().is_err());
}
