use super::*;

fn valid_message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Hello there".to_owned(),
    }
}

#[test]
fn valid_message_passes() {
    assert_eq!(valid_message().validate(), Ok(()));
}

#[test]
fn empty_required_fields_are_rejected() {
    for field in ["name", "email", "message"] {
        let mut msg = valid_message();
        match field {
            "name" => msg.name = "   ".to_owned(),
            "email" => msg.email = String::new(),
            _ => msg.message = "\n".to_owned(),
        }
        assert_eq!(msg.validate(), Err(ContactError::MissingField), "field: {field}");
    }
}

#[test]
fn dotless_domain_is_rejected() {
    let mut msg = valid_message();
    msg.email = "a@b".to_owned();
    assert_eq!(msg.validate(), Err(ContactError::InvalidEmail));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.domain.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("user name@example.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn blank_subject_falls_back() {
    let msg = valid_message();
    assert_eq!(msg.effective_subject(), DEFAULT_SUBJECT);

    let mut with_subject = valid_message();
    with_subject.subject = "  Collaboration  ".to_owned();
    assert_eq!(with_subject.effective_subject(), "Collaboration");
}

#[test]
fn payload_round_trips_through_json() {
    let msg = valid_message();
    let json = serde_json::to_string(&msg).unwrap();
    let back: ContactMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(msg, back);
}

#[test]
fn subject_field_is_optional_on_the_wire() {
    let back: ContactMessage =
        serde_json::from_str(r#"{"name":"A","email":"a@b.c","message":"hi"}"#).unwrap();
    assert_eq!(back.subject, "");
}
