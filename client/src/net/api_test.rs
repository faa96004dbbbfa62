use super::*;

#[test]
fn contact_endpoint_is_stable() {
    assert_eq!(contact_endpoint(), "/api/contact");
}

#[test]
fn failure_message_is_generic() {
    // The user-facing string must not leak transport details.
    assert!(!SEND_FAILED_MESSAGE.contains("http"));
    assert!(!SEND_FAILED_MESSAGE.contains("status"));
}
