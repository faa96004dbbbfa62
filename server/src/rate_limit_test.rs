use super::*;

fn ip(last: u8) -> IpAddr {
    IpAddr::from([127, 0, 0, last])
}

#[test]
fn allows_up_to_the_limit_then_rejects() {
    let limiter = RateLimiter::with_config(3, Duration::from_secs(60));
    for _ in 0..3 {
        assert!(limiter.check_and_record(ip(1)).is_ok());
    }
    let err = limiter.check_and_record(ip(1)).unwrap_err();
    assert_eq!(err.limit, 3);
}

#[test]
fn limits_are_per_client() {
    let limiter = RateLimiter::with_config(1, Duration::from_secs(60));
    assert!(limiter.check_and_record(ip(1)).is_ok());
    assert!(limiter.check_and_record(ip(2)).is_ok());
    assert!(limiter.check_and_record(ip(1)).is_err());
}

#[test]
fn budget_recovers_after_the_window_slides() {
    let limiter = RateLimiter::with_config(1, Duration::from_millis(30));
    assert!(limiter.check_and_record(ip(1)).is_ok());
    assert!(limiter.check_and_record(ip(1)).is_err());
    std::thread::sleep(Duration::from_millis(40));
    assert!(limiter.check_and_record(ip(1)).is_ok());
}

#[test]
fn rejected_requests_do_not_consume_budget() {
    let limiter = RateLimiter::with_config(2, Duration::from_millis(50));
    assert!(limiter.check_and_record(ip(1)).is_ok());
    std::thread::sleep(Duration::from_millis(30));
    assert!(limiter.check_and_record(ip(1)).is_ok());
    assert!(limiter.check_and_record(ip(1)).is_err());
    // The first entry expires; exactly one slot opens despite the rejection.
    std::thread::sleep(Duration::from_millis(25));
    assert!(limiter.check_and_record(ip(1)).is_ok());
    assert!(limiter.check_and_record(ip(1)).is_err());
}

#[test]
fn error_message_names_the_budget() {
    let limiter = RateLimiter::with_config(1, Duration::from_secs(600));
    let _ = limiter.check_and_record(ip(9));
    let err = limiter.check_and_record(ip(9)).unwrap_err();
    assert_eq!(err.to_string(), "rate limit exceeded (max 1 submissions/600s)");
}
