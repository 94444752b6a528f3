use super::*;

fn limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "submission {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    ));
}

#[test]
fn clients_are_limited_independently() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    assert!(rl.check_and_record_at("10.0.0.1", now).is_ok());
    assert!(rl.check_and_record_at("10.0.0.1", now).is_err());
    assert!(rl.check_and_record_at("10.0.0.2", now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 4);
    let now = Instant::now();

    // Distinct clients so the per-client limit is never the one hit.
    for i in 0..4 {
        assert!(rl.check_and_record_at(&format!("client-{i}"), now).is_ok());
    }
    assert!(matches!(
        rl.check_and_record_at("client-late", now),
        Err(RateLimitError::GlobalExceeded { limit: 4, .. })
    ));
}

#[test]
fn rejected_submission_is_not_recorded() {
    let rl = limiter(1, 100);
    let start = Instant::now();

    rl.check_and_record_at("10.0.0.1", start).unwrap();
    assert!(rl.check_and_record_at("10.0.0.1", start).is_err());

    // Only the first submission occupies the window, so it frees up on time.
    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at("10.0.0.1", later).is_ok());
}

#[test]
fn window_expiry_allows_new_submissions() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    for _ in 0..2 {
        rl.check_and_record_at("10.0.0.9", start).unwrap();
    }
    assert!(rl.check_and_record_at("10.0.0.9", start).is_err());

    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at("10.0.0.9", later).is_ok());
}

#[test]
fn drained_clients_are_forgotten() {
    let rl = limiter(5, 100);
    let start = Instant::now();

    rl.check_and_record_at("10.0.0.1", start).unwrap();
    rl.check_and_record_at("10.0.0.2", start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.check_and_record_at("10.0.0.3", start + Duration::from_secs(120)).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.global_limit, 60);
    assert_eq!(cfg.per_client_window, Duration::from_secs(60));
}
