use super::*;

#[test]
fn timeout_millis_passes_small_delays_through() {
    assert_eq!(timeout_millis(Duration::from_millis(300)), 300);
    assert_eq!(timeout_millis(Duration::ZERO), 0);
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
}

#[test]
fn submission_record_includes_fields_and_timestamp() {
    let values = FormValues {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let record = submission_record(&values, "2026-01-01T00:00:00.000Z");
    assert_eq!(record["name"], "Ada");
    assert_eq!(record["email"], "ada@example.com");
    assert_eq!(record["message"], "Hello");
    assert_eq!(record["timestamp"], "2026-01-01T00:00:00.000Z");
}
