use artcat_core::domain::is_valid_birth_date;

// ===== Absence and emptiness =====

#[test]
fn test_absent_value_is_invalid() {
    assert!(!is_valid_birth_date(None));
}

#[test]
fn test_empty_string_is_invalid() {
    assert!(!is_valid_birth_date(Some("")));
}

// ===== Sentinel encodings =====

#[test]
fn test_negative_year_is_invalid() {
    assert!(!is_valid_birth_date(Some("-0450-01-01")));
    assert!(!is_valid_birth_date(Some("-1")));
}

#[test]
fn test_zero_year_sentinel_is_invalid() {
    assert!(!is_valid_birth_date(Some("0000-00-00")));
    assert!(!is_valid_birth_date(Some("0000-05-12")));
}

#[test]
fn test_zero_month_day_sentinel_is_invalid() {
    assert!(!is_valid_birth_date(Some("1881-00-00")));
}

// ===== Plausibility window =====

#[test]
fn test_year_below_window_is_invalid() {
    assert!(!is_valid_birth_date(Some("950-01-01")));
    assert!(!is_valid_birth_date(Some("999-12-31")));
}

#[test]
fn test_year_above_window_is_invalid() {
    assert!(!is_valid_birth_date(Some("2200-01-01")));
    assert!(!is_valid_birth_date(Some("2101")));
}

#[test]
fn test_window_boundaries_are_valid() {
    assert!(is_valid_birth_date(Some("1000-01-01")));
    assert!(is_valid_birth_date(Some("2100-12-31")));
}

#[test]
fn test_full_date_is_valid() {
    assert!(is_valid_birth_date(Some("1500-03-02")));
    assert!(is_valid_birth_date(Some("1452-04-15")));
}

#[test]
fn test_year_only_partial_date_is_valid() {
    assert!(is_valid_birth_date(Some("1503")));
}

#[test]
fn test_year_month_partial_date_is_valid() {
    assert!(is_valid_birth_date(Some("1881-10")));
}

// ===== Malformed input =====

#[test]
fn test_non_numeric_year_is_invalid() {
    assert!(!is_valid_birth_date(Some("circa 1500")));
    assert!(!is_valid_birth_date(Some("unknown")));
}
