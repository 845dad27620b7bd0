// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    is_valid_email, normalize_date_str, normalize_email, normalize_gender, normalize_nationality,
    normalize_phone_e164,
};

#[test]
fn test_is_valid_email_accepts_plain_address() {
    assert!(is_valid_email("john@example.com"));
    assert!(is_valid_email("j.doe+import@sub.example.co"));
    assert!(is_valid_email("  padded@example.com  "));
}

#[test]
fn test_is_valid_email_rejects_missing_at() {
    assert!(!is_valid_email("john.example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_is_valid_email_rejects_missing_dot_after_at() {
    assert!(!is_valid_email("john@example"));
    assert!(!is_valid_email("john@com"));
}

#[test]
fn test_is_valid_email_rejects_empty_segments() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("john@.com"));
    assert!(!is_valid_email("john@example."));
}

#[test]
fn test_is_valid_email_rejects_second_at() {
    assert!(!is_valid_email("john@@example.com"));
    assert!(!is_valid_email("john@doe@example.com"));
}

#[test]
fn test_is_valid_email_rejects_embedded_whitespace() {
    assert!(!is_valid_email("john doe@example.com"));
    assert!(!is_valid_email("john@exa mple.com"));
}

#[test]
fn test_is_valid_email_rejects_non_ascii() {
    assert!(!is_valid_email("jöhn@example.com"));
}

#[test]
fn test_normalize_email_trims_and_preserves_case() {
    let result: Option<String> = normalize_email(Some("  John.Doe@Example.COM  "));
    assert_eq!(result, Some(String::from("John.Doe@Example.COM")));
}

#[test]
fn test_normalize_email_rejects_missing_value() {
    assert_eq!(normalize_email(None), None);
    assert_eq!(normalize_email(Some("")), None);
    assert_eq!(normalize_email(Some("   ")), None);
}

#[test]
fn test_normalize_email_rejects_malformed_value() {
    assert_eq!(normalize_email(Some("not-an-email")), None);
    assert_eq!(normalize_email(Some("john@example")), None);
}

#[test]
fn test_normalize_gender_maps_known_tokens() {
    assert_eq!(normalize_gender(Some("m")), Some(String::from("male")));
    assert_eq!(normalize_gender(Some("Male")), Some(String::from("male")));
    assert_eq!(normalize_gender(Some("F")), Some(String::from("female")));
    assert_eq!(normalize_gender(Some("female")), Some(String::from("female")));
    assert_eq!(
        normalize_gender(Some("Non-Binary")),
        Some(String::from("non-binary"))
    );
    assert_eq!(
        normalize_gender(Some("nonbinary")),
        Some(String::from("non-binary"))
    );
    assert_eq!(normalize_gender(Some("other")), Some(String::from("other")));
    assert_eq!(
        normalize_gender(Some("Prefer-Not-To-Say")),
        Some(String::from("prefer-not-to-say"))
    );
}

#[test]
fn test_normalize_gender_passes_through_unknown_tokens() {
    assert_eq!(
        normalize_gender(Some("Agender")),
        Some(String::from("agender"))
    );
}

#[test]
fn test_normalize_gender_rejects_empty() {
    assert_eq!(normalize_gender(None), None);
    assert_eq!(normalize_gender(Some("")), None);
    assert_eq!(normalize_gender(Some("   ")), None);
}

#[test]
fn test_normalize_nationality_trims_and_uppercases() {
    assert_eq!(
        normalize_nationality(Some(" irish ")),
        Some(String::from("IRISH"))
    );
    assert_eq!(normalize_nationality(Some("us")), Some(String::from("US")));
}

#[test]
fn test_normalize_nationality_rejects_empty() {
    assert_eq!(normalize_nationality(None), None);
    assert_eq!(normalize_nationality(Some("  ")), None);
}

#[test]
fn test_normalize_phone_accepts_e164() {
    let result: Option<String> = normalize_phone_e164(Some(" +14155550123 "));
    assert_eq!(result, Some(String::from("+14155550123")));
}

#[test]
fn test_normalize_phone_accepts_boundary_lengths() {
    // 8 digits and 15 digits are both inside the E.164 window.
    assert_eq!(
        normalize_phone_e164(Some("+12345678")),
        Some(String::from("+12345678"))
    );
    assert_eq!(
        normalize_phone_e164(Some("+123456789012345")),
        Some(String::from("+123456789012345"))
    );
}

#[test]
fn test_normalize_phone_rejects_out_of_range_lengths() {
    assert_eq!(normalize_phone_e164(Some("+1234567")), None);
    assert_eq!(normalize_phone_e164(Some("+1234567890123456")), None);
}

#[test]
fn test_normalize_phone_rejects_missing_plus() {
    assert_eq!(normalize_phone_e164(Some("14155550123")), None);
}

#[test]
fn test_normalize_phone_rejects_leading_zero() {
    assert_eq!(normalize_phone_e164(Some("+04155550123")), None);
}

#[test]
fn test_normalize_phone_rejects_non_digits() {
    assert_eq!(normalize_phone_e164(Some("+1415abc0123")), None);
    assert_eq!(normalize_phone_e164(Some("+1 415 555 0123")), None);
}

#[test]
fn test_normalize_phone_rejects_empty() {
    assert_eq!(normalize_phone_e164(None), None);
    assert_eq!(normalize_phone_e164(Some("")), None);
}

#[test]
fn test_normalize_date_str_accepts_iso_shape() {
    let result: Option<String> = normalize_date_str(Some(" 2024-01-15 "));
    assert_eq!(result, Some(String::from("2024-01-15")));
}

#[test]
fn test_normalize_date_str_accepts_impossible_calendar_date() {
    // Shape check only: calendar validity is out of scope.
    assert_eq!(
        normalize_date_str(Some("2024-02-30")),
        Some(String::from("2024-02-30"))
    );
}

#[test]
fn test_normalize_date_str_rejects_wrong_shape() {
    assert_eq!(normalize_date_str(Some("2024-1-15")), None);
    assert_eq!(normalize_date_str(Some("20240115")), None);
    assert_eq!(normalize_date_str(Some("2024/01/15")), None);
    assert_eq!(normalize_date_str(Some("2024-01-15x")), None);
    assert_eq!(normalize_date_str(Some("15-01-2024x")), None);
}

#[test]
fn test_normalize_date_str_rejects_empty() {
    assert_eq!(normalize_date_str(None), None);
    assert_eq!(normalize_date_str(Some("   ")), None);
}
