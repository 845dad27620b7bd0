// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-field normalizers for uploaded directory rows.
//!
//! Every function here is pure and total: unparsable input becomes `None`
//! instead of an error, deferring reporting to the row-validation layer.

/// Checks whether a value parses as an email address.
///
/// The accepted shape is `local@domain.tld`: ASCII only, no embedded
/// whitespace, exactly one `@` and at least one `.` after it, with
/// non-empty segments on both sides of each separator.
///
/// # Arguments
///
/// * `value` - The candidate address; surrounding whitespace is ignored.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let candidate: &str = value.trim();
    if candidate.is_empty() || !candidate.is_ascii() {
        return false;
    }
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Normalizes an email cell.
///
/// Trims the value and validates it with [`is_valid_email`]. Case is
/// preserved; graph and lookup code lower-cases independently before
/// comparing.
///
/// # Returns
///
/// The trimmed address, or `None` when the cell is absent, empty, or
/// malformed.
#[must_use]
pub fn normalize_email(value: Option<&str>) -> Option<String> {
    let trimmed: &str = value?.trim();
    if is_valid_email(trimmed) {
        Some(String::from(trimmed))
    } else {
        None
    }
}

/// Normalizes a gender cell.
///
/// Recognized tokens (after trimming and lower-casing): `m`/`male`,
/// `f`/`female`, `non-binary`/`nonbinary`, `other`, `prefer-not-to-say`.
/// Any other non-empty token passes through lower-cased; empty input
/// becomes `None`.
#[must_use]
pub fn normalize_gender(value: Option<&str>) -> Option<String> {
    let lowered: String = value?.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    let canonical: &str = match lowered.as_str() {
        "m" | "male" => "male",
        "f" | "female" => "female",
        "non-binary" | "nonbinary" => "non-binary",
        "other" => "other",
        "prefer-not-to-say" => "prefer-not-to-say",
        _ => return Some(lowered),
    };
    Some(String::from(canonical))
}

/// Normalizes a nationality cell by trimming and upper-casing.
///
/// Any non-empty token is accepted; there is no ISO-3166 validation.
#[must_use]
pub fn normalize_nationality(value: Option<&str>) -> Option<String> {
    let trimmed: &str = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase())
}

/// Normalizes a phone cell against the E.164 shape.
///
/// Accepts `+` followed by 8 to 15 digits with no leading zero after the
/// `+`.
///
/// # Returns
///
/// The trimmed `+`-prefixed number, or `None` when the value does not
/// match.
#[must_use]
pub fn normalize_phone_e164(value: Option<&str>) -> Option<String> {
    let trimmed: &str = value?.trim();
    let digits: &str = trimmed.strip_prefix('+')?;
    if !(8..=15).contains(&digits.len()) {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') {
        return None;
    }
    Some(String::from(trimmed))
}

/// Normalizes a date cell against the literal `YYYY-MM-DD` shape.
///
/// Only the shape is checked; calendar validity is not (`2024-02-30`
/// passes). Downstream consumers treat the value as an opaque token.
#[must_use]
pub fn normalize_date_str(value: Option<&str>) -> Option<String> {
    let trimmed: &str = value?.trim();
    let bytes: &[u8] = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digit_positions: [usize; 8] = [0, 1, 2, 3, 5, 6, 8, 9];
    if digit_positions.iter().any(|&i| !bytes[i].is_ascii_digit()) {
        return None;
    }
    Some(String::from(trimmed))
}
