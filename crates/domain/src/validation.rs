// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::normalize::is_valid_email;
use crate::types::NormalizedRow;

/// Validates the raw email cell of one uploaded row.
///
/// This distinguishes an absent value from a present-but-malformed one so
/// the two cases surface with different messages; [`is_valid_email`]
/// decides malformedness.
///
/// # Arguments
///
/// * `value` - The raw cell content before normalization
///
/// # Returns
///
/// * `Ok(())` if the cell holds a parseable address
/// * `Err(DomainError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The cell is empty or whitespace-only (`MissingRequiredField`)
/// - The cell does not parse as an email address (`InvalidEmail`)
pub fn validate_email(value: &str) -> Result<(), DomainError> {
    let trimmed: &str = value.trim();

    // Rule: email is a required column
    if trimmed.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "email" });
    }

    // Rule: a present email must parse
    if !is_valid_email(trimmed) {
        return Err(DomainError::InvalidEmail {
            value: String::from(trimmed),
        });
    }

    Ok(())
}

/// Checks the non-email required fields of a normalized row.
///
/// Email is validated separately against the raw cell (see
/// [`validate_email`]); this covers the remaining required columns so a
/// caller gets every problem in one pass instead of the first one found.
///
/// # Arguments
///
/// * `row` - The normalized row to check
///
/// # Returns
///
/// One `DomainError::MissingRequiredField` per absent required field, in
/// column order; empty when the row is complete.
#[must_use]
pub fn validate_required(row: &NormalizedRow) -> Vec<DomainError> {
    let mut errors: Vec<DomainError> = Vec::new();

    if row.given_name.is_none() {
        errors.push(DomainError::MissingRequiredField { field: "givenName" });
    }

    if row.family_name.is_none() {
        errors.push(DomainError::MissingRequiredField {
            field: "familyName",
        });
    }

    errors
}
