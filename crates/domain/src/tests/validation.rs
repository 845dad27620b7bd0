// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, NormalizedRow, validate_email, validate_required};

fn create_test_row() -> NormalizedRow {
    NormalizedRow {
        email: Some(String::from("john@example.com")),
        given_name: Some(String::from("John")),
        family_name: Some(String::from("Doe")),
        ..NormalizedRow::default()
    }
}

#[test]
fn test_validate_email_accepts_valid_address() {
    let result: Result<(), DomainError> = validate_email("john@example.com");
    assert!(result.is_ok());
}

#[test]
fn test_validate_email_rejects_empty_as_missing() {
    let result: Result<(), DomainError> = validate_email("   ");
    assert!(matches!(
        result,
        Err(DomainError::MissingRequiredField { field: "email" })
    ));
}

#[test]
fn test_validate_email_rejects_malformed_as_invalid() {
    let result: Result<(), DomainError> = validate_email("not-an-email");
    assert!(matches!(result, Err(DomainError::InvalidEmail { .. })));

    let err: DomainError = result.unwrap_err();
    assert_eq!(format!("{err}"), "email: invalid email address 'not-an-email'");
}

#[test]
fn test_validate_email_trims_before_checking() {
    let result: Result<(), DomainError> = validate_email("  john@example.com  ");
    assert!(result.is_ok());
}

#[test]
fn test_validate_required_accepts_complete_row() {
    let row: NormalizedRow = create_test_row();
    let errors: Vec<DomainError> = validate_required(&row);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_required_reports_missing_given_name() {
    let mut row: NormalizedRow = create_test_row();
    row.given_name = None;

    let errors: Vec<DomainError> = validate_required(&row);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        format!("{}", errors[0]),
        "givenName: required field is missing or empty"
    );
}

#[test]
fn test_validate_required_reports_missing_names_in_column_order() {
    let row: NormalizedRow = NormalizedRow {
        email: Some(String::from("john@example.com")),
        ..NormalizedRow::default()
    };

    let errors: Vec<DomainError> = validate_required(&row);
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        errors[0],
        DomainError::MissingRequiredField { field: "givenName" }
    ));
    assert!(matches!(
        errors[1],
        DomainError::MissingRequiredField {
            field: "familyName"
        }
    ));
}
