// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingRequiredField { field: "email" };
    assert_eq!(format!("{err}"), "email: required field is missing or empty");

    let err: DomainError = DomainError::MissingRequiredField { field: "givenName" };
    assert_eq!(
        format!("{err}"),
        "givenName: required field is missing or empty"
    );

    let err: DomainError = DomainError::InvalidEmail {
        value: String::from("not-an-email"),
    };
    assert_eq!(format!("{err}"), "email: invalid email address 'not-an-email'");
}

#[test]
fn test_domain_error_implements_error_trait() {
    let err: DomainError = DomainError::MissingRequiredField { field: "email" };
    let as_error: &dyn std::error::Error = &err;
    assert!(as_error.source().is_none());
}
