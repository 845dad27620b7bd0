// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during row field validation.
///
/// `Display` output is part of the import contract: the strings surface
/// verbatim in per-row error lists and must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required column is missing from the row or holds an empty value.
    MissingRequiredField {
        /// The column name as it appears in the CSV header.
        field: &'static str,
    },
    /// The email cell is present but does not parse as an address.
    InvalidEmail {
        /// The rejected input value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField { field } => {
                write!(f, "{field}: required field is missing or empty")
            }
            Self::InvalidEmail { value } => {
                write!(f, "email: invalid email address '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
