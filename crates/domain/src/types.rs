// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// One uploaded directory row after field-level normalization.
///
/// Every field is optional: a `None` means the cell was absent, empty, or
/// failed its normalizer. A row with `email == None` is invalid by
/// construction and can never become a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRow {
    /// Validated email address, original casing preserved.
    pub email: Option<String>,
    /// Given (first) name.
    pub given_name: Option<String>,
    /// Family (last) name.
    pub family_name: Option<String>,
    /// Department name as uploaded, trimmed.
    pub department: Option<String>,
    /// Location name as uploaded, trimmed.
    pub location: Option<String>,
    /// The manager's email address, original casing preserved.
    pub manager_email: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Employer-assigned identifier.
    pub employee_id: Option<String>,
    /// Start date, carried as an opaque trimmed token.
    pub start_date: Option<String>,
    /// Birth date in `YYYY-MM-DD` shape.
    pub birth_date: Option<String>,
    /// Upper-cased nationality token.
    pub nationality: Option<String>,
    /// Canonical or passthrough lower-cased gender token.
    pub gender: Option<String>,
    /// Phone number in E.164 shape.
    pub phone: Option<String>,
}

impl NormalizedRow {
    /// Returns the email lower-cased for graph, lookup, and duplicate
    /// comparisons, or `None` when the row has no usable email.
    #[must_use]
    pub fn email_lower(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns the manager email lower-cased, or `None` when the row
    /// references no manager.
    #[must_use]
    pub fn manager_email_lower(&self) -> Option<String> {
        self.manager_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_lowercase)
    }
}

/// The comparable fields of a directory record already in the database.
///
/// This is the diff engine's view of existing data; the caller's lookup
/// maps whatever storage shape it has onto these fields. Names follow the
/// stored-record side (`first_name`, not `given_name`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRecord {
    /// Stored first name.
    pub first_name: Option<String>,
    /// Stored last name.
    pub last_name: Option<String>,
    /// Stored job title.
    pub job_title: Option<String>,
    /// Stored employee identifier.
    pub employee_id: Option<String>,
    /// Stored start date.
    pub start_date: Option<String>,
    /// Stored birth date.
    pub birth_date: Option<String>,
    /// Stored nationality token.
    pub nationality: Option<String>,
    /// Stored gender token.
    pub gender: Option<String>,
    /// Stored phone number.
    pub phone: Option<String>,
}
