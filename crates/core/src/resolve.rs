// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected capabilities for resolving emails against the caller's world.
//!
//! The engine performs no I/O of its own; callers hand it these
//! single-method capabilities. Both traits are blanket-implemented for
//! closures so tests and thin callers can pass plain functions.

use rollcall_domain::ExistingRecord;
use serde::{Deserialize, Serialize};

/// Where a referenced manager email was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerSource {
    /// The manager already exists in the directory database.
    #[serde(rename = "db")]
    Database,
    /// The manager appears as another row of the same upload, not yet in
    /// the database.
    #[serde(rename = "csv")]
    Batch,
}

/// Resolves a manager reference during graph diagnostics.
///
/// Invoked once per row with a non-empty manager email. The argument is
/// always lower-cased; `None` means the email is unknown on both sides.
pub trait ManagerResolver {
    /// Classifies the given lower-cased email.
    fn resolve_manager(&self, email: &str) -> Option<ManagerSource>;
}

impl<F> ManagerResolver for F
where
    F: Fn(&str) -> Option<ManagerSource>,
{
    fn resolve_manager(&self, email: &str) -> Option<ManagerSource> {
        self(email)
    }
}

/// Looks up the existing directory record for an uploaded row.
///
/// The argument is the row's lower-cased email; organization scoping is
/// the caller's concern. `None` means no record exists and the row plans
/// as a create.
pub trait DirectoryLookup {
    /// Returns the comparable fields of the stored record, if any.
    fn find_by_email(&self, email: &str) -> Option<ExistingRecord>;
}

impl<F> DirectoryLookup for F
where
    F: Fn(&str) -> Option<ExistingRecord>,
{
    fn find_by_email(&self, email: &str) -> Option<ExistingRecord> {
        self(email)
    }
}
