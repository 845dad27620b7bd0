// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level diffing of an uploaded row against the stored record.

use crate::plan::{CommitChange, RecordAction};
use rollcall_domain::{ExistingRecord, NormalizedRow};

/// The diff engine's verdict for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDiff {
    /// `Create`, `Update`, or `Skip`; `Invalid` is assigned upstream
    /// before the diff runs.
    pub action: RecordAction,
    /// Deltas in field-declaration order; empty for creates and skips.
    pub changes: Vec<CommitChange>,
}

/// Compares one normalized row against the stored record, if any.
///
/// With no existing record the row plans as a create with no changes.
/// Otherwise a fixed set of field pairs is compared in declaration order
/// and each difference becomes a change named by the stored-record side
/// (`givenName` compares against `firstName` and reports as `firstName`).
/// An incoming `None` never produces a change: absence in the upload is
/// not an intentional clear, so imports never erase stored data.
#[must_use]
pub fn diff_record(existing: Option<&ExistingRecord>, incoming: &NormalizedRow) -> RecordDiff {
    let Some(existing) = existing else {
        return RecordDiff {
            action: RecordAction::Create,
            changes: Vec::new(),
        };
    };

    let mut changes: Vec<CommitChange> = Vec::new();
    push_change(
        &mut changes,
        "firstName",
        existing.first_name.as_deref(),
        incoming.given_name.as_deref(),
    );
    push_change(
        &mut changes,
        "lastName",
        existing.last_name.as_deref(),
        incoming.family_name.as_deref(),
    );
    push_change(
        &mut changes,
        "jobTitle",
        existing.job_title.as_deref(),
        incoming.job_title.as_deref(),
    );
    push_change(
        &mut changes,
        "employeeId",
        existing.employee_id.as_deref(),
        incoming.employee_id.as_deref(),
    );
    push_change(
        &mut changes,
        "startDate",
        existing.start_date.as_deref(),
        incoming.start_date.as_deref(),
    );
    push_change(
        &mut changes,
        "birthDate",
        existing.birth_date.as_deref(),
        incoming.birth_date.as_deref(),
    );
    push_change(
        &mut changes,
        "nationality",
        existing.nationality.as_deref(),
        incoming.nationality.as_deref(),
    );
    push_change(
        &mut changes,
        "gender",
        existing.gender.as_deref(),
        incoming.gender.as_deref(),
    );
    push_change(
        &mut changes,
        "phone",
        existing.phone.as_deref(),
        incoming.phone.as_deref(),
    );

    let action: RecordAction = if changes.is_empty() {
        RecordAction::Skip
    } else {
        RecordAction::Update
    };

    RecordDiff { action, changes }
}

/// Appends a change when the incoming value is present and differs.
fn push_change(
    changes: &mut Vec<CommitChange>,
    field: &str,
    from: Option<&str>,
    to: Option<&str>,
) {
    let Some(to) = to else {
        return;
    };
    if from == Some(to) {
        return;
    }
    changes.push(CommitChange {
        field: String::from(field),
        from: from.map(String::from),
        to: String::from(to),
    });
}
