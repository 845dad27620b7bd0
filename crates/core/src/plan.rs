// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commit-plan value types: the side-effect-free description of what one
//! import would do, handed to an external writer.

use crate::graph::ManagerIssue;
use rollcall_domain::NormalizedRow;
use serde::{Deserialize, Serialize};

/// The planned disposition of one uploaded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    /// No existing record: the row would be inserted.
    Create,
    /// An existing record differs in at least one compared field.
    Update,
    /// An existing record already matches every compared field.
    Skip,
    /// The row's email failed validation; nothing would be written.
    Invalid,
}

impl RecordAction {
    /// Converts this action to its wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Skip => "skip",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for RecordAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected field-level delta, named by the stored-record side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitChange {
    /// Stored-record field name in wire form (`firstName`, `jobTitle`, ...).
    pub field: String,
    /// Current stored value; `None` when the field is unset today.
    pub from: Option<String>,
    /// Incoming value that would be written.
    pub to: String,
}

/// The planned outcome for one uploaded row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// The normalized row as uploaded.
    pub incoming: NormalizedRow,
    /// Planned disposition.
    pub action: RecordAction,
    /// Whether the same normalized email appeared earlier in this upload.
    pub duplicate: bool,
    /// Why the row is invalid; empty for valid rows.
    pub reason: Vec<String>,
    /// Field-level deltas; populated only for updates.
    pub changes: Vec<CommitChange>,
    /// Manager-graph findings for this row's email.
    pub issues: Vec<ManagerIssue>,
}

/// Aggregate counters and batch-wide findings for one upload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOverview {
    /// Rows that would insert a new record.
    pub creates: usize,
    /// Rows that would modify an existing record.
    pub updates: usize,
    /// Rows already fully represented in the directory.
    pub skips: usize,
    /// Rows whose normalized email appeared earlier in the upload.
    pub duplicates: usize,
    /// Rows rejected during validation.
    pub invalid: usize,
    /// Department names in the batch not yet known to the organization.
    pub new_departments: Vec<String>,
    /// Location names in the batch not yet known to the organization.
    pub new_locations: Vec<String>,
    /// Manager references that resolved nowhere, counted per row.
    pub manager_missing: usize,
    /// Rows naming themselves as manager, counted per distinct email.
    pub manager_self: usize,
    /// Reporting-line cycles in the batch, self-loops included.
    pub manager_cycles: usize,
}

impl CommitOverview {
    /// True when committing this plan would write anything.
    #[must_use]
    pub const fn requires_writes(&self) -> bool {
        self.creates > 0 || self.updates > 0
    }
}

/// The complete, side-effect-free output of processing one CSV upload.
///
/// The engine never writes; an external writer consumes this plan when
/// its own dry-run flag is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitPlan {
    /// Aggregate counters and batch-wide findings.
    pub overview: CommitOverview,
    /// Per-row outcomes, in upload order.
    pub records: Vec<CommitRecord>,
}

impl CommitPlan {
    /// Number of rows the plan covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the upload contained no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
