// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reduction of per-record outcomes into summary counters.

use crate::plan::{CommitRecord, RecordAction};
use serde::{Deserialize, Serialize};

/// Action counters for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionCounts {
    /// Rows planning as creates.
    pub creates: usize,
    /// Rows planning as updates.
    pub updates: usize,
    /// Rows planning as skips.
    pub skips: usize,
    /// Rows flagged as in-batch duplicates.
    pub duplicates: usize,
    /// Rows rejected during validation.
    pub invalid: usize,
}

/// Reduces per-record outcomes into counters.
///
/// `invalid` is exclusive: an invalid record counts nowhere else, not
/// even in `duplicates`. The duplicate flag is orthogonal to the action:
/// a duplicate create increments both `creates` and `duplicates`, and a
/// duplicate is never short-circuited into a skip.
#[must_use]
pub fn summarize(records: &[CommitRecord]) -> ActionCounts {
    let mut counts: ActionCounts = ActionCounts::default();

    for record in records {
        match record.action {
            RecordAction::Invalid => {
                counts.invalid += 1;
                continue;
            }
            RecordAction::Create => counts.creates += 1,
            RecordAction::Update => counts.updates += 1,
            RecordAction::Skip => counts.skips += 1,
        }

        if record.duplicate {
            counts.duplicates += 1;
        }
    }

    counts
}
