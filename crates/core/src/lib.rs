// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collect;
mod diff;
mod graph;
mod import;
mod overview;
mod parse;
mod plan;
mod resolve;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use collect::{KnownNames, NewNames, collect_new_names};
pub use diff::{RecordDiff, diff_record};
pub use graph::{ManagerDiagnostics, ManagerIssue, diagnose_managers};
pub use import::{
    ImportValidation, PREVIEW_ROW_LIMIT, SAMPLE_ERROR_LIMIT, plan_import, validate_import,
};
pub use overview::{ActionCounts, summarize};
pub use parse::{FIRST_DATA_ROW, ImportRow, ParsedCsv, REQUIRED_HEADERS, RowError, parse_csv};
pub use plan::{CommitChange, CommitOverview, CommitPlan, CommitRecord, RecordAction};
pub use resolve::{DirectoryLookup, ManagerResolver, ManagerSource};

// Domain shapes flow through the public API; re-export them so callers
// need only this crate.
pub use rollcall_domain::{ExistingRecord, NormalizedRow};
