// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import orchestration, the engine's two entry points.
//!
//! Validate mode parses and runs per-row checks only, keeping the
//! feedback loop cheap while the operator fixes their file. Commit mode
//! runs the full reconciliation pass and returns a [`CommitPlan`]; the
//! caller decides whether to apply it. Neither mode writes anything.

use crate::collect::{KnownNames, NewNames, collect_new_names};
use crate::diff::{RecordDiff, diff_record};
use crate::graph::{ManagerDiagnostics, diagnose_managers};
use crate::overview::{ActionCounts, summarize};
use crate::parse::{FIRST_DATA_ROW, ParsedCsv, REQUIRED_HEADERS, RowError, parse_csv};
use crate::plan::{CommitOverview, CommitPlan, CommitRecord, RecordAction};
use crate::resolve::{DirectoryLookup, ManagerResolver};
use rollcall_domain::{ExistingRecord, NormalizedRow, validate_required};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Number of normalized rows echoed back by validate mode.
pub const PREVIEW_ROW_LIMIT: usize = 3;

/// Number of row errors echoed back by validate mode. The cap trims the
/// display payload only; the `invalid` counter covers the full batch.
pub const SAMPLE_ERROR_LIMIT: usize = 5;

/// Read-only report produced by [`validate_import`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportValidation {
    /// Number of data rows in the upload.
    pub rows: usize,
    /// Rows that passed every per-row check.
    pub valid: usize,
    /// Rows that failed at least one per-row check.
    pub invalid: usize,
    /// Headers every upload must carry.
    pub required_headers: Vec<String>,
    /// Required headers absent from line 1.
    pub missing_headers: Vec<String>,
    /// Headers observed on line 1, verbatim.
    pub inferred_headers: Vec<String>,
    /// Up to [`PREVIEW_ROW_LIMIT`] normalized rows, in file order.
    pub preview: Vec<NormalizedRow>,
    /// Up to [`SAMPLE_ERROR_LIMIT`] row errors, ordered by row number.
    pub sample_errors: Vec<RowError>,
}

impl ImportValidation {
    /// True when the upload carries every required header and no row
    /// error anywhere in the batch, including structural errors reported
    /// against row 0.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_headers.is_empty() && self.sample_errors.is_empty()
    }
}

/// Validates an upload without touching the directory.
///
/// Row errors combine the parser's findings with presence checks for the
/// required name columns; a row failing several checks still counts once
/// toward `invalid`.
///
/// # Arguments
///
/// * `csv_text` - The raw CSV upload, header line included.
///
/// # Returns
///
/// An [`ImportValidation`] covering every row of the upload.
#[must_use]
pub fn validate_import(csv_text: &str) -> ImportValidation {
    let parsed: ParsedCsv = parse_csv(csv_text);

    let mut errors_by_row: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for error in &parsed.errors {
        errors_by_row
            .entry(error.row)
            .or_default()
            .push(error.message.clone());
    }

    for (idx, row) in parsed.normalized.iter().enumerate() {
        let row_number: usize = idx + FIRST_DATA_ROW;
        for error in validate_required(row) {
            errors_by_row
                .entry(row_number)
                .or_default()
                .push(error.to_string());
        }
    }

    let rows: usize = parsed.normalized.len();
    // Structural errors sit at row 0 and must not count against data rows.
    let invalid: usize = errors_by_row
        .keys()
        .filter(|&&row| row >= FIRST_DATA_ROW)
        .count();

    let sample_errors: Vec<RowError> = errors_by_row
        .iter()
        .flat_map(|(&row, messages)| {
            messages.iter().map(move |message| RowError {
                row,
                message: message.clone(),
            })
        })
        .take(SAMPLE_ERROR_LIMIT)
        .collect();

    tracing::debug!(
        rows,
        invalid,
        missing_headers = parsed.missing_headers.len(),
        "Validated directory import upload"
    );

    ImportValidation {
        rows,
        valid: rows - invalid,
        invalid,
        required_headers: REQUIRED_HEADERS.iter().map(|&h| String::from(h)).collect(),
        missing_headers: parsed.missing_headers,
        inferred_headers: parsed.headers,
        preview: parsed
            .normalized
            .into_iter()
            .take(PREVIEW_ROW_LIMIT)
            .collect(),
        sample_errors,
    }
}

/// Builds the commit plan for an upload against the live directory.
///
/// Each row carrying a usable email is looked up through `directory` and
/// diffed field by field; rows without one short-circuit to `invalid`
/// and keep the parser's messages as their reason. Manager diagnostics
/// run over the whole batch and their findings are attached to the rows
/// they concern.
///
/// # Arguments
///
/// * `csv_text` - The raw CSV upload, header line included.
/// * `directory` - Lookup into the records that already exist.
/// * `resolver` - Classifier for manager emails, fed lower-cased input.
/// * `known` - Department and location names that already exist.
///
/// # Returns
///
/// A [`CommitPlan`] pairing the batch overview with one record per row.
#[must_use]
pub fn plan_import<D, R>(
    csv_text: &str,
    directory: &D,
    resolver: &R,
    known: &KnownNames,
) -> CommitPlan
where
    D: DirectoryLookup,
    R: ManagerResolver,
{
    let parsed: ParsedCsv = parse_csv(csv_text);

    let mut reasons_by_row: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for error in &parsed.errors {
        if error.row >= FIRST_DATA_ROW {
            reasons_by_row
                .entry(error.row)
                .or_default()
                .push(error.message.clone());
        }
    }

    let mut seen_emails: HashSet<String> = HashSet::new();
    let mut records: Vec<CommitRecord> = Vec::with_capacity(parsed.normalized.len());

    for (idx, row) in parsed.normalized.iter().enumerate() {
        let row_number: usize = idx + FIRST_DATA_ROW;

        #[allow(clippy::option_if_let_else)]
        let record: CommitRecord = match row.email_lower() {
            None => CommitRecord {
                incoming: row.clone(),
                action: RecordAction::Invalid,
                duplicate: false,
                reason: reasons_by_row.remove(&row_number).unwrap_or_default(),
                changes: Vec::new(),
                issues: Vec::new(),
            },
            Some(email) => {
                // First occurrence wins; later rows with the same email
                // are flagged but still planned.
                let duplicate: bool = !seen_emails.insert(email.clone());
                let existing: Option<ExistingRecord> = directory.find_by_email(&email);
                let diff: RecordDiff = diff_record(existing.as_ref(), row);
                CommitRecord {
                    incoming: row.clone(),
                    action: diff.action,
                    duplicate,
                    reason: Vec::new(),
                    changes: diff.changes,
                    issues: Vec::new(),
                }
            }
        };
        records.push(record);
    }

    let diagnostics: ManagerDiagnostics = diagnose_managers(&parsed.normalized, resolver);
    for record in &mut records {
        if let Some(email) = record.incoming.email_lower() {
            record.issues = diagnostics.issues_for(&email).to_vec();
        }
    }

    let names: NewNames = collect_new_names(&parsed.normalized, known);
    let counts: ActionCounts = summarize(&records);

    let overview: CommitOverview = CommitOverview {
        creates: counts.creates,
        updates: counts.updates,
        skips: counts.skips,
        duplicates: counts.duplicates,
        invalid: counts.invalid,
        new_departments: names.departments,
        new_locations: names.locations,
        manager_missing: diagnostics.manager_missing,
        manager_self: diagnostics.manager_self,
        manager_cycles: diagnostics.manager_cycles,
    };

    tracing::debug!(
        creates = overview.creates,
        updates = overview.updates,
        skips = overview.skips,
        duplicates = overview.duplicates,
        invalid = overview.invalid,
        "Assembled directory import commit plan"
    );

    CommitPlan { overview, records }
}
