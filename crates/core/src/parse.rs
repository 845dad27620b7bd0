// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV parsing and row building for directory import.
//!
//! Parsing never fails outright: structural and per-record problems are
//! collected as row-numbered errors while the remaining records continue
//! through normalization.

use csv::StringRecord;
use rollcall_domain::{
    NormalizedRow, normalize_date_str, normalize_email, normalize_gender, normalize_nationality,
    normalize_phone_e164, validate_email,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Required CSV column headers, as they must appear on line 1.
pub const REQUIRED_HEADERS: [&str; 3] = ["email", "givenName", "familyName"];

/// The 1-based line number of the first data row; the header is line 1.
pub const FIRST_DATA_ROW: usize = 2;

/// One raw CSV row: header name → trimmed cell value, one entry per
/// column. Columns beyond the recognized set are carried but ignored by
/// normalization.
pub type ImportRow = BTreeMap<String, String>;

/// One row-scoped problem found during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based row number following the header-is-line-1 convention, so
    /// the first data row reports as 2. Structural problems that precede
    /// any data row use 0.
    pub row: usize,
    /// Human-readable message; the wording is stable for tests.
    pub message: String,
}

/// The parser's complete output for one CSV body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCsv {
    /// Header names observed on line 1, verbatim and in file order; empty
    /// when the body holds no data records.
    pub headers: Vec<String>,
    /// The subset of [`REQUIRED_HEADERS`] absent from `headers`.
    pub missing_headers: Vec<String>,
    /// Raw rows, one map per data record.
    pub raw_rows: Vec<ImportRow>,
    /// Normalized rows, parallel to `raw_rows`.
    pub normalized: Vec<NormalizedRow>,
    /// Row-numbered problems found while parsing.
    pub errors: Vec<RowError>,
}

/// Parses one uploaded CSV body into raw and normalized rows.
///
/// The body must carry a header row; cell values are trimmed, header
/// names are taken verbatim. A record the reader cannot parse degrades to
/// a default row plus a `"CSV parse error"` entry, and a row whose email
/// cell is missing or malformed gets a row-numbered error while the rest
/// of the row still normalizes. An empty or whitespace-only body returns
/// zero rows and the single error `"CSV body is empty"` at row 0.
#[must_use]
pub fn parse_csv(csv_text: &str) -> ParsedCsv {
    if csv_text.trim().is_empty() {
        return ParsedCsv {
            missing_headers: missing_from(&[]),
            errors: vec![RowError {
                row: 0,
                message: String::from("CSV body is empty"),
            }],
            ..ParsedCsv::default()
        };
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_text.as_bytes());

    let header_record: StringRecord = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return ParsedCsv {
                missing_headers: missing_from(&[]),
                errors: vec![RowError {
                    row: 0,
                    message: format!("CSV parse error: {e}"),
                }],
                ..ParsedCsv::default()
            };
        }
    };

    let mut raw_rows: Vec<ImportRow> = Vec::new();
    let mut normalized: Vec<NormalizedRow> = Vec::new();
    let mut errors: Vec<RowError> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + FIRST_DATA_ROW;

        let record: StringRecord = match result {
            Ok(record) => record,
            Err(e) => {
                raw_rows.push(ImportRow::new());
                normalized.push(NormalizedRow::default());
                errors.push(RowError {
                    row: row_number,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let raw: ImportRow = build_raw_row(&header_record, &record);
        if let Err(e) = validate_email(raw.get("email").map_or("", String::as_str)) {
            errors.push(RowError {
                row: row_number,
                message: e.to_string(),
            });
        }
        normalized.push(build_row(&raw));
        raw_rows.push(raw);
    }

    // The observed header set comes from the data records; a body with a
    // header line but no rows reports no headers (and therefore all
    // required headers as missing).
    let headers: Vec<String> = if raw_rows.is_empty() {
        Vec::new()
    } else {
        header_record.iter().map(String::from).collect()
    };
    let missing_headers: Vec<String> = missing_from(&headers);

    ParsedCsv {
        headers,
        missing_headers,
        raw_rows,
        normalized,
        errors,
    }
}

/// Returns the required headers absent from the observed set.
fn missing_from(headers: &[String]) -> Vec<String> {
    REQUIRED_HEADERS
        .iter()
        .filter(|&&required| !headers.iter().any(|header| header == required))
        .map(|&required| String::from(required))
        .collect()
}

/// Pairs header names with one record's cells, trimming cell values.
fn build_raw_row(headers: &StringRecord, record: &StringRecord) -> ImportRow {
    headers
        .iter()
        .zip(record.iter())
        .map(|(header, value)| (String::from(header), String::from(value.trim())))
        .collect()
}

/// Applies the field normalizers to one raw row.
fn build_row(raw: &ImportRow) -> NormalizedRow {
    let get_field = |name: &str| -> Option<String> {
        raw.get(name)
            .map(|value| String::from(value.trim()))
            .filter(|value| !value.is_empty())
    };

    NormalizedRow {
        email: normalize_email(get_field("email").as_deref()),
        given_name: get_field("givenName"),
        family_name: get_field("familyName"),
        department: get_field("department"),
        location: get_field("location"),
        manager_email: get_field("managerEmail"),
        job_title: get_field("jobTitle"),
        employee_id: get_field("employeeId"),
        start_date: get_field("startDate"),
        birth_date: normalize_date_str(get_field("birthDate").as_deref()),
        nationality: normalize_nationality(get_field("nationality").as_deref()),
        gender: normalize_gender(get_field("gender").as_deref()),
        phone: normalize_phone_e164(get_field("phone").as_deref()),
    }
}
