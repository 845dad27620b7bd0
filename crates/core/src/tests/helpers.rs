// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommitRecord, RecordAction};
use rollcall_domain::{ExistingRecord, NormalizedRow};

pub fn create_test_row(email: &str) -> NormalizedRow {
    NormalizedRow {
        email: Some(String::from(email)),
        given_name: Some(String::from("Avery")),
        family_name: Some(String::from("Quinn")),
        ..NormalizedRow::default()
    }
}

pub fn create_test_row_with_manager(email: &str, manager: &str) -> NormalizedRow {
    NormalizedRow {
        manager_email: Some(String::from(manager)),
        ..create_test_row(email)
    }
}

pub fn create_existing_record() -> ExistingRecord {
    ExistingRecord {
        first_name: Some(String::from("Avery")),
        last_name: Some(String::from("Quinn")),
        ..ExistingRecord::default()
    }
}

pub fn create_commit_record(action: RecordAction, duplicate: bool) -> CommitRecord {
    CommitRecord {
        incoming: create_test_row("avery@example.com"),
        action,
        duplicate,
        reason: Vec::new(),
        changes: Vec::new(),
        issues: Vec::new(),
    }
}
