// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection of department and location names new to the organization.

use rollcall_domain::NormalizedRow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Names the organization already knows, pre-lowercased by the caller.
#[derive(Debug, Clone, Default)]
pub struct KnownNames {
    /// Known department names, lower-cased.
    pub departments: HashSet<String>,
    /// Known location names, lower-cased.
    pub locations: HashSet<String>,
}

/// Names appearing in a batch that the organization does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNames {
    /// New department names, first-seen casing, in row order.
    pub departments: Vec<String>,
    /// New location names, first-seen casing, in row order.
    pub locations: Vec<String>,
}

/// Scans the batch for department and location names not already known.
///
/// Comparison is case-insensitive; each new name is reported once, in the
/// casing of its first occurrence, in row order. Values arrive trimmed
/// from the parser and empty cells are already `None`.
#[must_use]
pub fn collect_new_names(rows: &[NormalizedRow], known: &KnownNames) -> NewNames {
    NewNames {
        departments: collect_distinct(
            rows.iter().filter_map(|row| row.department.as_deref()),
            &known.departments,
        ),
        locations: collect_distinct(
            rows.iter().filter_map(|row| row.location.as_deref()),
            &known.locations,
        ),
    }
}

/// Case-insensitive set difference preserving first-seen order.
fn collect_distinct<'a, I>(values: I, known: &HashSet<String>) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut collected: Vec<String> = Vec::new();

    for value in values {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key: String = trimmed.to_lowercase();
        if known.contains(&key) {
            continue;
        }
        if seen.insert(key) {
            collected.push(String::from(trimmed));
        }
    }

    collected
}
