// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manager-graph diagnostics over one upload batch.
//!
//! Builds the directed employee → manager graph implied by the rows,
//! counts self-references and cycles, and classifies every manager
//! reference through the injected resolver.

use crate::resolve::{ManagerResolver, ManagerSource};
use rollcall_domain::NormalizedRow;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// One manager-graph finding, tagged against a row's email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManagerIssue {
    /// The row names itself as its manager.
    SelfManager,
    /// The manager email resolves neither to the database nor the batch.
    ManagerNotFound,
    /// The manager is another row of this same upload.
    ManagerInBatch,
}

/// Batch-level manager diagnostics.
///
/// Findings are advisory: a plan carrying them can still be committed at
/// the caller's choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDiagnostics {
    /// Issue tags keyed by the row's lower-cased email, deduplicated per
    /// email, in discovery order.
    pub issues: BTreeMap<String, Vec<ManagerIssue>>,
    /// Manager references that resolved nowhere, counted per row.
    pub manager_missing: usize,
    /// Distinct emails naming themselves as manager.
    pub manager_self: usize,
    /// Cycles in the reporting graph, self-loops included.
    pub manager_cycles: usize,
}

impl ManagerDiagnostics {
    /// Returns the tags recorded for a lower-cased email.
    #[must_use]
    pub fn issues_for(&self, email: &str) -> &[ManagerIssue] {
        self.issues.get(email).map_or(&[], Vec::as_slice)
    }

    /// Records a tag against an email unless already present.
    fn tag(&mut self, email: &str, issue: ManagerIssue) {
        let tags: &mut Vec<ManagerIssue> = self.issues.entry(String::from(email)).or_default();
        if !tags.contains(&issue) {
            tags.push(issue);
        }
    }
}

/// Runs manager diagnostics over one batch of normalized rows.
///
/// Nodes are the distinct lower-cased emails appearing as a row's own
/// email or as its referenced manager; edges run employee → manager for
/// every row where both are non-empty. A self-loop is a degenerate cycle:
/// it counts once per distinct email toward both `manager_self` and
/// `manager_cycles` and stays out of the traversal edge set. Every other
/// edge reaching an in-progress node during the three-color traversal
/// adds one cycle.
///
/// The resolver is invoked once per row with a non-empty manager email,
/// always lower-cased. A `None` answer tags `manager-not-found` and
/// counts toward `manager_missing` per row; a `Batch` answer tags
/// `manager-in-batch`; a `Database` answer needs no annotation.
///
/// # Panics
///
/// In debug builds, panics when the resolver classifies an email as
/// in-batch that no row of this upload carries. That is a caller contract
/// violation, not a data problem; release builds log a warning and honor
/// the answer.
#[must_use]
pub fn diagnose_managers<R>(rows: &[NormalizedRow], resolver: &R) -> ManagerDiagnostics
where
    R: ManagerResolver,
{
    let mut diagnostics: ManagerDiagnostics = ManagerDiagnostics::default();

    let batch_emails: HashSet<String> =
        rows.iter().filter_map(NormalizedRow::email_lower).collect();

    let mut nodes: BTreeSet<String> = BTreeSet::new();
    let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut self_edges: BTreeSet<String> = BTreeSet::new();

    for row in rows {
        let Some(employee) = row.email_lower() else {
            continue;
        };
        nodes.insert(employee.clone());

        let Some(manager) = row.manager_email_lower() else {
            continue;
        };
        nodes.insert(manager.clone());

        if employee == manager {
            self_edges.insert(employee.clone());
            diagnostics.tag(&employee, ManagerIssue::SelfManager);
        } else {
            edges
                .entry(employee.clone())
                .or_default()
                .insert(manager.clone());
        }

        match resolver.resolve_manager(&manager) {
            None => {
                diagnostics.tag(&employee, ManagerIssue::ManagerNotFound);
                diagnostics.manager_missing += 1;
            }
            Some(ManagerSource::Batch) => {
                let in_batch: bool = batch_emails.contains(&manager);
                debug_assert!(
                    in_batch,
                    "resolver classified '{manager}' as in-batch but no row carries it"
                );
                if !in_batch {
                    tracing::warn!(
                        "resolver classified '{manager}' as in-batch but no row carries it"
                    );
                }
                diagnostics.tag(&employee, ManagerIssue::ManagerInBatch);
            }
            Some(ManagerSource::Database) => {}
        }
    }

    diagnostics.manager_self = self_edges.len();
    diagnostics.manager_cycles = self_edges.len() + count_back_edges(&nodes, &edges);

    diagnostics
}

/// Traversal state for the three-color depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Explicit stack frame: `Enter` grays a node and schedules its
/// successors, `Exit` blackens it once the subtree is done.
enum Visit<'a> {
    Enter(&'a str),
    Exit(&'a str),
}

/// Counts edges that reach a gray (in-progress) node. Each such back edge
/// closes one cycle. Every white node is taken as a fresh root, so total
/// work is O(V+E) regardless of input order.
fn count_back_edges(
    nodes: &BTreeSet<String>,
    edges: &BTreeMap<String, BTreeSet<String>>,
) -> usize {
    let mut colors: BTreeMap<&str, Color> = nodes
        .iter()
        .map(|node| (node.as_str(), Color::White))
        .collect();
    let mut back_edges: usize = 0;

    for root in nodes {
        if colors.get(root.as_str()).copied() != Some(Color::White) {
            continue;
        }

        let mut stack: Vec<Visit<'_>> = vec![Visit::Enter(root.as_str())];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    // A node can be scheduled twice before its first pop.
                    if colors.get(node).copied() != Some(Color::White) {
                        continue;
                    }
                    colors.insert(node, Color::Gray);
                    stack.push(Visit::Exit(node));

                    let Some(successors) = edges.get(node) else {
                        continue;
                    };
                    for successor in successors {
                        match colors.get(successor.as_str()).copied() {
                            Some(Color::Gray) => back_edges += 1,
                            Some(Color::White) => stack.push(Visit::Enter(successor.as_str())),
                            _ => {}
                        }
                    }
                }
                Visit::Exit(node) => {
                    colors.insert(node, Color::Black);
                }
            }
        }
    }

    back_edges
}
