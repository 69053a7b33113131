// Copyright 2024 StrataDB Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The topology diagnostic value type

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when a diagnostic would violate its counting invariants
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// The four counters of a single diagnostic do not add up
    #[error("Counter mismatch: total {total} != reachable {reachable} + unreachable {unreachable} + indeterminate {indeterminate}")]
    CounterMismatch {
        total: usize,
        reachable: usize,
        unreachable: usize,
        indeterminate: usize,
    },

    /// A parent counter does not equal the sum over its children
    #[error("Aggregation mismatch for {counter}: parent has {parent}, children sum to {children}")]
    ChildSumMismatch {
        counter: &'static str,
        parent: usize,
        children: usize,
    },
}

/// Hierarchical summary of node availability
///
/// A diagnostic carries four counters and a mapping from grouping label to
/// a nested diagnostic of the same shape. The root groups by datacenter,
/// each datacenter groups by rack, and rack diagnostics are leaves. Two
/// invariants hold at every level:
///
/// - `total == reachable + unreachable + indeterminate`
/// - each counter of a non-leaf equals the sum of that counter over its
///   immediate children
///
/// Diagnostics are immutable values: equality is deep structural equality
/// and the order of the children mapping carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyDiagnostic {
    /// Total number of nodes in this grouping
    total: usize,

    /// Nodes known to be reachable
    reachable: usize,

    /// Nodes known to be unreachable
    unreachable: usize,

    /// Nodes whose state could not be classified
    indeterminate: usize,

    /// Nested diagnostics, keyed by grouping label (empty for leaves)
    children: HashMap<String, TopologyDiagnostic>,
}

impl TopologyDiagnostic {
    /// Create a diagnostic, checking both counting invariants
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::CounterMismatch`] if the four counters do
    /// not add up, or [`DiagnosticError::ChildSumMismatch`] if any counter
    /// disagrees with the sum over `children`.
    pub fn new(
        total: usize,
        reachable: usize,
        unreachable: usize,
        indeterminate: usize,
        children: HashMap<String, TopologyDiagnostic>,
    ) -> Result<Self, DiagnosticError> {
        if total != reachable + unreachable + indeterminate {
            return Err(DiagnosticError::CounterMismatch {
                total,
                reachable,
                unreachable,
                indeterminate,
            });
        }

        if !children.is_empty() {
            let sums = [
                ("total", total, children.values().map(|c| c.total).sum::<usize>()),
                ("reachable", reachable, children.values().map(|c| c.reachable).sum::<usize>()),
                ("unreachable", unreachable, children.values().map(|c| c.unreachable).sum::<usize>()),
                ("indeterminate", indeterminate, children.values().map(|c| c.indeterminate).sum::<usize>()),
            ];
            for (counter, parent, child_sum) in sums {
                if parent != child_sum {
                    return Err(DiagnosticError::ChildSumMismatch {
                        counter,
                        parent,
                        children: child_sum,
                    });
                }
            }
        }

        Ok(Self {
            total,
            reachable,
            unreachable,
            indeterminate,
            children,
        })
    }

    /// Create a leaf diagnostic (no children)
    pub fn leaf(
        total: usize,
        reachable: usize,
        unreachable: usize,
        indeterminate: usize,
    ) -> Result<Self, DiagnosticError> {
        Self::new(total, reachable, unreachable, indeterminate, HashMap::new())
    }

    // Assembly path for the generator, which computes parent counters by
    // summing the exact tallies its children were built from.
    pub(crate) fn from_parts(
        total: usize,
        reachable: usize,
        unreachable: usize,
        indeterminate: usize,
        children: HashMap<String, TopologyDiagnostic>,
    ) -> Self {
        Self {
            total,
            reachable,
            unreachable,
            indeterminate,
            children,
        }
    }

    /// Total number of nodes in this grouping
    pub fn total(&self) -> usize {
        self.total
    }

    /// Nodes known to be reachable
    pub fn reachable(&self) -> usize {
        self.reachable
    }

    /// Nodes known to be unreachable
    pub fn unreachable(&self) -> usize {
        self.unreachable
    }

    /// Nodes whose state could not be classified
    pub fn indeterminate(&self) -> usize {
        self.indeterminate
    }

    /// Nested diagnostics, keyed by grouping label
    pub fn children(&self) -> &HashMap<String, TopologyDiagnostic> {
        &self.children
    }

    /// True if this diagnostic has no children (rack level)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
