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

//! Topology diagnostic generation - one catalog snapshot in, one tree out

use crate::diagnostic::TopologyDiagnostic;
use hashbrown::HashMap;
use std::collections::HashMap as ChildMap;
use stratadb_catalog::{NodeCatalog, NodeState};
use tracing::debug;

/// Grouping label used for nodes that advertise no datacenter
pub const FALLBACK_DATACENTER: &str = "(unknown)";

/// Grouping label used for nodes that advertise no rack
pub const FALLBACK_RACK: &str = "(unknown)";

/// Running counts for one grouping of nodes
///
/// `record` bumps `total` and exactly one bucket, so the counter invariant
/// holds for every tally, and therefore for every diagnostic built from one.
#[derive(Debug, Clone, Copy, Default)]
struct NodeTally {
    total: usize,
    reachable: usize,
    unreachable: usize,
    indeterminate: usize,
}

impl NodeTally {
    fn record(&mut self, state: NodeState) {
        self.total += 1;
        match state {
            NodeState::Up => self.reachable += 1,
            NodeState::Down => self.unreachable += 1,
            // Every other state, including ones introduced after this
            // version of the client, counts as indeterminate
            _ => self.indeterminate += 1,
        }
    }

    fn merge(&mut self, other: &NodeTally) {
        self.total += other.total;
        self.reachable += other.reachable;
        self.unreachable += other.unreachable;
        self.indeterminate += other.indeterminate;
    }

    fn into_diagnostic(self, children: ChildMap<String, TopologyDiagnostic>) -> TopologyDiagnostic {
        TopologyDiagnostic::from_parts(self.total, self.reachable, self.unreachable, self.indeterminate, children)
    }
}

/// Generates availability diagnostics from a node catalog
///
/// Pure function of the catalog snapshot: no caching, no background work,
/// and no side effects beyond a debug log line. Call [`generate`] whenever
/// a fresh diagnostic is needed.
///
/// [`generate`]: TopologyDiagnosticGenerator::generate
#[derive(Debug)]
pub struct TopologyDiagnosticGenerator<C> {
    catalog: C,
}

impl<C: NodeCatalog> TopologyDiagnosticGenerator<C> {
    /// Create a generator reading from the given catalog
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Build the three-level diagnostic tree for the current snapshot
    ///
    /// Nodes are classified once each and folded into per-rack tallies;
    /// datacenter and cluster counters are sums of those tallies, computed
    /// bottom-up, so the aggregation invariant holds by construction.
    /// Nodes without a datacenter or rack label are grouped under
    /// [`FALLBACK_DATACENTER`] / [`FALLBACK_RACK`] rather than dropped, so
    /// the root `total` always matches the snapshot's node count.
    ///
    /// An empty catalog yields an all-zero root with no children.
    pub fn generate(&self) -> TopologyDiagnostic {
        let nodes = self.catalog.snapshot();

        let mut tallies: HashMap<String, HashMap<String, NodeTally>> = HashMap::new();
        for node in nodes.into_values() {
            let datacenter = node.datacenter.unwrap_or_else(|| FALLBACK_DATACENTER.to_string());
            let rack = node.rack.unwrap_or_else(|| FALLBACK_RACK.to_string());
            tallies.entry(datacenter).or_default().entry(rack).or_default().record(node.state);
        }

        let mut cluster_tally = NodeTally::default();
        let mut datacenters = ChildMap::with_capacity(tallies.len());

        for (datacenter, racks) in tallies {
            let mut datacenter_tally = NodeTally::default();
            let mut rack_diagnostics = ChildMap::with_capacity(racks.len());

            for (rack, tally) in racks {
                datacenter_tally.merge(&tally);
                rack_diagnostics.insert(rack, tally.into_diagnostic(ChildMap::new()));
            }

            cluster_tally.merge(&datacenter_tally);
            datacenters.insert(datacenter, datacenter_tally.into_diagnostic(rack_diagnostics));
        }

        debug!(
            total = cluster_tally.total,
            reachable = cluster_tally.reachable,
            unreachable = cluster_tally.unreachable,
            indeterminate = cluster_tally.indeterminate,
            datacenters = datacenters.len(),
            "Topology diagnostic generated"
        );

        cluster_tally.into_diagnostic(datacenters)
    }
}
