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

//! Integration tests for the topology diagnostic engine
//!
//! These tests exercise the full path from catalog snapshot to diagnostic
//! tree and assert the counting invariants that downstream availability
//! reasoning depends on.

use std::collections::HashMap;
use stratadb_catalog::{ClusterCatalog, NodeState};
use stratadb_diagnostic::{TopologyDiagnostic, TopologyDiagnosticGenerator};

fn populate(catalog: &ClusterCatalog, nodes: &[(&str, &str, &str, NodeState)]) {
    for &(node_id, datacenter, rack, state) in nodes {
        catalog.register_node(node_id, "localhost:9042");
        catalog.set_node_location(node_id, Some(datacenter), Some(rack)).unwrap();
        catalog.update_node_state(node_id, state).unwrap();
    }
}

/// Walk the tree and assert both counting invariants at every level
fn assert_invariants(diagnostic: &TopologyDiagnostic) {
    assert_eq!(
        diagnostic.total(),
        diagnostic.reachable() + diagnostic.unreachable() + diagnostic.indeterminate(),
        "counter invariant violated"
    );

    if !diagnostic.is_leaf() {
        let children = diagnostic.children().values();
        assert_eq!(diagnostic.total(), children.clone().map(|c| c.total()).sum::<usize>());
        assert_eq!(diagnostic.reachable(), children.clone().map(|c| c.reachable()).sum::<usize>());
        assert_eq!(diagnostic.unreachable(), children.clone().map(|c| c.unreachable()).sum::<usize>());
        assert_eq!(
            diagnostic.indeterminate(),
            children.clone().map(|c| c.indeterminate()).sum::<usize>()
        );

        for child in diagnostic.children().values() {
            assert_invariants(child);
        }
    }
}

const TWO_DC_CLUSTER: &[(&str, &str, &str, NodeState)] = &[
    ("node1", "dc1", "rack1a", NodeState::Up),
    ("node2", "dc1", "rack1a", NodeState::Up),
    ("node3", "dc1", "rack1b", NodeState::Down),
    ("node4", "dc1", "rack1b", NodeState::Unknown),
    ("node5", "dc2", "rack2a", NodeState::Down),
    ("node6", "dc2", "rack2a", NodeState::Down),
    ("node7", "dc2", "rack2b", NodeState::Up),
    ("node8", "dc2", "rack2b", NodeState::Unknown),
];

#[test]
fn test_two_datacenter_cluster_diagnostic() {
    let catalog = ClusterCatalog::new("it-cluster");
    populate(&catalog, TWO_DC_CLUSTER);

    let diagnostic = TopologyDiagnosticGenerator::new(&catalog).generate();

    let mut dc1_racks = HashMap::new();
    dc1_racks.insert("rack1a".to_string(), TopologyDiagnostic::leaf(2, 2, 0, 0).unwrap());
    dc1_racks.insert("rack1b".to_string(), TopologyDiagnostic::leaf(2, 0, 1, 1).unwrap());

    let mut dc2_racks = HashMap::new();
    dc2_racks.insert("rack2a".to_string(), TopologyDiagnostic::leaf(2, 0, 2, 0).unwrap());
    dc2_racks.insert("rack2b".to_string(), TopologyDiagnostic::leaf(2, 1, 0, 1).unwrap());

    let mut datacenters = HashMap::new();
    datacenters.insert("dc1".to_string(), TopologyDiagnostic::new(4, 2, 1, 1, dc1_racks).unwrap());
    datacenters.insert("dc2".to_string(), TopologyDiagnostic::new(4, 1, 2, 1, dc2_racks).unwrap());

    let expected = TopologyDiagnostic::new(8, 3, 3, 2, datacenters).unwrap();
    assert_eq!(diagnostic, expected);
    assert_invariants(&diagnostic);
}

#[test]
fn test_generation_is_deterministic_across_insertion_order() {
    let forward = ClusterCatalog::new("it-cluster-a");
    populate(&forward, TWO_DC_CLUSTER);

    let mut shuffled = TWO_DC_CLUSTER.to_vec();
    shuffled.reverse();
    shuffled.swap(1, 5);
    let backward = ClusterCatalog::new("it-cluster-b");
    populate(&backward, &shuffled);

    let left = TopologyDiagnosticGenerator::new(&forward).generate();
    let right = TopologyDiagnosticGenerator::new(&backward).generate();

    assert_eq!(left, right);
}

#[test]
fn test_invariants_hold_for_sparse_and_unlabeled_topologies() {
    let catalog = ClusterCatalog::new("it-cluster");
    populate(
        &catalog,
        &[
            ("node1", "dc1", "rack1", NodeState::Up),
            ("node2", "dc1", "rack2", NodeState::ForcedDown),
            ("node3", "dc2", "rack1", NodeState::Down),
        ],
    );
    // Two nodes that never advertised a placement
    catalog.register_node("node4", "localhost:9042");
    catalog.register_node("node5", "localhost:9042");
    catalog.update_node_state("node5", NodeState::Up).unwrap();

    let diagnostic = TopologyDiagnosticGenerator::new(&catalog).generate();

    // Nothing was dropped: the root accounts for all five catalog entries
    assert_eq!(diagnostic.total(), 5);
    assert_eq!(diagnostic.reachable(), 2);
    assert_eq!(diagnostic.unreachable(), 1);
    assert_eq!(diagnostic.indeterminate(), 2);
    assert_invariants(&diagnostic);
}

#[test]
fn test_diagnostic_serializes_for_export() {
    let catalog = ClusterCatalog::new("it-cluster");
    populate(&catalog, &[("node1", "dc1", "rack1", NodeState::Up)]);

    let diagnostic = TopologyDiagnosticGenerator::new(&catalog).generate();
    let json = serde_json::to_value(&diagnostic).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["children"]["dc1"]["children"]["rack1"]["reachable"], 1);
}
