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

//! Gauge publication for topology diagnostics
//!
//! Reports the cluster-wide and per-datacenter counters through the
//! `metrics` crate so Prometheus/OTLP and other backends can scrape them.
//! The generator itself stays pure; callers publish a diagnostic when they
//! want the numbers exported.

use crate::diagnostic::TopologyDiagnostic;
use metrics::gauge;

/// Publish the counters of a diagnostic tree as gauges
///
/// Emits cluster-wide gauges plus one labeled set per datacenter. Rack
/// counters are not exported individually; they are recoverable from the
/// serialized diagnostic when needed.
pub fn publish_metrics(diagnostic: &TopologyDiagnostic) {
    gauge!("stratadb_topology_nodes_total").set(diagnostic.total() as f64);
    gauge!("stratadb_topology_nodes_reachable").set(diagnostic.reachable() as f64);
    gauge!("stratadb_topology_nodes_unreachable").set(diagnostic.unreachable() as f64);
    gauge!("stratadb_topology_nodes_indeterminate").set(diagnostic.indeterminate() as f64);

    for (datacenter, dc_diagnostic) in diagnostic.children() {
        gauge!("stratadb_topology_datacenter_nodes_total", "datacenter" => datacenter.clone())
            .set(dc_diagnostic.total() as f64);
        gauge!("stratadb_topology_datacenter_nodes_reachable", "datacenter" => datacenter.clone())
            .set(dc_diagnostic.reachable() as f64);
        gauge!("stratadb_topology_datacenter_nodes_unreachable", "datacenter" => datacenter.clone())
            .set(dc_diagnostic.unreachable() as f64);
        gauge!("stratadb_topology_datacenter_nodes_indeterminate", "datacenter" => datacenter.clone())
            .set(dc_diagnostic.indeterminate() as f64);
    }
}
