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

//! # StrataDB Topology Diagnostics
//!
//! Cluster-topology diagnostic engine for the StrataDB client.
//! Turns one catalog snapshot into an immutable three-level availability
//! summary: cluster-wide, per-datacenter, and per-rack node counts.
//!
//! ## Features
//!
//! - **Invariant-Safe Trees**: Every diagnostic satisfies `total ==
//!   reachable + unreachable + indeterminate` and parent counters equal the
//!   sum over children, by construction
//! - **Forward-Compatible Classification**: Unrecognized node states are
//!   counted as indeterminate, never as reachable or unreachable
//! - **Pure Computation**: No caching, no locks, no background work; bounded
//!   by the node count of the snapshot
//!
//! ## Example
//!
//! ```rust
//! use stratadb_catalog::{ClusterCatalog, NodeState};
//! use stratadb_diagnostic::TopologyDiagnosticGenerator;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = ClusterCatalog::new("cluster-1");
//!     catalog.register_node("node1", "10.0.0.1:9042");
//!     catalog.set_node_location("node1", Some("dc1"), Some("rack1"))?;
//!     catalog.update_node_state("node1", NodeState::Up)?;
//!
//!     let diagnostic = TopologyDiagnosticGenerator::new(&catalog).generate();
//!     assert_eq!(diagnostic.total(), 1);
//!     assert_eq!(diagnostic.reachable(), 1);
//!     Ok(())
//! }
//! ```

pub mod diagnostic;
pub mod generator;
pub mod report;

pub use diagnostic::{DiagnosticError, TopologyDiagnostic};
pub use generator::{FALLBACK_DATACENTER, FALLBACK_RACK, TopologyDiagnosticGenerator};
pub use report::publish_metrics;
