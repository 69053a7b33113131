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

//! # StrataDB Node Catalog
//!
//! Node catalog and observation model for the StrataDB client.
//! Tracks every node the client knows about, with its datacenter and rack
//! placement and its last observed state.
//!
//! ## Features
//!
//! - **Open State Model**: Extensible node states (Up/Down/ForcedDown/Unknown)
//! - **Capability Interface**: `NodeCatalog` snapshot trait, substitutable in tests
//! - **Coherent Snapshots**: Each snapshot hands back owned observations, so a
//!   node's labels and state are always read together
//!
//! ## Example
//!
//! ```rust
//! use stratadb_catalog::{ClusterCatalog, NodeCatalog, NodeState};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = ClusterCatalog::new("cluster-1");
//!     catalog.register_node("node1", "10.0.0.1:9042");
//!     catalog.set_node_location("node1", Some("dc1"), Some("rack1"))?;
//!     catalog.update_node_state("node1", NodeState::Up)?;
//!
//!     let snapshot = catalog.snapshot();
//!     assert_eq!(snapshot.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod types;

pub use catalog::{ClusterCatalog, NodeCatalog};
pub use types::{Node, NodeState};
