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

//! Node catalog - the live view of cluster membership
//!
//! The catalog is owned and mutated by the control-connection event loop;
//! everything else reads it through [`NodeCatalog::snapshot`].

use crate::types::{Node, NodeState};
use anyhow::{Result, anyhow};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Capability interface over the node catalog
///
/// Consumers receive owned [`Node`] values, so a node's placement labels and
/// state are always read together: a snapshot is internally consistent even
/// while the catalog keeps processing topology events. Two snapshots taken
/// at different times may legitimately differ.
pub trait NodeCatalog {
    /// Return all known nodes, keyed by node identifier
    fn snapshot(&self) -> HashMap<String, Node>;
}

impl<C: NodeCatalog + ?Sized> NodeCatalog for &C {
    fn snapshot(&self) -> HashMap<String, Node> {
        (**self).snapshot()
    }
}

impl<C: NodeCatalog + ?Sized> NodeCatalog for Arc<C> {
    fn snapshot(&self) -> HashMap<String, Node> {
        (**self).snapshot()
    }
}

/// In-memory catalog maintained from control-connection topology events
///
/// Maintains the set of nodes the client currently knows about, with their
/// datacenter/rack placement and last observed state.
#[derive(Debug)]
pub struct ClusterCatalog {
    /// Cluster identifier
    cluster_id: String,

    /// Map of node_id -> observation
    nodes: RwLock<HashMap<String, Node>>,
}

impl ClusterCatalog {
    /// Create an empty catalog for the given cluster
    pub fn new(cluster_id: &str) -> Self {
        info!(cluster_id = %cluster_id, "Initializing node catalog");

        Self {
            cluster_id: cluster_id.to_string(),
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Register a newly discovered node
    ///
    /// The node starts with no placement and [`NodeState::Unknown`] until
    /// topology events fill in the details.
    ///
    /// # Returns
    ///
    /// Returns true if this is a new node, false if it was already known
    pub fn register_node(&self, node_id: &str, endpoint: &str) -> bool {
        let mut nodes = self.nodes.write();
        if nodes.contains_key(node_id) {
            debug!(node_id = %node_id, "Node already registered");
            return false;
        }

        info!(node_id = %node_id, endpoint = %endpoint, "Registering new node");
        nodes.insert(node_id.to_string(), Node::new(node_id, endpoint));
        true
    }

    /// Record the datacenter/rack placement advertised by a node
    pub fn set_node_location(&self, node_id: &str, datacenter: Option<&str>, rack: Option<&str>) -> Result<()> {
        let mut nodes = self.nodes.write();
        let node = Self::require_node(&mut nodes, node_id)?;
        node.datacenter = datacenter.map(str::to_string);
        node.rack = rack.map(str::to_string);

        debug!(
            node_id = %node_id,
            datacenter = ?datacenter,
            rack = ?rack,
            "Node placement updated"
        );
        Ok(())
    }

    /// Record a state change for a node
    pub fn update_node_state(&self, node_id: &str, state: NodeState) -> Result<()> {
        let mut nodes = self.nodes.write();
        let node = Self::require_node(&mut nodes, node_id)?;
        let old_state = node.state;
        node.set_state(state);
        let changed = old_state != node.state;
        drop(nodes);

        if changed {
            info!(
                node_id = %node_id,
                old = ?old_state,
                new = ?state,
                "Node state changed"
            );
        }

        Ok(())
    }

    /// Remove a node from the catalog (e.g., decommissioned)
    pub fn remove_node(&self, node_id: &str) -> Option<Node> {
        info!(node_id = %node_id, "Removing node from catalog");
        self.nodes.write().remove(node_id)
    }

    /// Get the current observation for a specific node
    pub fn get_node(&self, node_id: &str) -> Option<Node> {
        self.nodes.read().get(node_id).cloned()
    }

    /// Number of nodes currently known
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    /// True if no nodes are known yet
    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    /// Get cluster ID
    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    fn require_node<'a>(nodes: &'a mut HashMap<String, Node>, node_id: &str) -> Result<&'a mut Node> {
        nodes
            .get_mut(node_id)
            .ok_or_else(|| anyhow!("Node {} not found in catalog", node_id))
    }
}

impl NodeCatalog for ClusterCatalog {
    fn snapshot(&self) -> HashMap<String, Node> {
        self.nodes.read().clone()
    }
}
