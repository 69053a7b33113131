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

//! Core data types for the node catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Node state enumeration
///
/// The set of states is open: the control connection may report states this
/// version of the client does not recognize, so consumers must always carry
/// a wildcard arm when matching. Only [`NodeState::Up`] counts as reachable
/// and only [`NodeState::Down`] counts as unreachable; every other value is
/// indeterminate from a diagnostic point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NodeState {
    /// Node is up and accepting connections
    Up,

    /// Node is down or not reachable via the network
    Down,

    /// Node was forced down by an administrator and must not be
    /// reconnected until explicitly brought back
    ForcedDown,

    /// Node state has not been determined yet (initial state before the
    /// first topology event is processed)
    #[default]
    Unknown,
}

impl NodeState {
    /// Returns true if the node is known to be reachable
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, NodeState::Up)
    }

    /// Returns true if the node is known to be unreachable
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, NodeState::Down)
    }
}

/// One observation of a node, as maintained by the catalog
///
/// The datacenter and rack labels come from the node's own advertisement
/// and may be absent for nodes that have not yet been fully discovered.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique node identifier
    pub node_id: String,

    /// Node network endpoint (e.g., "node1.example.com:9042")
    pub endpoint: String,

    /// Datacenter the node advertises itself in
    pub datacenter: Option<String>,

    /// Rack within the datacenter
    pub rack: Option<String>,

    /// Last observed state
    pub state: NodeState,

    /// When the state last changed
    pub state_changed_at: DateTime<Utc>,
}

impl Node {
    /// Create a new node observation with no placement and unknown state
    pub fn new(node_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            endpoint: endpoint.into(),
            datacenter: None,
            rack: None,
            state: NodeState::Unknown,
            state_changed_at: Utc::now(),
        }
    }

    /// Set the datacenter and rack placement
    pub fn with_location(mut self, datacenter: Option<&str>, rack: Option<&str>) -> Self {
        self.datacenter = datacenter.map(str::to_string);
        self.rack = rack.map(str::to_string);
        self
    }

    /// Set the initial state
    pub fn with_state(mut self, state: NodeState) -> Self {
        self.state = state;
        self
    }

    /// Update the observed state, recording the transition time
    pub fn set_state(&mut self, state: NodeState) {
        if self.state != state {
            self.state = state;
            self.state_changed_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_state_predicates() {
        assert!(NodeState::Up.is_reachable());
        assert!(!NodeState::Up.is_unreachable());
        assert!(NodeState::Down.is_unreachable());
        assert!(!NodeState::Down.is_reachable());
        assert!(!NodeState::Unknown.is_reachable());
        assert!(!NodeState::Unknown.is_unreachable());
        assert!(!NodeState::ForcedDown.is_reachable());
        assert!(!NodeState::ForcedDown.is_unreachable());
    }

    #[test]
    fn test_node_state_serde_round_trip() {
        let json = serde_json::to_string(&NodeState::ForcedDown).unwrap();
        assert_eq!(json, "\"forced_down\"");

        let state: NodeState = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(state, NodeState::Up);
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new("node1", "10.0.0.1:9042")
            .with_location(Some("dc1"), Some("rack1"))
            .with_state(NodeState::Up);

        assert_eq!(node.datacenter.as_deref(), Some("dc1"));
        assert_eq!(node.rack.as_deref(), Some("rack1"));
        assert_eq!(node.state, NodeState::Up);
    }

    #[test]
    fn test_set_state_records_transition_time() {
        let mut node = Node::new("node1", "10.0.0.1:9042");
        let initial = node.state_changed_at;

        node.set_state(NodeState::Unknown);
        assert_eq!(node.state_changed_at, initial);

        node.set_state(NodeState::Up);
        assert!(node.state_changed_at >= initial);
        assert_eq!(node.state, NodeState::Up);
    }
}
