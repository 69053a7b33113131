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

//! Quorum-related error types

use thiserror::Error;

/// Errors related to consistency-achievability checks
#[derive(Debug, Error)]
pub enum QuorumError {
    /// Not enough reachable nodes in the cluster for quorum
    #[error("Insufficient quorum: required {required}, reachable {reachable}")]
    InsufficientQuorum { required: usize, reachable: usize },

    /// Not enough reachable nodes in one datacenter for local quorum
    #[error("Insufficient quorum in datacenter {datacenter}: required {required}, reachable {reachable}")]
    InsufficientLocalQuorum {
        datacenter: String,
        required: usize,
        reachable: usize,
    },

    /// The requested datacenter does not appear in the diagnostic
    #[error("Datacenter {datacenter} not present in diagnostic")]
    UnknownDatacenter { datacenter: String },

    /// Replication factor is invalid
    #[error("Invalid replication factor: {reason}")]
    InvalidReplicationFactor { reason: String },
}
