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

//! Availability verification logic

use crate::error::QuorumError;
use stratadb_diagnostic::TopologyDiagnostic;

/// Availability verifier for quorum-style consistency requirements
///
/// Works purely from the reachable-node counts of a [`TopologyDiagnostic`];
/// a passing check means the requirement is plausibly achievable, not that a
/// specific replica set is alive.
#[derive(Debug, Clone)]
pub struct AvailabilityVerifier {
    replication_factor: usize,
    quorum: usize,
}

impl AvailabilityVerifier {
    /// Create a verifier for the given replication factor
    pub fn new(replication_factor: usize) -> Result<Self, QuorumError> {
        if replication_factor == 0 {
            return Err(QuorumError::InvalidReplicationFactor {
                reason: "replication factor must be at least 1".to_string(),
            });
        }

        Ok(Self {
            replication_factor,
            quorum: replication_factor / 2 + 1,
        })
    }

    /// Check if cluster-wide quorum is plausibly achievable
    pub fn check_quorum(&self, diagnostic: &TopologyDiagnostic) -> bool {
        diagnostic.reachable() >= self.quorum
    }

    /// Check if local quorum is plausibly achievable in one datacenter
    ///
    /// # Errors
    ///
    /// Returns [`QuorumError::UnknownDatacenter`] if the diagnostic has no
    /// entry for `datacenter`.
    pub fn check_local_quorum(&self, diagnostic: &TopologyDiagnostic, datacenter: &str) -> Result<bool, QuorumError> {
        let local = diagnostic
            .children()
            .get(datacenter)
            .ok_or_else(|| QuorumError::UnknownDatacenter {
                datacenter: datacenter.to_string(),
            })?;

        Ok(local.reachable() >= self.quorum)
    }

    /// Check if quorum is plausibly achievable in every datacenter
    ///
    /// A diagnostic with no datacenters cannot satisfy each-quorum.
    pub fn check_each_quorum(&self, diagnostic: &TopologyDiagnostic) -> bool {
        !diagnostic.children().is_empty()
            && diagnostic.children().values().all(|dc| dc.reachable() >= self.quorum)
    }

    /// Verify cluster-wide quorum or return error
    pub fn verify_quorum(&self, diagnostic: &TopologyDiagnostic) -> Result<(), QuorumError> {
        if diagnostic.reachable() >= self.quorum {
            Ok(())
        } else {
            Err(QuorumError::InsufficientQuorum {
                required: self.quorum,
                reachable: diagnostic.reachable(),
            })
        }
    }

    /// Verify local quorum in one datacenter or return error
    pub fn verify_local_quorum(&self, diagnostic: &TopologyDiagnostic, datacenter: &str) -> Result<(), QuorumError> {
        if self.check_local_quorum(diagnostic, datacenter)? {
            Ok(())
        } else {
            let reachable = diagnostic.children()[datacenter].reachable();
            Err(QuorumError::InsufficientLocalQuorum {
                datacenter: datacenter.to_string(),
                required: self.quorum,
                reachable,
            })
        }
    }

    /// Get the replication factor this verifier was built for
    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    /// Get the number of reachable nodes required for quorum
    pub fn quorum_size(&self) -> usize {
        self.quorum
    }
}
