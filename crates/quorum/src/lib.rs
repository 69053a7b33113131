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

//! # StrataDB Quorum Reasoning
//!
//! Consistency-achievability checks over topology diagnostics.
//! Answers whether quorum-style consistency requirements can plausibly be
//! met given the reachable-node counts of a diagnostic tree.
//!
//! ## Quorum Rules
//!
//! - **Quorum**: RF/2 + 1 reachable nodes, cluster-wide
//! - **Local Quorum**: RF/2 + 1 reachable nodes in one datacenter
//! - **Each Quorum**: RF/2 + 1 reachable nodes in every datacenter
//!
//! ## Example
//!
//! ```rust
//! use stratadb_diagnostic::TopologyDiagnostic;
//! use stratadb_quorum::AvailabilityVerifier;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let diagnostic = TopologyDiagnostic::leaf(4, 3, 1, 0)?;
//!     let verifier = AvailabilityVerifier::new(4)?;
//!
//!     // 3 reachable nodes satisfy a quorum of 3 out of RF 4
//!     assert!(verifier.check_quorum(&diagnostic));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod verifier;

pub use error::QuorumError;
pub use verifier::AvailabilityVerifier;
