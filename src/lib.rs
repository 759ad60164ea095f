//! # Gale–Shapley
//!
//! Stable matching between two equal-sized groups by deferred acceptance.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Agent ids, proposal records, receipts and errors
//! - **Preferences**: Validated rankings with O(1) rank lookup
//! - **Engine**: Proposer-optimal deferred acceptance with full traces
//! - **Analysis**: Stability checks, enumeration and welfare metrics
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical input and policy give identical traces
//! 2. **Validation at the boundary**: Malformed rankings never reach the engine
//! 3. **Append-only traces**: Logs and history grow by one entry per attempt
//! 4. **Synchronous Execution**: Parallelism only across independent instances
//!
//! ## Example
//!
//! ```
//! use gale_shapley::{gale_shapley, analysis::is_stable, PreferenceProfile};
//!
//! let proposers = vec![vec![0, 1], vec![1, 0]];
//! let respondents = vec![vec![0, 1], vec![1, 0]];
//!
//! let outcome = gale_shapley(proposers.clone(), respondents.clone()).unwrap();
//! let profile = PreferenceProfile::new(proposers, respondents).unwrap();
//!
//! assert_eq!(outcome.pairing.respondent_partners(), &[0, 1]);
//! assert!(is_stable(&profile, &outcome.pairing).unwrap());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: AgentId, Proposal, MatchReceipt, MatchError
pub mod types;

/// Preference model: tables, profiles and ranking inversion
pub mod preferences;

/// Matching engine: deferred acceptance and its outputs
pub mod engine;

/// Stability checks, enumeration and cost measures
pub mod analysis;

/// Reference instances with known answers
pub mod fixtures;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{AgentId, MatchError, MatchReceipt, Proposal, ProposalOutcome, Result, Side};
pub use preferences::{invert_ranking, PreferenceProfile, PreferenceTable};
pub use engine::{gale_shapley, EngineConfig, MatchOutcome, MatchingEngine, Pairing, SelectionPolicy};
