//! Matching engine module.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same profile and policy always produce the same log
//! 2. **O(1) comparisons**: Respondents compare proposers through
//!    precomputed rank-inverse tables
//! 3. **Append-only traces**: The proposal log and relationship history only
//!    ever grow, one entry per attempt
//! 4. **Synchronous Execution**: A run is a plain loop with no suspension
//!    points; batches parallelise across instances, never within one
//!
//! ## Matching Rules
//!
//! - Proposers propose in their own preference order and never retry a
//!   respondent
//! - An unmatched respondent holds the first proposal it gets
//! - A held respondent switches only to a strictly preferred proposer
//! - The run ends when no proposer is free
//!
//! ## Example
//!
//! ```
//! use gale_shapley::engine::MatchingEngine;
//! use gale_shapley::preferences::PreferenceProfile;
//!
//! let profile = PreferenceProfile::new(
//!     vec![vec![0, 1], vec![0, 1]],
//!     vec![vec![1, 0], vec![1, 0]],
//! ).unwrap();
//!
//! let outcome = MatchingEngine::new().run(&profile).unwrap();
//!
//! assert_eq!(outcome.pairing.proposer_for(0), Some(1));
//! assert_eq!(outcome.proposals.replacements(), 1);
//! assert_eq!(outcome.history.len(), outcome.proposals.len() + 1);
//! ```

pub mod matcher;
pub mod outcome;
pub mod batch;
pub(crate) mod state;

pub use matcher::{gale_shapley, EngineConfig, MatchingEngine, SelectionPolicy};
pub use outcome::{
    MatchOutcome, Pairing, ProposalLog, RelationshipDelta, RelationshipHistory, RelationshipSet,
    Snapshots,
};
