//! Core data types for the matching engine
//!
//! ## Types
//!
//! - [`AgentId`] / [`Side`]: agent identifiers, namespaced per side
//! - [`Proposal`] / [`ProposalOutcome`]: one logged attempt
//! - [`MatchedPair`]: SSZ-encoded final pair
//! - [`ProposalRecord`]: SSZ-encoded log entry
//! - [`MatchReceipt`]: run summary with a root hash over the pairing
//! - [`MatchError`]: error taxonomy shared by every module

mod agent;
mod error;
mod proposal;
mod receipt;

// Re-export all types at module level
pub use agent::{AgentId, Side};
pub use error::{MatchError, Result};
pub use proposal::{MatchedPair, Proposal, ProposalOutcome, ProposalRecord};
pub use receipt::MatchReceipt;
