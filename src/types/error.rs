//! Error taxonomy for preference validation and matching runs.
//!
//! Every variant is a structural problem with the caller's input (or a
//! configured limit); none of them are transient, so nothing is retried.

use thiserror::Error;

use crate::types::{AgentId, Side};

/// Errors surfaced by the preference model, the engine and the analysis
/// helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The two preference matrices describe different market sizes.
    #[error("size mismatch: {proposers} proposers but {respondents} respondents")]
    SizeMismatch { proposers: usize, respondents: usize },

    /// An id outside `[0, n)` was used for a lookup.
    #[error("invalid {side} id {agent}: market size is {size}")]
    InvalidAgent {
        side: Side,
        agent: AgentId,
        size: usize,
    },

    /// A ranking row is not a permutation of the opposite side's ids.
    #[error("malformed ranking for {side} {agent}: {reason}")]
    MalformedPreferences {
        side: Side,
        agent: AgentId,
        reason: String,
    },

    /// A pairing handed to the analysis helpers is not a perfect matching.
    #[error("invalid pairing: {reason}")]
    InvalidPairing { reason: String },

    /// The configured proposal cap was reached before the run converged.
    #[error("proposal limit of {limit} reached before every proposer was matched")]
    ProposalLimitExceeded { limit: usize },

    /// Exhaustive enumeration was requested on an instance that is too big.
    #[error("instance of size {size} exceeds enumeration limit {max}")]
    InstanceTooLarge { size: usize, max: usize },

    /// The run ended with unmatched agents. Unreachable for validated input.
    #[error("matching ended with {unmatched} unmatched agents")]
    IncompleteMatching { unmatched: usize },

    /// SSZ encoding of a receipt component failed.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatchError>;
