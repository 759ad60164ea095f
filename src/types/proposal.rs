//! Proposal records and matched pairs.
//!
//! ## SSZ Serialization
//!
//! `MatchedPair` and `ProposalRecord` derive `SimpleSerialize` so that
//! receipt roots are computed over a deterministic byte encoding. Under SSZ
//! a container of two u64 fields encodes as 16 little-endian bytes.

use ssz_rs::prelude::*;

use crate::types::{AgentId, Side};

// ============================================================================
// ProposalOutcome enum
// ============================================================================

/// What a respondent did with a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalOutcome {
    /// The respondent was unmatched and tentatively accepted
    Accepted,
    /// The receiver dropped `displaced` for the new proposer
    Replaced {
        /// Agent that became free again, on the same side as the proposer
        displaced: AgentId,
    },
    /// The respondent kept its current proposer
    Rejected,
}

impl ProposalOutcome {
    /// Convert to u8 for serialization (discriminant only)
    pub fn to_u8(self) -> u8 {
        match self {
            ProposalOutcome::Accepted => 0,
            ProposalOutcome::Replaced { .. } => 1,
            ProposalOutcome::Rejected => 2,
        }
    }

    /// Convert from the u8 discriminant; `displaced` is only read for
    /// `Replaced`
    pub fn from_u8(value: u8, displaced: AgentId) -> Option<Self> {
        match value {
            0 => Some(ProposalOutcome::Accepted),
            1 => Some(ProposalOutcome::Replaced { displaced }),
            2 => Some(ProposalOutcome::Rejected),
            _ => None,
        }
    }

    /// Whether the proposer ended this step held by the respondent
    pub fn is_held(self) -> bool {
        !matches!(self, ProposalOutcome::Rejected)
    }
}

// ============================================================================
// Proposal struct
// ============================================================================

/// One attempt, in the order it was made.
///
/// `proposer` and `respondent` always name agents by their side in the
/// caller's profile. In a respondent-optimal run the respondent is the one
/// making the attempt; see [`ProposalLog::initiator`](crate::engine::ProposalLog::initiator).
///
/// ## Example
///
/// ```
/// use gale_shapley::types::{Proposal, ProposalOutcome};
///
/// let p = Proposal::new(0, 3, 1, ProposalOutcome::Accepted);
/// assert_eq!(p.pair(), (3, 1));
/// assert!(p.outcome.is_held());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Proposal {
    /// Zero-based position of this attempt in the run
    pub step: usize,

    /// Proposer making the attempt
    pub proposer: AgentId,

    /// Respondent receiving it
    pub respondent: AgentId,

    /// Respondent's response
    pub outcome: ProposalOutcome,
}

impl Proposal {
    /// Create a new proposal record
    pub fn new(
        step: usize,
        proposer: AgentId,
        respondent: AgentId,
        outcome: ProposalOutcome,
    ) -> Self {
        Self {
            step,
            proposer,
            respondent,
            outcome,
        }
    }

    /// The attempted `(proposer, respondent)` pair
    #[inline]
    pub fn pair(&self) -> (AgentId, AgentId) {
        (self.proposer, self.respondent)
    }

    /// Whether the respondent turned this proposal down
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.outcome == ProposalOutcome::Rejected
    }

    /// The same attempt with the two sides' ids exchanged.
    pub fn transposed(&self) -> Self {
        Self {
            step: self.step,
            proposer: self.respondent,
            respondent: self.proposer,
            outcome: self.outcome,
        }
    }
}

// ============================================================================
// ProposalRecord struct
// ============================================================================

/// A logged attempt in its encoded form.
///
/// ## SSZ Layout
///
/// Fixed-size container, 34 bytes: four u64 fields and two u8 fields.
/// `displaced` is zero unless `outcome_raw` is `Replaced`.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct ProposalRecord {
    /// Position of the attempt in the run
    pub step: u64,

    /// Proposer id
    pub proposer: u64,

    /// Respondent id
    pub respondent: u64,

    /// Agent dropped by the receiver, if any
    pub displaced: u64,

    /// Side that made the attempt (see `Side::to_u8`)
    pub initiator_raw: u8,

    /// Outcome discriminant (see `ProposalOutcome::to_u8`)
    pub outcome_raw: u8,
}

impl ProposalRecord {
    /// Encode a proposal made by `initiator`
    pub fn new(proposal: &Proposal, initiator: Side) -> Self {
        let displaced = match proposal.outcome {
            ProposalOutcome::Replaced { displaced } => displaced as u64,
            _ => 0,
        };
        Self {
            step: proposal.step as u64,
            proposer: proposal.proposer as u64,
            respondent: proposal.respondent as u64,
            displaced,
            initiator_raw: initiator.to_u8(),
            outcome_raw: proposal.outcome.to_u8(),
        }
    }

    /// Side that made the attempt
    pub fn initiator(&self) -> Side {
        Side::from_u8(self.initiator_raw).unwrap_or(Side::Proposer)
    }

    /// Decode back into a proposal, if the outcome byte is valid
    pub fn to_proposal(&self) -> Option<Proposal> {
        let outcome = ProposalOutcome::from_u8(self.outcome_raw, self.displaced as AgentId)?;
        Some(Proposal::new(
            self.step as usize,
            self.proposer as AgentId,
            self.respondent as AgentId,
            outcome,
        ))
    }
}

// ============================================================================
// MatchedPair struct
// ============================================================================

/// A final `(respondent, proposer)` pair in its encoded form.
///
/// ## SSZ Layout
///
/// Fixed-size container, 16 bytes (8 + 8).
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchedPair {
    /// Respondent id
    pub respondent: u64,

    /// Proposer held by the respondent
    pub proposer: u64,
}

impl MatchedPair {
    /// Create a pair from agent ids
    pub fn new(respondent: AgentId, proposer: AgentId) -> Self {
        Self {
            respondent: respondent as u64,
            proposer: proposer as u64,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
