//! Match receipt summarizing a completed run.
//!
//! The receipt carries the run's counters plus root hashes over the final
//! pairing and over the proposal log, so two runs can be compared without
//! shipping their logs.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::{MatchError, MatchedPair, ProposalRecord};

/// Execution receipt for one deferred-acceptance run.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash over the SSZ encoding of every
/// `(respondent, proposer)` pair, in respondent order. It depends only on
/// the final pairing, never on the order proposals were made in.
///
/// ## Log Root
///
/// The `log_root` hashes the SSZ encoding of every `ProposalRecord` in step
/// order. Unlike the state root it changes with the selection policy.
///
/// ## Example
///
/// ```
/// use gale_shapley::types::{MatchReceipt, MatchedPair};
///
/// let root = MatchReceipt::compute_root([MatchedPair::new(0, 1), MatchedPair::new(1, 0)]).unwrap();
/// let receipt = MatchReceipt::new(2, 3, 2, 0, 1, root, [0u8; 32]);
///
/// assert_eq!(receipt.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Market size `n`
    pub size: u64,

    /// Total proposals attempted
    pub proposals: u64,

    /// Proposals accepted by an unmatched respondent
    pub acceptances: u64,

    /// Proposals that displaced a held proposer
    pub replacements: u64,

    /// Proposals turned down
    pub rejections: u64,

    /// SHA-256 over the SSZ-encoded final pairing
    pub state_root: [u8; 32],

    /// SHA-256 over the SSZ-encoded proposal log
    pub log_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new match receipt
    ///
    /// # Arguments
    ///
    /// * `size` - Market size
    /// * `proposals` - Count of attempts
    /// * `acceptances` - Attempts accepted by a free respondent
    /// * `replacements` - Attempts that displaced another proposer
    /// * `rejections` - Attempts turned down
    /// * `state_root` - 32-byte hash of the final pairing
    /// * `log_root` - 32-byte hash of the proposal log
    pub fn new(
        size: u64,
        proposals: u64,
        acceptances: u64,
        replacements: u64,
        rejections: u64,
        state_root: [u8; 32],
        log_root: [u8; 32],
    ) -> Self {
        Self {
            size,
            proposals,
            acceptances,
            replacements,
            rejections,
            state_root,
            log_root,
        }
    }

    /// Hash a sequence of matched pairs into a state root.
    ///
    /// An empty sequence hashes to SHA-256 of the empty string.
    pub fn compute_root<I>(pairs: I) -> crate::types::Result<[u8; 32]>
    where
        I: IntoIterator<Item = MatchedPair>,
    {
        Self::hash_encoded(pairs)
    }

    /// Hash a proposal log, in step order, into a log root.
    pub fn compute_log_root<I>(records: I) -> crate::types::Result<[u8; 32]>
    where
        I: IntoIterator<Item = ProposalRecord>,
    {
        Self::hash_encoded(records)
    }

    fn hash_encoded<T, I>(items: I) -> crate::types::Result<[u8; 32]>
    where
        T: SimpleSerialize,
        I: IntoIterator<Item = T>,
    {
        let mut hasher = Sha256::new();
        for item in items {
            let bytes =
                ssz_rs::serialize(&item).map_err(|e| MatchError::Encoding(format!("{e:?}")))?;
            hasher.update(&bytes);
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        Ok(hash)
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Get the log root as a hex string
    pub fn log_root_hex(&self) -> String {
        hex::encode(self.log_root)
    }

    /// Check if this receipt describes an empty market
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fraction of proposals that were turned down.
    ///
    /// Returns None if no proposals were made.
    pub fn rejection_rate(&self) -> Option<Decimal> {
        if self.proposals == 0 {
            None
        } else {
            Decimal::from(self.rejections).checked_div(Decimal::from(self.proposals))
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
