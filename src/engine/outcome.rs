//! Results of a completed run: pairing, proposal log and relationship history.
//!
//! ## Storage
//!
//! The proposal log and the history are append-only vectors filled in step
//! order. The history stores one delta per attempt instead of a full copy of
//! the relationship set, and materialises snapshots by replaying deltas.
//!
//! ```text
//! snapshot 0 (empty) --delta 0--> snapshot 1 --delta 1--> ... snapshot k
//! ```

use std::collections::BTreeSet;

use crate::analysis::MatchingCost;
use crate::preferences::PreferenceProfile;
use crate::types::{
    AgentId, MatchError, MatchReceipt, MatchedPair, Proposal, ProposalOutcome, ProposalRecord,
    Result, Side,
};

// ============================================================================
// Pairing
// ============================================================================

/// A perfect matching, stored respondent -> proposer.
///
/// ## Example
///
/// ```
/// use gale_shapley::engine::Pairing;
///
/// let pairing = Pairing::from_respondent_partners(vec![2, 0, 1]).unwrap();
/// assert_eq!(pairing.proposer_for(0), Some(2));
/// assert_eq!(pairing.respondent_for(2), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pairing {
    /// Respondent -> proposer
    respondent_partners: Vec<AgentId>,

    /// Proposer -> respondent
    proposer_partners: Vec<AgentId>,
}

impl Pairing {
    /// Build a pairing from a respondent -> proposer vector.
    ///
    /// # Errors
    ///
    /// `InvalidPairing` if the vector is not a permutation of `[0, n)`.
    pub fn from_respondent_partners(respondent_partners: Vec<AgentId>) -> Result<Self> {
        let size = respondent_partners.len();
        let mut proposer_partners = vec![usize::MAX; size];

        for (respondent, &proposer) in respondent_partners.iter().enumerate() {
            if proposer >= size {
                return Err(MatchError::InvalidPairing {
                    reason: format!("proposer {} out of range for size {}", proposer, size),
                });
            }
            if proposer_partners[proposer] != usize::MAX {
                return Err(MatchError::InvalidPairing {
                    reason: format!("proposer {} is matched twice", proposer),
                });
            }
            proposer_partners[proposer] = respondent;
        }

        Ok(Self {
            respondent_partners,
            proposer_partners,
        })
    }

    /// Number of matched pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.respondent_partners.len()
    }

    /// Check if the pairing is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.respondent_partners.is_empty()
    }

    /// Proposer held by `respondent`
    #[inline]
    pub fn proposer_for(&self, respondent: AgentId) -> Option<AgentId> {
        self.respondent_partners.get(respondent).copied()
    }

    /// Respondent holding `proposer`
    #[inline]
    pub fn respondent_for(&self, proposer: AgentId) -> Option<AgentId> {
        self.proposer_partners.get(proposer).copied()
    }

    /// Respondent -> proposer slice
    #[inline]
    pub fn respondent_partners(&self) -> &[AgentId] {
        &self.respondent_partners
    }

    /// Proposer -> respondent slice
    #[inline]
    pub fn proposer_partners(&self) -> &[AgentId] {
        &self.proposer_partners
    }

    /// `(proposer, respondent)` pairs in respondent order.
    pub fn pairs(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.respondent_partners
            .iter()
            .enumerate()
            .map(|(respondent, &proposer)| (proposer, respondent))
    }

    /// The pairing as a relationship set.
    pub fn to_relationship_set(&self) -> RelationshipSet {
        RelationshipSet {
            pairs: self.pairs().collect(),
        }
    }

    /// The same matching indexed from the other side.
    ///
    /// Turns a pairing computed on a swapped profile back into the caller's
    /// respondent -> proposer orientation.
    pub fn transposed(&self) -> Self {
        Self {
            respondent_partners: self.proposer_partners.clone(),
            proposer_partners: self.respondent_partners.clone(),
        }
    }
}

// ============================================================================
// ProposalLog
// ============================================================================

/// Every attempted proposal, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProposalLog {
    entries: Vec<Proposal>,

    /// Side that made the attempts
    initiator: Side,
}

impl ProposalLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            initiator: Side::Proposer,
        }
    }

    /// Side that made the attempts: `Proposer` for [`run`], `Respondent`
    /// for [`run_respondent_optimal`].
    ///
    /// [`run`]: crate::engine::MatchingEngine::run
    /// [`run_respondent_optimal`]: crate::engine::MatchingEngine::run_respondent_optimal
    #[inline]
    pub fn initiator(&self) -> Side {
        self.initiator
    }

    /// Relabel a log recorded on a swapped profile.
    pub(crate) fn transposed(self) -> Self {
        Self {
            entries: self.entries.iter().map(Proposal::transposed).collect(),
            initiator: self.initiator.opposite(),
        }
    }

    pub(crate) fn push(&mut self, proposal: Proposal) {
        debug_assert_eq!(proposal.step, self.entries.len());
        self.entries.push(proposal);
    }

    /// Number of attempts
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no proposal was made
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attempt at `step`
    #[inline]
    pub fn get(&self, step: usize) -> Option<&Proposal> {
        self.entries.get(step)
    }

    /// All attempts as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Proposal] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Proposal> {
        self.entries.iter()
    }

    /// Attempted `(proposer, respondent)` pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.entries.iter().map(Proposal::pair)
    }

    /// Entries naming `proposer`. When proposers made the attempts these
    /// come in the proposer's preference order.
    pub fn by_proposer(&self, proposer: AgentId) -> impl Iterator<Item = &Proposal> + '_ {
        self.entries.iter().filter(move |p| p.proposer == proposer)
    }

    /// Attempts accepted by an unmatched respondent
    pub fn acceptances(&self) -> usize {
        self.count(|o| o == ProposalOutcome::Accepted)
    }

    /// Attempts that displaced a held proposer
    pub fn replacements(&self) -> usize {
        self.count(|o| matches!(o, ProposalOutcome::Replaced { .. }))
    }

    /// Entries naming `respondent`
    pub fn by_respondent(&self, respondent: AgentId) -> impl Iterator<Item = &Proposal> + '_ {
        self.entries.iter().filter(move |p| p.respondent == respondent)
    }

    /// Attempts turned down
    pub fn rejections(&self) -> usize {
        self.count(|o| o == ProposalOutcome::Rejected)
    }

    fn count(&self, pred: impl Fn(ProposalOutcome) -> bool) -> usize {
        self.entries.iter().filter(|p| pred(p.outcome)).count()
    }
}

impl<'a> IntoIterator for &'a ProposalLog {
    type Item = &'a Proposal;
    type IntoIter = std::slice::Iter<'a, Proposal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// RelationshipSet
// ============================================================================

/// Currently held `(proposer, respondent)` pairs at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelationshipSet {
    pairs: BTreeSet<(AgentId, AgentId)>,
}

impl RelationshipSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn contains(&self, proposer: AgentId, respondent: AgentId) -> bool {
        self.pairs.contains(&(proposer, respondent))
    }

    /// Pairs in `(proposer, respondent)` order
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.pairs.iter().copied()
    }

    /// No proposer and no respondent appears twice.
    pub fn is_partial_matching(&self) -> bool {
        let mut proposers = BTreeSet::new();
        let mut respondents = BTreeSet::new();
        self.pairs
            .iter()
            .all(|&(m, w)| proposers.insert(m) && respondents.insert(w))
    }

    fn apply(&mut self, delta: &RelationshipDelta) {
        if let Some(pair) = delta.removed {
            self.pairs.remove(&pair);
        }
        if let Some(pair) = delta.added {
            self.pairs.insert(pair);
        }
    }
}

// ============================================================================
// RelationshipHistory
// ============================================================================

/// Change to the relationship set caused by one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelationshipDelta {
    /// Pair that became held
    pub added: Option<(AgentId, AgentId)>,
    /// Pair that was broken
    pub removed: Option<(AgentId, AgentId)>,
}

impl RelationshipDelta {
    /// Delta produced by a proposal made by `initiator`.
    ///
    /// A displaced agent is on the initiator's side, so the broken pair
    /// is `(displaced, w)` when proposers propose and `(m, displaced)` when
    /// respondents do.
    pub fn from_proposal(proposal: &Proposal, initiator: Side) -> Self {
        let (m, w) = proposal.pair();
        match proposal.outcome {
            ProposalOutcome::Accepted => Self {
                added: Some((m, w)),
                removed: None,
            },
            ProposalOutcome::Replaced { displaced } => Self {
                added: Some((m, w)),
                removed: Some(match initiator {
                    Side::Proposer => (displaced, w),
                    Side::Respondent => (m, displaced),
                }),
            },
            ProposalOutcome::Rejected => Self::default(),
        }
    }

    /// The same change with each pair's ids exchanged.
    pub fn transposed(&self) -> Self {
        let swap = |(a, b): (AgentId, AgentId)| (b, a);
        Self {
            added: self.added.map(swap),
            removed: self.removed.map(swap),
        }
    }

    /// Whether the attempt left the relationship set unchanged
    pub fn is_noop(&self) -> bool {
        self.added.is_none() && self.removed.is_none()
    }
}

/// Relationship snapshots over a run: the empty initial set, then one per
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipHistory {
    deltas: Vec<RelationshipDelta>,
}

impl RelationshipHistory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            deltas: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, delta: RelationshipDelta) {
        self.deltas.push(delta);
    }

    /// Relabel a history recorded on a swapped profile.
    pub(crate) fn transposed(self) -> Self {
        Self {
            deltas: self.deltas.iter().map(RelationshipDelta::transposed).collect(),
        }
    }

    /// Number of snapshots (attempts + 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.deltas.len() + 1
    }

    /// Always false: the initial empty snapshot is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Per-attempt deltas
    #[inline]
    pub fn deltas(&self) -> &[RelationshipDelta] {
        &self.deltas
    }

    /// Relationship set after `step` attempts (0 = before any attempt).
    pub fn snapshot(&self, step: usize) -> Option<RelationshipSet> {
        if step >= self.len() {
            return None;
        }
        let mut set = RelationshipSet::default();
        for delta in &self.deltas[..step] {
            set.apply(delta);
        }
        Some(set)
    }

    /// Relationship set at the end of the run
    pub fn last(&self) -> RelationshipSet {
        let mut set = RelationshipSet::default();
        for delta in &self.deltas {
            set.apply(delta);
        }
        set
    }

    /// Iterate over every snapshot in order, replaying incrementally.
    pub fn snapshots(&self) -> Snapshots<'_> {
        Snapshots {
            deltas: self.deltas.iter(),
            current: Some(RelationshipSet::default()),
        }
    }
}

/// Iterator over history snapshots. See [`RelationshipHistory::snapshots`].
#[derive(Debug)]
pub struct Snapshots<'a> {
    deltas: std::slice::Iter<'a, RelationshipDelta>,
    current: Option<RelationshipSet>,
}

impl Iterator for Snapshots<'_> {
    type Item = RelationshipSet;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.current.take()?;
        if let Some(delta) = self.deltas.next() {
            let mut next = snapshot.clone();
            next.apply(delta);
            self.current = Some(next);
        }
        Some(snapshot)
    }
}

// ============================================================================
// MatchOutcome
// ============================================================================

/// Everything a run produces. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Final stable pairing
    pub pairing: Pairing,

    /// Every attempted proposal, including rejected ones
    pub proposals: ProposalLog,

    /// Relationship snapshots, one per attempt plus the initial one
    pub history: RelationshipHistory,
}

impl MatchOutcome {
    /// Outcome of a run on a swapped profile, expressed in the caller's
    /// orientation.
    pub(crate) fn transposed(self) -> Self {
        Self {
            pairing: self.pairing.transposed(),
            proposals: self.proposals.transposed(),
            history: self.history.transposed(),
        }
    }

    /// Summarise the run into a receipt with roots over the pairing and the
    /// proposal log.
    pub fn receipt(&self) -> Result<MatchReceipt> {
        let root = MatchReceipt::compute_root(
            self.pairing
                .pairs()
                .map(|(proposer, respondent)| MatchedPair::new(respondent, proposer)),
        )?;
        let initiator = self.proposals.initiator();
        let log_root = MatchReceipt::compute_log_root(
            self.proposals
                .iter()
                .map(|p| ProposalRecord::new(p, initiator)),
        )?;

        Ok(MatchReceipt::new(
            self.pairing.len() as u64,
            self.proposals.len() as u64,
            self.proposals.acceptances() as u64,
            self.proposals.replacements() as u64,
            self.proposals.rejections() as u64,
            root,
            log_root,
        ))
    }

    /// Welfare measures of the pairing under `profile`.
    pub fn cost(&self, profile: &PreferenceProfile) -> Result<MatchingCost> {
        MatchingCost::of(profile, &self.pairing)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
