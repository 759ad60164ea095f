//! Proposer-optimal deferred acceptance.
//!
//! ## Loop
//!
//! ```text
//! while some proposer m is free:
//!     w = next respondent in m's ranking that m has not tried
//!     log (m, w)
//!     w unmatched            -> w holds m
//!     w prefers m to held m1 -> w holds m, m1 is free again
//!     otherwise              -> w rejects m, m stays free
//!     append relationship delta
//! ```
//!
//! Each proposer walks its ranking once, so a run makes at most `n²`
//! proposals. Which free proposer moves next is set by [`SelectionPolicy`];
//! the final pairing does not depend on it.

use log::{debug, trace, warn};

use crate::engine::outcome::{MatchOutcome, Pairing, ProposalLog, RelationshipDelta, RelationshipHistory};
use crate::engine::state::{FreeQueue, MatchState};
use crate::preferences::PreferenceProfile;
use crate::types::{AgentId, MatchError, Proposal, ProposalOutcome, Result, Side};

// ============================================================================
// Configuration
// ============================================================================

/// Order in which free proposers take their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPolicy {
    /// Lowest-numbered free proposer first
    #[default]
    LowestIndex,
    /// Free proposers queue up; a displaced proposer goes to the back
    Fifo,
    /// A displaced proposer moves immediately
    Lifo,
}

/// Engine settings.
///
/// ## Example
///
/// ```
/// use gale_shapley::engine::{EngineConfig, SelectionPolicy};
///
/// let config = EngineConfig::default()
///     .with_policy(SelectionPolicy::Fifo)
///     .with_max_proposals(10_000);
/// assert_eq!(config.max_proposals, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Free-proposer selection order
    pub policy: SelectionPolicy,

    /// Abort with `ProposalLimitExceeded` after this many attempts
    pub max_proposals: Option<usize>,
}

impl EngineConfig {
    /// Set the free-proposer selection order
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cap the number of attempts a run may make
    pub fn with_max_proposals(mut self, limit: usize) -> Self {
        self.max_proposals = Some(limit);
        self
    }
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Deferred-acceptance engine.
///
/// The engine holds only configuration; every run owns its own state, so one
/// engine can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run deferred acceptance to completion.
    ///
    /// # Errors
    ///
    /// * `ProposalLimitExceeded` - the configured cap was hit
    /// * `IncompleteMatching` - a proposer exhausted its ranking (cannot
    ///   happen for a validated profile)
    ///
    /// # Example
    ///
    /// ```
    /// use gale_shapley::engine::MatchingEngine;
    /// use gale_shapley::preferences::PreferenceProfile;
    ///
    /// let profile = PreferenceProfile::new(
    ///     vec![vec![0, 1], vec![1, 0]],
    ///     vec![vec![0, 1], vec![1, 0]],
    /// ).unwrap();
    ///
    /// let outcome = MatchingEngine::new().run(&profile).unwrap();
    /// assert_eq!(outcome.pairing.respondent_partners(), &[0, 1]);
    /// assert_eq!(outcome.proposals.len(), 2);
    /// assert_eq!(outcome.proposals.rejections(), 0);
    /// ```
    pub fn run(&self, profile: &PreferenceProfile) -> Result<MatchOutcome> {
        let size = profile.size();
        let proposers = profile.proposers();
        let respondents = profile.respondents();

        debug!(
            "deferred acceptance: n={} policy={:?} cap={:?}",
            size, self.config.policy, self.config.max_proposals
        );

        let mut state = MatchState::new(size);
        let mut queue = FreeQueue::new(self.config.policy, size);
        let mut proposals = ProposalLog::with_capacity(size);
        let mut history = RelationshipHistory::with_capacity(size);

        while let Some(m) = queue.peek() {
            debug_assert!(state.is_free(m));
            debug_assert_eq!(queue.len(), state.free_count());

            if let Some(limit) = self.config.max_proposals {
                if proposals.len() >= limit {
                    warn!(
                        "proposal limit {} reached with {} proposers still free",
                        limit,
                        state.free_count()
                    );
                    return Err(MatchError::ProposalLimitExceeded { limit });
                }
            }

            let Some(position) = state.advance(m, size) else {
                return Err(MatchError::IncompleteMatching {
                    unmatched: state.free_count(),
                });
            };
            let w = proposers.choice_at(m, position);

            let outcome = match state.held_by(w) {
                None => {
                    state.accept(m, w);
                    queue.pop();
                    ProposalOutcome::Accepted
                }
                Some(m1) if respondents.rank_unchecked(w, m) < respondents.rank_unchecked(w, m1) => {
                    state.replace(m, w, m1);
                    queue.pop();
                    queue.push(m1);
                    ProposalOutcome::Replaced { displaced: m1 }
                }
                Some(_) => ProposalOutcome::Rejected,
            };

            let proposal = Proposal::new(proposals.len(), m, w, outcome);
            trace!("step {}: {} -> {} {:?}", proposal.step, m, w, outcome);
            history.push(RelationshipDelta::from_proposal(&proposal, Side::Proposer));
            proposals.push(proposal);
        }

        let respondent_partners: Vec<AgentId> = state
            .into_pairing()
            .map_err(|unmatched| MatchError::IncompleteMatching { unmatched })?;
        let pairing = Pairing::from_respondent_partners(respondent_partners)?;

        debug!(
            "deferred acceptance done: n={} proposals={} rejections={}",
            size,
            proposals.len(),
            proposals.rejections()
        );

        Ok(MatchOutcome {
            pairing,
            proposals,
            history,
        })
    }

    /// Respondent-optimal stable matching, oriented like [`run`](Self::run).
    ///
    /// Runs the engine with the roles swapped, then relabels the pairing,
    /// log and history so that every pair reads `(proposer, respondent)`.
    /// The log's [`initiator`](crate::engine::ProposalLog::initiator) is
    /// `Side::Respondent`.
    pub fn run_respondent_optimal(&self, profile: &PreferenceProfile) -> Result<MatchOutcome> {
        Ok(self.run(&profile.swapped())?.transposed())
    }
}

/// Validate two preference matrices and run the engine with defaults.
///
/// # Example
///
/// ```
/// use gale_shapley::gale_shapley;
///
/// let outcome = gale_shapley(vec![vec![0usize]], vec![vec![0usize]]).unwrap();
/// assert_eq!(outcome.pairing.proposer_for(0), Some(0));
/// ```
pub fn gale_shapley<P, R>(proposer_rows: Vec<P>, respondent_rows: Vec<R>) -> Result<MatchOutcome>
where
    P: AsRef<[AgentId]>,
    R: AsRef<[AgentId]>,
{
    let profile = PreferenceProfile::new(proposer_rows, respondent_rows)?;
    MatchingEngine::new().run(&profile)
}

// ============================================================================
// Unit Tests
// ============================================================================
