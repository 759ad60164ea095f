//! Mutable state of a single deferred-acceptance run.
//!
//! ## Invariants
//!
//! - `held[w] == Some(m)` iff `partner[m] == Some(w)`
//! - `free[m]` iff `partner[m].is_none()`
//! - `free_count` equals the number of `true` entries in `free`
//! - `next_choice[m]` only ever increases, so no pair is proposed twice

use std::collections::{BTreeSet, VecDeque};

use crate::engine::SelectionPolicy;
use crate::types::AgentId;

// ============================================================================
// FreeQueue
// ============================================================================

/// Free proposers, ordered by the configured selection policy.
///
/// The proposer returned by `peek` stays in the queue until it is held, so a
/// rejected proposer keeps its turn.
#[derive(Debug, Clone)]
pub(crate) enum FreeQueue {
    LowestIndex(BTreeSet<AgentId>),
    Fifo(VecDeque<AgentId>),
    Lifo(Vec<AgentId>),
}

impl FreeQueue {
    /// Queue with every proposer in `[0, size)` free.
    pub fn new(policy: SelectionPolicy, size: usize) -> Self {
        match policy {
            SelectionPolicy::LowestIndex => FreeQueue::LowestIndex((0..size).collect()),
            SelectionPolicy::Fifo => FreeQueue::Fifo((0..size).collect()),
            // Reversed so that proposer 0 is on top
            SelectionPolicy::Lifo => FreeQueue::Lifo((0..size).rev().collect()),
        }
    }

    /// Proposer whose turn it is.
    pub fn peek(&self) -> Option<AgentId> {
        match self {
            FreeQueue::LowestIndex(set) => set.first().copied(),
            FreeQueue::Fifo(queue) => queue.front().copied(),
            FreeQueue::Lifo(stack) => stack.last().copied(),
        }
    }

    /// Remove the proposer returned by the last `peek`.
    pub fn pop(&mut self) -> Option<AgentId> {
        match self {
            FreeQueue::LowestIndex(set) => set.pop_first(),
            FreeQueue::Fifo(queue) => queue.pop_front(),
            FreeQueue::Lifo(stack) => stack.pop(),
        }
    }

    /// Return a displaced proposer to the queue.
    pub fn push(&mut self, proposer: AgentId) {
        match self {
            FreeQueue::LowestIndex(set) => {
                set.insert(proposer);
            }
            FreeQueue::Fifo(queue) => queue.push_back(proposer),
            FreeQueue::Lifo(stack) => stack.push(proposer),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FreeQueue::LowestIndex(set) => set.len(),
            FreeQueue::Fifo(queue) => queue.len(),
            FreeQueue::Lifo(stack) => stack.len(),
        }
    }
}

// ============================================================================
// MatchState
// ============================================================================

/// Tentative matches, free flags and proposal cursors.
#[derive(Debug, Clone)]
pub(crate) struct MatchState {
    /// Respondent -> currently held proposer
    held: Vec<Option<AgentId>>,

    /// Proposer -> respondent currently holding it
    partner: Vec<Option<AgentId>>,

    /// Proposer -> is free
    free: Vec<bool>,

    /// Number of free proposers
    free_count: usize,

    /// Proposer -> position of the next untried respondent in its ranking
    next_choice: Vec<usize>,
}

impl MatchState {
    /// All proposers free, all respondents unmatched.
    pub fn new(size: usize) -> Self {
        Self {
            held: vec![None; size],
            partner: vec![None; size],
            free: vec![true; size],
            free_count: size,
            next_choice: vec![0; size],
        }
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    #[inline]
    pub fn is_free(&self, proposer: AgentId) -> bool {
        self.free[proposer]
    }

    #[inline]
    pub fn held_by(&self, respondent: AgentId) -> Option<AgentId> {
        self.held[respondent]
    }

    /// Claim the next untried ranking position for `proposer`.
    ///
    /// Returns `None` once the proposer has exhausted its ranking.
    pub fn advance(&mut self, proposer: AgentId, size: usize) -> Option<usize> {
        let position = self.next_choice[proposer];
        if position >= size {
            return None;
        }
        self.next_choice[proposer] = position + 1;
        Some(position)
    }

    /// `respondent` was unmatched and now holds `proposer`.
    pub fn accept(&mut self, proposer: AgentId, respondent: AgentId) {
        debug_assert!(self.held[respondent].is_none());
        debug_assert!(self.free[proposer]);

        self.held[respondent] = Some(proposer);
        self.partner[proposer] = Some(respondent);
        self.free[proposer] = false;
        self.free_count -= 1;
    }

    /// `respondent` drops `displaced` for `proposer`. Free count is unchanged.
    pub fn replace(&mut self, proposer: AgentId, respondent: AgentId, displaced: AgentId) {
        debug_assert_eq!(self.held[respondent], Some(displaced));
        debug_assert_eq!(self.partner[displaced], Some(respondent));
        debug_assert!(self.free[proposer]);

        self.held[respondent] = Some(proposer);
        self.partner[proposer] = Some(respondent);
        self.partner[displaced] = None;
        self.free[proposer] = false;
        self.free[displaced] = true;
    }

    /// Consume the state into the respondent -> proposer vector.
    ///
    /// Returns the number of unmatched respondents on failure.
    pub fn into_pairing(self) -> Result<Vec<AgentId>, usize> {
        let unmatched = self.held.iter().filter(|h| h.is_none()).count();
        if unmatched > 0 {
            return Err(unmatched);
        }
        Ok(self.held.into_iter().flatten().collect())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
