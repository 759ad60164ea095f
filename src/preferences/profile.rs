//! Both sides' preferences for one market instance.

use crate::preferences::PreferenceTable;
use crate::types::{AgentId, MatchError, Result, Side};

/// Proposer and respondent preference tables over the same `n`.
///
/// The profile is immutable once built; the engine only reads it.
///
/// ## Example
///
/// ```
/// use gale_shapley::preferences::PreferenceProfile;
/// use gale_shapley::types::Side;
///
/// let profile = PreferenceProfile::new(
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![1, 0], vec![0, 1]],
/// ).unwrap();
///
/// assert_eq!(profile.size(), 2);
/// assert_eq!(profile.rank_of(Side::Respondent, 0, 1).unwrap(), 0);
/// assert_eq!(profile.ranking_of(Side::Proposer, 1).unwrap(), &[1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceProfile {
    proposers: PreferenceTable,
    respondents: PreferenceTable,
}

impl PreferenceProfile {
    /// Validate both matrices and precompute their rank-inverse tables.
    ///
    /// # Errors
    ///
    /// * `SizeMismatch` - the matrices have a different number of rows
    /// * `MalformedPreferences` / `InvalidAgent` - a row is not a permutation
    pub fn new<P, R>(proposer_rows: Vec<P>, respondent_rows: Vec<R>) -> Result<Self>
    where
        P: AsRef<[AgentId]>,
        R: AsRef<[AgentId]>,
    {
        if proposer_rows.len() != respondent_rows.len() {
            return Err(MatchError::SizeMismatch {
                proposers: proposer_rows.len(),
                respondents: respondent_rows.len(),
            });
        }

        Ok(Self {
            proposers: PreferenceTable::new(Side::Proposer, proposer_rows)?,
            respondents: PreferenceTable::new(Side::Respondent, respondent_rows)?,
        })
    }

    /// Market size `n`
    #[inline]
    pub fn size(&self) -> usize {
        self.proposers.size()
    }

    /// Check if the market is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Table for one side
    #[inline]
    pub fn table(&self, side: Side) -> &PreferenceTable {
        match side {
            Side::Proposer => &self.proposers,
            Side::Respondent => &self.respondents,
        }
    }

    /// Proposer preference table
    #[inline]
    pub fn proposers(&self) -> &PreferenceTable {
        &self.proposers
    }

    /// Respondent preference table
    #[inline]
    pub fn respondents(&self) -> &PreferenceTable {
        &self.respondents
    }

    /// Position of `candidate` in the ranking of `agent` on `side`.
    pub fn rank_of(&self, side: Side, agent: AgentId, candidate: AgentId) -> Result<usize> {
        self.table(side).rank(agent, candidate)
    }

    /// Full ranking of `agent` on `side`, most preferred first.
    pub fn ranking_of(&self, side: Side, agent: AgentId) -> Result<&[AgentId]> {
        self.table(side).ranking(agent)
    }

    /// Whether `agent` on `side` strictly prefers `a` over `b`.
    pub fn prefers(&self, side: Side, agent: AgentId, a: AgentId, b: AgentId) -> Result<bool> {
        self.table(side).prefers(agent, a, b)
    }

    /// The same market with the roles exchanged.
    ///
    /// Running the engine on the swapped profile yields the
    /// respondent-optimal stable matching (indexed the other way round).
    pub fn swapped(&self) -> Self {
        let mut proposers = self.respondents.clone();
        let mut respondents = self.proposers.clone();
        proposers.set_side(Side::Proposer);
        respondents.set_side(Side::Respondent);
        Self {
            proposers,
            respondents,
        }
    }
}
