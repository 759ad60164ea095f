//! Preference table for one side of the market.
//!
//! ## Layout
//!
//! Rankings and their inverses are stored as flat row-major `n × n`
//! buffers. Row `a` of `rankings` is agent `a`'s order over the opposite
//! side; row `a` of `ranks` is its inverse, so comparing two candidates
//! costs two reads instead of a linear scan.

use crate::preferences::ranking::{invert_ranking, validate_ranking};
use crate::types::{AgentId, MatchError, Result, Side};

/// Validated rankings of every agent on one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    /// Which side these agents belong to
    side: Side,

    /// Market size `n`
    size: usize,

    /// Row-major rankings, most preferred first
    rankings: Vec<AgentId>,

    /// Row-major inverse rankings: `ranks[a * n + c]` is `c`'s position for `a`
    ranks: Vec<usize>,
}

impl PreferenceTable {
    /// Build a table from one ranking per agent.
    ///
    /// Every row must be a permutation of `[0, rows.len())`.
    ///
    /// # Errors
    ///
    /// * `MalformedPreferences` - a row has the wrong length or a repeated id
    /// * `InvalidAgent` - a row names an id outside `[0, n)`
    ///
    /// # Example
    ///
    /// ```
    /// use gale_shapley::preferences::PreferenceTable;
    /// use gale_shapley::types::Side;
    ///
    /// let table = PreferenceTable::new(Side::Respondent, vec![vec![1, 0], vec![0, 1]]).unwrap();
    /// assert_eq!(table.rank(0, 1).unwrap(), 0);
    /// assert!(table.prefers(0, 1, 0).unwrap());
    /// ```
    pub fn new<R>(side: Side, rows: Vec<R>) -> Result<Self>
    where
        R: AsRef<[AgentId]>,
    {
        let size = rows.len();
        let mut rankings = Vec::with_capacity(size * size);
        let mut ranks = Vec::with_capacity(size * size);

        for (agent, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            validate_ranking(side, agent, row, size)?;
            rankings.extend_from_slice(row);
            ranks.extend(invert_ranking(row));
        }

        Ok(Self {
            side,
            size,
            rankings,
            ranks,
        })
    }

    /// Side these agents belong to
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Market size `n`
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the table is for an empty market
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Full ranking of `agent`, most preferred first.
    pub fn ranking(&self, agent: AgentId) -> Result<&[AgentId]> {
        self.check(self.side, agent)?;
        Ok(self.row(agent))
    }

    /// Position of `candidate` in `agent`'s ranking (0 = most preferred).
    pub fn rank(&self, agent: AgentId, candidate: AgentId) -> Result<usize> {
        self.check(self.side, agent)?;
        self.check(self.side.opposite(), candidate)?;
        Ok(self.rank_unchecked(agent, candidate))
    }

    /// Whether `agent` strictly prefers `a` over `b`.
    pub fn prefers(&self, agent: AgentId, a: AgentId, b: AgentId) -> Result<bool> {
        Ok(self.rank(agent, a)? < self.rank(agent, b)?)
    }

    /// Iterate over every agent's ranking in id order.
    pub fn rows(&self) -> impl Iterator<Item = &[AgentId]> {
        // chunks(0) panics
        self.rankings.chunks(self.size.max(1))
    }

    // ========================================================================
    // Engine access (ids already validated)
    // ========================================================================

    /// Ranking row without bounds reporting.
    #[inline]
    pub(crate) fn row(&self, agent: AgentId) -> &[AgentId] {
        &self.rankings[agent * self.size..(agent + 1) * self.size]
    }

    /// Candidate at `position` in `agent`'s ranking.
    #[inline]
    pub(crate) fn choice_at(&self, agent: AgentId, position: usize) -> AgentId {
        self.rankings[agent * self.size + position]
    }

    /// O(1) rank lookup for ids known to be in range.
    #[inline]
    pub(crate) fn rank_unchecked(&self, agent: AgentId, candidate: AgentId) -> usize {
        self.ranks[agent * self.size + candidate]
    }

    /// Relabel the table when a profile swaps roles.
    pub(crate) fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    fn check(&self, side: Side, agent: AgentId) -> Result<()> {
        if agent < self.size {
            Ok(())
        } else {
            Err(MatchError::InvalidAgent {
                side,
                agent,
                size: self.size,
            })
        }
    }
}
