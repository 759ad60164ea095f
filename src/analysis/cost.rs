//! Welfare measures of a pairing.
//!
//! Costs are sums of ranks (0 = first choice), so lower is better. Means are
//! reported as `Decimal` so that repeated runs print identical values on
//! every platform.

use rust_decimal::Decimal;

use crate::analysis::blocking::check_size;
use crate::engine::Pairing;
use crate::preferences::PreferenceProfile;
use crate::types::Result;

/// Rank-based cost of a pairing for each side.
///
/// ## Example
///
/// ```
/// use gale_shapley::analysis::MatchingCost;
/// use gale_shapley::engine::Pairing;
/// use gale_shapley::preferences::PreferenceProfile;
/// use rust_decimal::Decimal;
///
/// let profile = PreferenceProfile::new(
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![1, 0], vec![0, 1]],
/// ).unwrap();
/// let pairing = Pairing::from_respondent_partners(vec![0, 1]).unwrap();
///
/// let cost = MatchingCost::of(&profile, &pairing).unwrap();
/// assert_eq!(cost.proposer_cost, 0);
/// assert_eq!(cost.respondent_cost, 2);
/// assert_eq!(cost.mean_respondent_rank(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchingCost {
    /// Market size
    pub size: usize,

    /// Sum over proposers of their partner's rank
    pub proposer_cost: u64,

    /// Sum over respondents of their partner's rank
    pub respondent_cost: u64,

    /// Worst rank any agent on either side assigns its partner
    pub regret: usize,
}

impl MatchingCost {
    /// Measure `pairing` under `profile`.
    ///
    /// # Errors
    ///
    /// `InvalidPairing` if the pairing and profile sizes differ.
    pub fn of(profile: &PreferenceProfile, pairing: &Pairing) -> Result<Self> {
        check_size(profile, pairing)?;

        let proposers = profile.proposers();
        let respondents = profile.respondents();
        let mut cost = MatchingCost {
            size: pairing.len(),
            ..Default::default()
        };

        for (proposer, respondent) in pairing.pairs() {
            let p_rank = proposers.rank_unchecked(proposer, respondent);
            let r_rank = respondents.rank_unchecked(respondent, proposer);
            cost.proposer_cost += p_rank as u64;
            cost.respondent_cost += r_rank as u64;
            cost.regret = cost.regret.max(p_rank).max(r_rank);
        }
        Ok(cost)
    }

    /// Combined cost of both sides
    #[inline]
    pub fn egalitarian_cost(&self) -> u64 {
        self.proposer_cost + self.respondent_cost
    }

    /// Gap between the two sides' costs
    #[inline]
    pub fn imbalance(&self) -> u64 {
        self.proposer_cost.abs_diff(self.respondent_cost)
    }

    /// Average partner rank on the proposer side (zero for an empty market)
    pub fn mean_proposer_rank(&self) -> Decimal {
        self.mean(self.proposer_cost)
    }

    /// Average partner rank on the respondent side (zero for an empty market)
    pub fn mean_respondent_rank(&self) -> Decimal {
        self.mean(self.respondent_cost)
    }

    fn mean(&self, total: u64) -> Decimal {
        Decimal::from(total)
            .checked_div(Decimal::from(self.size))
            .unwrap_or(Decimal::ZERO)
    }
}
