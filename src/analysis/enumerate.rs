//! Exhaustive enumeration of stable matchings.
//!
//! Respondents are assigned in id order, each trying proposers in id order.
//! A branch is cut as soon as two already-assigned agents form a blocking
//! pair, so the search visits far fewer than `n!` leaves on typical input.
//! Results come out in lexicographic order of the respondent -> proposer
//! vector.

use log::debug;

use crate::engine::Pairing;
use crate::preferences::{PreferenceProfile, PreferenceTable};
use crate::types::{AgentId, MatchError, Result};

/// Largest market the enumerator accepts by default.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 10;

/// Every stable matching of `profile`.
///
/// # Errors
///
/// `InstanceTooLarge` if `profile.size() > max_size`.
///
/// # Example
///
/// ```
/// use gale_shapley::analysis::stable_matchings;
/// use gale_shapley::preferences::PreferenceProfile;
///
/// // Opposed preferences: both "everyone gets their first choice" matchings
/// // are stable.
/// let profile = PreferenceProfile::new(
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![1, 0], vec![0, 1]],
/// ).unwrap();
///
/// let all = stable_matchings(&profile, 8).unwrap();
/// assert_eq!(all.len(), 2);
/// ```
pub fn stable_matchings(profile: &PreferenceProfile, max_size: usize) -> Result<Vec<Pairing>> {
    let size = profile.size();
    if size > max_size {
        return Err(MatchError::InstanceTooLarge {
            size,
            max: max_size,
        });
    }

    let mut search = Search {
        proposers: profile.proposers(),
        respondents: profile.respondents(),
        assigned: Vec::with_capacity(size),
        proposer_partner: vec![None; size],
        found: Vec::new(),
    };
    search.extend(size)?;

    debug!("enumerated {} stable matchings for n={}", search.found.len(), size);
    Ok(search.found)
}

struct Search<'a> {
    proposers: &'a PreferenceTable,
    respondents: &'a PreferenceTable,
    /// Respondent -> proposer for respondents `0..assigned.len()`
    assigned: Vec<AgentId>,
    /// Proposer -> respondent for proposers already used
    proposer_partner: Vec<Option<AgentId>>,
    found: Vec<Pairing>,
}

impl Search<'_> {
    fn extend(&mut self, size: usize) -> Result<()> {
        let w = self.assigned.len();
        if w == size {
            self.found
                .push(Pairing::from_respondent_partners(self.assigned.clone())?);
            return Ok(());
        }

        for m in 0..size {
            if self.proposer_partner[m].is_some() || self.blocks_with_assigned(m, w) {
                continue;
            }
            self.assigned.push(m);
            self.proposer_partner[m] = Some(w);
            self.extend(size)?;
            self.proposer_partner[m] = None;
            self.assigned.pop();
        }
        Ok(())
    }

    /// Would matching `w` with `m` create a blocking pair among assigned agents?
    fn blocks_with_assigned(&self, m: AgentId, w: AgentId) -> bool {
        for (w2, &m2) in self.assigned.iter().enumerate() {
            // (m, w2): m prefers w2 to w, and w2 prefers m to m2
            if self.proposers.rank_unchecked(m, w2) < self.proposers.rank_unchecked(m, w)
                && self.respondents.rank_unchecked(w2, m) < self.respondents.rank_unchecked(w2, m2)
            {
                return true;
            }
            // (m2, w): m2 prefers w to w2, and w prefers m2 to m
            if self.proposers.rank_unchecked(m2, w) < self.proposers.rank_unchecked(m2, w2)
                && self.respondents.rank_unchecked(w, m2) < self.respondents.rank_unchecked(w, m)
            {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::is_stable;

    #[test]
    fn test_too_large() {
        let rows: Vec<Vec<usize>> = (0..4).map(|_| (0..4).collect()).collect();
        let profile = PreferenceProfile::new(rows.clone(), rows).unwrap();

        assert_eq!(
            stable_matchings(&profile, 3).unwrap_err(),
            MatchError::InstanceTooLarge { size: 4, max: 3 }
        );
    }

    #[test]
    fn test_identical_preferences_have_one_stable_matching() {
        let rows: Vec<Vec<usize>> = (0..5).map(|_| (0..5).collect()).collect();
        let profile = PreferenceProfile::new(rows.clone(), rows).unwrap();

        let all = stable_matchings(&profile, DEFAULT_ENUMERATION_LIMIT).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].respondent_partners(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_every_result_is_stable() {
        let profile = PreferenceProfile::new(
            vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]],
            vec![vec![1, 2, 0], vec![2, 0, 1], vec![0, 1, 2]],
        )
        .unwrap();

        let all = stable_matchings(&profile, DEFAULT_ENUMERATION_LIMIT).unwrap();
        assert_eq!(all.len(), 3);
        for pairing in &all {
            assert!(is_stable(&profile, pairing).unwrap());
        }
    }

    #[test]
    fn test_empty_market() {
        let profile =
            PreferenceProfile::new(Vec::<Vec<usize>>::new(), Vec::<Vec<usize>>::new()).unwrap();

        let all = stable_matchings(&profile, 0).unwrap();
        assert_eq!(all, vec![Pairing::default()]);
    }
}
