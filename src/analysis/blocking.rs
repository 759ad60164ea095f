//! Blocking-pair detection.
//!
//! A pair `(m, w)` blocks a pairing when they are not matched to each other
//! and each prefers the other over their current partner. A pairing is
//! stable iff it has no blocking pair.

use crate::engine::Pairing;
use crate::preferences::PreferenceProfile;
use crate::types::{AgentId, MatchError, Result};

/// Every blocking pair of `pairing`, sorted by `(proposer, respondent)`.
///
/// Runs in O(n²): each proposer only looks at respondents ranked above its
/// current partner.
///
/// # Errors
///
/// `InvalidPairing` if the pairing and profile sizes differ.
///
/// # Example
///
/// ```
/// use gale_shapley::analysis::blocking_pairs;
/// use gale_shapley::engine::Pairing;
/// use gale_shapley::preferences::PreferenceProfile;
///
/// let profile = PreferenceProfile::new(
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![0, 1], vec![0, 1]],
/// ).unwrap();
///
/// // Proposer 0 and respondent 0 want each other but are apart.
/// let pairing = Pairing::from_respondent_partners(vec![1, 0]).unwrap();
/// assert_eq!(blocking_pairs(&profile, &pairing).unwrap(), vec![(0, 0)]);
/// ```
pub fn blocking_pairs(
    profile: &PreferenceProfile,
    pairing: &Pairing,
) -> Result<Vec<(AgentId, AgentId)>> {
    check_size(profile, pairing)?;

    let proposers = profile.proposers();
    let respondents = profile.respondents();
    let mut blocking = Vec::new();

    for (m, &current) in pairing.proposer_partners().iter().enumerate() {
        let cutoff = proposers.rank_unchecked(m, current);
        for &w in &proposers.row(m)[..cutoff] {
            let held = pairing.respondent_partners()[w];
            if respondents.rank_unchecked(w, m) < respondents.rank_unchecked(w, held) {
                blocking.push((m, w));
            }
        }
    }

    blocking.sort_unstable();
    Ok(blocking)
}

/// Whether `pairing` has no blocking pair under `profile`.
pub fn is_stable(profile: &PreferenceProfile, pairing: &Pairing) -> Result<bool> {
    Ok(blocking_pairs(profile, pairing)?.is_empty())
}

pub(crate) fn check_size(profile: &PreferenceProfile, pairing: &Pairing) -> Result<()> {
    if profile.size() != pairing.len() {
        return Err(MatchError::InvalidPairing {
            reason: format!(
                "pairing has {} pairs, profile has {} agents per side",
                pairing.len(),
                profile.size()
            ),
        });
    }
    Ok(())
}
