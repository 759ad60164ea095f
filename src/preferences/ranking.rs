//! Ordinal helpers on a single ranking.
//!
//! A ranking is a permutation of `[0, n)`, most preferred first. Its inverse
//! maps each id to its position, which turns "does `a` beat `b`?" into two
//! array reads.

use crate::types::{AgentId, MatchError, Result, Side};

/// Invert a permutation.
///
/// `invert_ranking(r)[x]` is the position of `x` in `r`. The input must be a
/// permutation of `[0, r.len())`; use [`try_invert_ranking`] when it has not
/// been validated.
///
/// # Panics
///
/// Panics if an entry is `>= r.len()`.
///
/// # Example
///
/// ```
/// use gale_shapley::preferences::invert_ranking;
///
/// let ranking = vec![2, 0, 1];
/// assert_eq!(invert_ranking(&ranking), vec![1, 2, 0]);
/// assert_eq!(invert_ranking(&invert_ranking(&ranking)), ranking);
/// ```
pub fn invert_ranking(ranking: &[AgentId]) -> Vec<usize> {
    let mut inverse = vec![0; ranking.len()];
    for (position, &id) in ranking.iter().enumerate() {
        inverse[id] = position;
    }
    inverse
}

/// Invert a ranking after checking it is a permutation.
///
/// `side` and `agent` only label the error.
pub fn try_invert_ranking(side: Side, agent: AgentId, ranking: &[AgentId]) -> Result<Vec<usize>> {
    validate_ranking(side, agent, ranking, ranking.len())?;
    Ok(invert_ranking(ranking))
}

/// Check that `ranking` is a permutation of `[0, size)`.
pub(crate) fn validate_ranking(
    side: Side,
    agent: AgentId,
    ranking: &[AgentId],
    size: usize,
) -> Result<()> {
    if ranking.len() != size {
        return Err(MatchError::MalformedPreferences {
            side,
            agent,
            reason: format!("expected {} entries, found {}", size, ranking.len()),
        });
    }

    let mut seen = vec![false; size];
    for &id in ranking {
        if id >= size {
            return Err(MatchError::InvalidAgent {
                side: side.opposite(),
                agent: id,
                size,
            });
        }
        if seen[id] {
            return Err(MatchError::MalformedPreferences {
                side,
                agent,
                reason: format!("id {} appears twice", id),
            });
        }
        seen[id] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_identity() {
        let identity: Vec<usize> = (0..6).collect();
        assert_eq!(invert_ranking(&identity), identity);
    }

    #[test]
    fn test_invert_empty() {
        assert!(invert_ranking(&[]).is_empty());
    }

    #[test]
    fn test_invert_positions() {
        let ranking = vec![3, 1, 0, 2];
        let inverse = invert_ranking(&ranking);

        for (position, &id) in ranking.iter().enumerate() {
            assert_eq!(inverse[id], position);
        }
    }

    #[test]
    fn test_try_invert_rejects_duplicates() {
        let err = try_invert_ranking(Side::Proposer, 4, &[0, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            MatchError::MalformedPreferences {
                side: Side::Proposer,
                agent: 4,
                reason: "id 1 appears twice".to_string(),
            }
        );
    }

    #[test]
    fn test_try_invert_rejects_out_of_range() {
        let err = try_invert_ranking(Side::Respondent, 0, &[0, 3, 1]).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidAgent {
                side: Side::Proposer,
                agent: 3,
                size: 3,
            }
        );
    }

    #[test]
    fn test_validate_wrong_length() {
        let err = validate_ranking(Side::Proposer, 1, &[0, 1], 3).unwrap_err();
        assert!(matches!(err, MatchError::MalformedPreferences { agent: 1, .. }));
    }
}
