//! Parallel runs over many independent instances.
//!
//! A single run is strictly sequential, but separate instances share
//! nothing, so a batch fans out across rayon's thread pool. Each worker owns
//! its run's state; results come back in input order.

use log::debug;
use rayon::prelude::*;

use crate::engine::{MatchOutcome, MatchingEngine};
use crate::preferences::PreferenceProfile;
use crate::types::Result;

impl MatchingEngine {
    /// Run every profile with this engine's configuration.
    ///
    /// A failing instance does not stop the others.
    ///
    /// # Example
    ///
    /// ```
    /// use gale_shapley::engine::MatchingEngine;
    /// use gale_shapley::preferences::PreferenceProfile;
    ///
    /// let profiles = vec![
    ///     PreferenceProfile::new(vec![vec![0]], vec![vec![0]]).unwrap(),
    ///     PreferenceProfile::new(vec![vec![1, 0], vec![0, 1]], vec![vec![0, 1], vec![0, 1]]).unwrap(),
    /// ];
    ///
    /// let results = MatchingEngine::new().run_batch(&profiles);
    /// assert_eq!(results.len(), 2);
    /// assert!(results.iter().all(|r| r.is_ok()));
    /// ```
    pub fn run_batch(&self, profiles: &[PreferenceProfile]) -> Vec<Result<MatchOutcome>> {
        debug!("batch run over {} instances", profiles.len());
        profiles.par_iter().map(|profile| self.run(profile)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, SelectionPolicy};
    use crate::types::MatchError;

    fn shifted(size: usize, shift: usize) -> PreferenceProfile {
        let rows = |offset: usize| -> Vec<Vec<usize>> {
            (0..size)
                .map(|a| (0..size).map(|k| (a + k + offset) % size).collect())
                .collect()
        };
        PreferenceProfile::new(rows(0), rows(shift)).unwrap()
    }

    #[test]
    fn test_batch_matches_sequential() {
        let profiles: Vec<PreferenceProfile> = (1..12).map(|n| shifted(n, n / 2)).collect();
        let engine = MatchingEngine::with_config(EngineConfig::default().with_policy(SelectionPolicy::Fifo));

        let batch = engine.run_batch(&profiles);
        for (profile, result) in profiles.iter().zip(batch) {
            assert_eq!(result.unwrap(), engine.run(profile).unwrap());
        }
    }

    #[test]
    fn test_batch_keeps_failures_local() {
        let profiles = vec![shifted(2, 0), shifted(6, 3)];
        let engine = MatchingEngine::with_config(EngineConfig::default().with_max_proposals(3));

        let results = engine.run_batch(&profiles);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(MatchError::ProposalLimitExceeded { limit: 3 })
        ));
    }

    #[test]
    fn test_batch_empty() {
        assert!(MatchingEngine::new().run_batch(&[]).is_empty());
    }
}
