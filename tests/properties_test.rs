//! Property tests for the matching engine on seeded random instances.
//!
//! These tests verify:
//! 1. Every pairing is perfect and stable
//! 2. The pairing does not depend on the selection policy
//! 3. The proposal log and history obey their invariants
//! 4. Ranking inversion round-trips
//!
//! ## Running
//!
//! ```bash
//! cargo test --test properties_test
//! ```

use std::collections::HashSet;

use gale_shapley::analysis::{is_stable, stable_matchings, MatchingCost};
use gale_shapley::{
    invert_ranking, EngineConfig, MatchingEngine, PreferenceProfile, ProposalOutcome,
    SelectionPolicy, Side,
};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

const POLICIES: [SelectionPolicy; 3] = [
    SelectionPolicy::LowestIndex,
    SelectionPolicy::Fifo,
    SelectionPolicy::Lifo,
];

/// One random permutation of `[0, n)` per agent.
fn random_rows(rng: &mut ChaCha8Rng, n: usize) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut row: Vec<usize> = (0..n).collect();
            row.shuffle(rng);
            row
        })
        .collect()
}

/// Generate a deterministic random market. Same seed = same market.
fn random_profile(n: usize, seed: u64) -> PreferenceProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = random_rows(&mut rng, n);
    let respondents = random_rows(&mut rng, n);
    PreferenceProfile::new(proposers, respondents).expect("random rows are permutations")
}

fn engine(policy: SelectionPolicy) -> MatchingEngine {
    MatchingEngine::with_config(EngineConfig::default().with_policy(policy))
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[test]
fn pairing_is_perfect_and_stable() {
    for n in 0..=50 {
        let profile = random_profile(n, 1_000 + n as u64);
        let outcome = MatchingEngine::new().run(&profile).unwrap();

        assert_eq!(outcome.pairing.len(), n);
        let proposers: HashSet<usize> = outcome.pairing.respondent_partners().iter().copied().collect();
        assert_eq!(proposers.len(), n, "every proposer matched exactly once (n={})", n);
        assert!(is_stable(&profile, &outcome.pairing).unwrap(), "unstable for n={}", n);
    }
}

#[test]
fn pairing_is_independent_of_selection_policy() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..40 {
        let n = rng.gen_range(1..=30);
        let profile = random_profile(n, rng.gen());

        let outcomes: Vec<_> = POLICIES.iter().map(|&p| engine(p).run(&profile).unwrap()).collect();
        let roots: Vec<_> = outcomes.iter().map(|o| o.receipt().unwrap().state_root).collect();

        assert!(outcomes.windows(2).all(|w| w[0].pairing == w[1].pairing));
        assert!(roots.windows(2).all(|w| w[0] == w[1]));
    }
}

#[test]
fn result_is_the_proposer_optimal_stable_matching() {
    for seed in 0..30 {
        let profile = random_profile(6, seed);
        let outcome = MatchingEngine::new().run(&profile).unwrap();
        let all = stable_matchings(&profile, 6).unwrap();

        assert!(all.contains(&outcome.pairing));

        // Every proposer does at least as well as in any other stable matching
        for other in &all {
            for m in 0..6 {
                let ours = profile.proposers().rank(m, outcome.pairing.respondent_for(m).unwrap()).unwrap();
                let theirs = profile.proposers().rank(m, other.respondent_for(m).unwrap()).unwrap();
                assert!(ours <= theirs, "seed {} proposer {}", seed, m);
            }
        }

        let respondent_opt = MatchingEngine::new().run_respondent_optimal(&profile).unwrap();
        assert!(all.contains(&respondent_opt.pairing));
        let ours = MatchingCost::of(&profile, &outcome.pairing).unwrap();
        let theirs = MatchingCost::of(&profile, &respondent_opt.pairing).unwrap();
        assert!(ours.proposer_cost <= theirs.proposer_cost);
        assert!(ours.respondent_cost >= theirs.respondent_cost);
    }
}

#[test]
fn proposal_log_never_repeats_a_pair() {
    for seed in 0..20 {
        let profile = random_profile(25, seed);

        for policy in POLICIES {
            let outcome = engine(policy).run(&profile).unwrap();
            let log = &outcome.proposals;

            let distinct: HashSet<(usize, usize)> = log.pairs().collect();
            assert_eq!(distinct.len(), log.len());
            assert!(log.len() >= 25 && log.len() <= 25 * 25);
            assert_eq!(log.acceptances() + log.replacements() + log.rejections(), log.len());
            // Free count only drops on plain acceptances
            assert_eq!(log.acceptances(), 25);

            for (step, p) in log.iter().enumerate() {
                assert_eq!(p.step, step);
            }
        }
    }
}

#[test]
fn proposers_follow_their_rankings() {
    let profile = random_profile(20, 99);
    let outcome = engine(SelectionPolicy::Fifo).run(&profile).unwrap();

    for m in 0..20 {
        let tried: Vec<usize> = outcome.proposals.by_proposer(m).map(|p| p.respondent).collect();
        let ranking = profile.proposers().ranking(m).unwrap();
        assert_eq!(tried.as_slice(), &ranking[..tried.len()]);
        assert_eq!(tried.last().copied(), outcome.pairing.respondent_for(m));
    }
}

#[test]
fn history_is_consistent_with_log() {
    for seed in 0..10 {
        let profile = random_profile(15, seed);
        let outcome = engine(SelectionPolicy::Lifo).run(&profile).unwrap();
        let history = &outcome.history;

        assert_eq!(history.len(), outcome.proposals.len() + 1);

        let snapshots: Vec<_> = history.snapshots().collect();
        assert!(snapshots[0].is_empty());
        for (step, p) in outcome.proposals.iter().enumerate() {
            let before = &snapshots[step];
            let after = &snapshots[step + 1];
            assert!(after.is_partial_matching());

            match p.outcome {
                ProposalOutcome::Accepted => {
                    assert_eq!(after.len(), before.len() + 1);
                    assert!(after.contains(p.proposer, p.respondent));
                }
                ProposalOutcome::Replaced { displaced } => {
                    assert_eq!(after.len(), before.len());
                    assert!(before.contains(displaced, p.respondent));
                    assert!(!after.contains(displaced, p.respondent));
                    assert!(after.contains(p.proposer, p.respondent));
                }
                ProposalOutcome::Rejected => assert_eq!(after, before),
            }
        }

        let last = snapshots.last().unwrap();
        assert_eq!(last, &outcome.pairing.to_relationship_set());
        assert_eq!(last, &history.last());
    }
}

#[test]
fn respondent_optimal_outcome_is_self_consistent() {
    for seed in 0..10 {
        let n = 12;
        let profile = random_profile(n, 500 + seed);
        let outcome = engine(SelectionPolicy::Fifo).run_respondent_optimal(&profile).unwrap();
        let snapshots: Vec<_> = outcome.history.snapshots().collect();

        assert!(is_stable(&profile, &outcome.pairing).unwrap());
        assert_eq!(outcome.proposals.initiator(), Side::Respondent);
        assert_eq!(snapshots.last().unwrap(), &outcome.pairing.to_relationship_set());
        assert_eq!(outcome.proposals.acceptances(), n);

        for (step, p) in outcome.proposals.iter().enumerate() {
            let before = &snapshots[step];
            let after = &snapshots[step + 1];
            match p.outcome {
                ProposalOutcome::Accepted => assert!(after.contains(p.proposer, p.respondent)),
                ProposalOutcome::Replaced { displaced } => {
                    assert!(before.contains(p.proposer, displaced));
                    assert!(!after.contains(p.proposer, displaced));
                    assert!(after.contains(p.proposer, p.respondent));
                }
                ProposalOutcome::Rejected => assert_eq!(after, before),
            }
        }
    }
}

#[test]
fn inversion_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for n in 0..64 {
        let mut ranking: Vec<usize> = (0..n).collect();
        ranking.shuffle(&mut rng);

        let inverse = invert_ranking(&ranking);
        assert_eq!(invert_ranking(&inverse), ranking);
        for (position, &id) in ranking.iter().enumerate() {
            assert_eq!(inverse[id], position);
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let profile = random_profile(40, 5);

    for policy in POLICIES {
        let first = engine(policy).run(&profile).unwrap();
        let second = engine(policy).run(&profile).unwrap();
        assert_eq!(first, second);
    }
}
