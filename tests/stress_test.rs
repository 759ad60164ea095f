//! Stress tests for the matching engine.
//!
//! These tests verify:
//! 1. Large markets finish within the n² proposal bound
//! 2. Worst-case preference structures still converge
//! 3. Determinism is preserved across runs and across batch execution
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Run all stress tests (release mode recommended)
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use gale_shapley::analysis::is_stable;
use gale_shapley::{EngineConfig, MatchError, MatchingEngine, PreferenceProfile, SelectionPolicy};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a deterministic random market. Same seed = same market.
fn generate_profile(n: usize, seed: u64) -> PreferenceProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = || -> Vec<Vec<usize>> {
        (0..n)
            .map(|_| {
                let mut row: Vec<usize> = (0..n).collect();
                row.shuffle(&mut rng);
                row
            })
            .collect()
    };
    let proposers = rows();
    let respondents = rows();
    PreferenceProfile::new(proposers, respondents).expect("generated rows are permutations")
}

/// Market where every proposer shares one ranking and every respondent
/// ranks proposers in reverse index order. Forces a long cascade of
/// displacements: n(n+1)/2 proposals.
fn cascading_profile(n: usize) -> PreferenceProfile {
    let proposers: Vec<Vec<usize>> = (0..n).map(|_| (0..n).collect()).collect();
    let respondents: Vec<Vec<usize>> = (0..n).map(|_| (0..n).rev().collect()).collect();
    PreferenceProfile::new(proposers, respondents).expect("valid rows")
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Large random market: completes, stays within bounds, is stable.
#[test]
fn stress_large_market() {
    println!("\n=== STRESS TEST: n = 500 ===\n");

    const N: usize = 500;
    let profile = generate_profile(N, 42);
    let engine = MatchingEngine::new();

    let start = Instant::now();
    let outcome = engine.run(&profile).unwrap();
    let elapsed = start.elapsed();

    println!("  Proposals:   {:>10}", outcome.proposals.len());
    println!("  Rejections:  {:>10}", outcome.proposals.rejections());
    println!("  Elapsed:     {:>10.2?}", elapsed);

    assert_eq!(outcome.pairing.len(), N);
    assert!(outcome.proposals.len() <= N * N);
    assert!(is_stable(&profile, &outcome.pairing).unwrap());
}

/// Worst-case cascade converges in exactly n(n+1)/2 proposals.
#[test]
fn stress_cascade() {
    for n in [1usize, 2, 10, 100, 300] {
        let profile = cascading_profile(n);

        for policy in [SelectionPolicy::LowestIndex, SelectionPolicy::Fifo, SelectionPolicy::Lifo] {
            let engine = MatchingEngine::with_config(EngineConfig::default().with_policy(policy));
            let outcome = engine.run(&profile).unwrap();

            assert_eq!(outcome.proposals.len(), n * (n + 1) / 2, "n={} {:?}", n, policy);
            assert_eq!(outcome.proposals.rejections(), 0);

            // Respondent w ends with proposer n-1-w
            let expected: Vec<usize> = (0..n).rev().collect();
            assert_eq!(outcome.pairing.respondent_partners(), expected.as_slice());
        }
    }
}

/// A proposal cap below the cascade length trips, at or above it does not.
#[test]
fn stress_proposal_cap() {
    let profile = cascading_profile(50);
    let needed = 50 * 51 / 2;

    let tight = MatchingEngine::with_config(EngineConfig::default().with_max_proposals(needed - 1));
    assert_eq!(
        tight.run(&profile).unwrap_err(),
        MatchError::ProposalLimitExceeded { limit: needed - 1 }
    );

    let exact = MatchingEngine::with_config(EngineConfig::default().with_max_proposals(needed));
    assert!(exact.run(&profile).is_ok());
}

/// Same seed gives the same receipt; batch and sequential agree.
#[test]
fn verify_determinism() {
    println!("\n=== DETERMINISM TEST ===\n");

    const SEED: u64 = 12345;
    let profiles: Vec<PreferenceProfile> = (0..32).map(|i| generate_profile(60, SEED + i)).collect();
    let engine = MatchingEngine::with_config(EngineConfig::default().with_policy(SelectionPolicy::Fifo));

    let sequential: Vec<[u8; 32]> = profiles
        .iter()
        .map(|p| engine.run(p).unwrap().receipt().unwrap().state_root)
        .collect();
    let batch: Vec<[u8; 32]> = engine
        .run_batch(&profiles)
        .into_iter()
        .map(|r| r.unwrap().receipt().unwrap().state_root)
        .collect();

    println!("  First root: {}", hex::encode(sequential[0]));
    assert_eq!(sequential, batch, "Batch roots must match sequential roots");

    let rerun = engine.run(&generate_profile(60, SEED)).unwrap().receipt().unwrap();
    assert_eq!(rerun.state_root, sequential[0]);

    println!("\n=== DETERMINISM VERIFIED ===\n");
}

/// Scaling report across sizes (informational).
#[test]
fn stress_scaling() {
    println!("\n=== SCALING TEST ===\n");
    println!("{:>8} {:>12} {:>12}", "n", "proposals", "time");

    for &n in &[10usize, 50, 100, 250] {
        let profile = generate_profile(n, n as u64);
        let start = Instant::now();
        let outcome = MatchingEngine::new().run(&profile).unwrap();
        let elapsed = start.elapsed();

        println!("{:>8} {:>12} {:>12.2?}", n, outcome.proposals.len(), elapsed);
        assert_eq!(outcome.history.len(), outcome.proposals.len() + 1);
    }
}
