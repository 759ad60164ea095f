//! Gale–Shapley - Binary Entry Point
//!
//! Runs the bundled 8×8 instance and prints the result.
//! Set `RUST_LOG=debug` (or `trace`) to see the engine's own logging.

use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use gale_shapley::analysis::{is_stable, stable_matchings, DEFAULT_ENUMERATION_LIMIT};
use gale_shapley::fixtures;
use gale_shapley::{MatchingEngine, ProposalOutcome, Result};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    println!("===========================================");
    println!("  Gale-Shapley - Deferred Acceptance");
    println!("===========================================");
    println!();

    let profile = fixtures::eight_by_eight()?;
    info!("loaded {}x{} instance", profile.size(), profile.size());

    let engine = MatchingEngine::new();
    let outcome = engine.run(&profile)?;

    println!("Proposals ({}):", outcome.proposals.len());
    for p in &outcome.proposals {
        let verdict = match p.outcome {
            ProposalOutcome::Accepted => "accepted".to_string(),
            ProposalOutcome::Replaced { displaced } => format!("accepted, drops {}", displaced),
            ProposalOutcome::Rejected => "rejected".to_string(),
        };
        println!("  #{:<3} proposer {} -> respondent {}: {}", p.step, p.proposer, p.respondent, verdict);
    }
    println!();

    println!("Final pairing (respondent <- proposer):");
    for (proposer, respondent) in outcome.pairing.pairs() {
        println!("  {} <- {}", respondent, proposer);
    }
    println!();

    let cost = outcome.cost(&profile)?;
    println!("Proposer cost:     {:>4} (mean rank {})", cost.proposer_cost, cost.mean_proposer_rank().round_dp(3));
    println!("Respondent cost:   {:>4} (mean rank {})", cost.respondent_cost, cost.mean_respondent_rank().round_dp(3));
    println!("Regret:            {:>4}", cost.regret);
    println!("Stable:            {}", is_stable(&profile, &outcome.pairing)?);

    let all = stable_matchings(&profile, DEFAULT_ENUMERATION_LIMIT)?;
    println!("Stable matchings:  {:>4}", all.len());

    let receipt = outcome.receipt()?;
    println!();
    println!("Receipt root:      {}", receipt.state_root_hex());
    println!("Log root:          {}", receipt.log_root_hex());

    Ok(())
}
