//! Reference instances with known answers.
//!
//! `EIGHT_*` is an 8×8 market with eight stable matchings. It exercises
//! rejections and gives a fixed target for proposer- and respondent-optimal
//! results.

use crate::preferences::PreferenceProfile;
use crate::types::{AgentId, Result};

/// Proposer rankings of the 8×8 instance.
pub const EIGHT_PROPOSERS: [[AgentId; 8]; 8] = [
    [2, 4, 6, 7, 0, 3, 5, 1],
    [0, 2, 4, 6, 7, 3, 1, 5],
    [5, 2, 1, 0, 4, 7, 3, 6],
    [6, 1, 4, 5, 0, 7, 3, 2],
    [4, 2, 6, 1, 0, 7, 3, 5],
    [3, 6, 2, 1, 5, 4, 7, 0],
    [1, 7, 2, 4, 0, 3, 6, 5],
    [6, 7, 5, 0, 2, 4, 3, 1],
];

/// Respondent rankings of the 8×8 instance.
pub const EIGHT_RESPONDENTS: [[AgentId; 8]; 8] = [
    [4, 0, 1, 5, 7, 2, 6, 3],
    [1, 3, 6, 5, 4, 0, 7, 2],
    [0, 1, 7, 4, 2, 5, 6, 3],
    [4, 1, 2, 3, 5, 7, 0, 6],
    [1, 0, 4, 2, 6, 5, 7, 3],
    [0, 7, 2, 5, 6, 4, 1, 3],
    [6, 3, 4, 5, 2, 1, 7, 0],
    [2, 1, 7, 4, 0, 3, 6, 5],
];

/// Every stable matching of the 8×8 instance, respondent -> proposer, in
/// lexicographic order.
pub const EIGHT_STABLE_MATCHINGS: [[AgentId; 8]; 8] = [
    [1, 3, 0, 5, 4, 2, 6, 7],
    [1, 3, 0, 5, 4, 7, 6, 2],
    [1, 6, 0, 5, 4, 2, 3, 7],
    [1, 6, 0, 5, 4, 7, 3, 2],
    [4, 3, 0, 5, 1, 2, 6, 7],
    [4, 3, 0, 5, 1, 7, 6, 2],
    [4, 6, 0, 5, 1, 2, 3, 7],
    [4, 6, 0, 5, 1, 7, 3, 2],
];

/// Proposer-optimal stable matching of the 8×8 instance.
pub const EIGHT_PROPOSER_OPTIMAL: [AgentId; 8] = [1, 6, 0, 5, 4, 2, 3, 7];

/// Respondent-optimal stable matching of the 8×8 instance.
pub const EIGHT_RESPONDENT_OPTIMAL: [AgentId; 8] = [4, 3, 0, 5, 1, 7, 6, 2];

/// The 8×8 instance as a validated profile.
pub fn eight_by_eight() -> Result<PreferenceProfile> {
    PreferenceProfile::new(EIGHT_PROPOSERS.to_vec(), EIGHT_RESPONDENTS.to_vec())
}
