//! Analysis of pairings: stability checks, enumeration and welfare.
//!
//! These helpers work on any [`Pairing`](crate::engine::Pairing), not only on
//! engine output, which makes them usable as independent oracles in tests.
//!
//! - [`blocking_pairs`] / [`is_stable`]: O(n²) stability check
//! - [`stable_matchings`]: every stable matching of a small instance
//! - [`MatchingCost`]: rank sums, regret and exact mean ranks

pub mod blocking;
pub mod enumerate;
pub mod cost;

pub use blocking::{blocking_pairs, is_stable};
pub use enumerate::{stable_matchings, DEFAULT_ENUMERATION_LIMIT};
pub use cost::MatchingCost;
