//! Preference model for the matching engine.
//!
//! ## Components
//!
//! - [`PreferenceTable`]: validated rankings for one side, with precomputed
//!   rank-inverse rows for O(1) comparisons
//! - [`PreferenceProfile`]: both sides of one market instance
//! - [`invert_ranking`]: stateless inverse of a single ranking
//!
//! ## Validation
//!
//! Input is validated eagerly when a table is built. A row that is not a
//! permutation of `[0, n)` never reaches the engine, so the engine can use
//! unchecked lookups and can never return a plausible but invalid pairing.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build table | O(n²) |
//! | `rank_of` | O(1) |
//! | `ranking_of` | O(1) |

pub mod ranking;
pub mod table;
pub mod profile;

pub use ranking::{invert_ranking, try_invert_ranking};
pub use table::PreferenceTable;
pub use profile::PreferenceProfile;
