//! Agent identifiers and the two sides of a matching market.
//!
//! ## Namespacing
//!
//! Agent ids are plain indices in `[0, n)`. Each side has its own namespace:
//! proposer `2` and respondent `2` are unrelated agents.

use std::fmt;

/// Index of an agent within its side, in `[0, n)`.
pub type AgentId = usize;

// ============================================================================
// Side enum
// ============================================================================

/// Which group of the market an agent belongs to.
///
/// Represented as u8 when encoded:
/// - Proposer = 0
/// - Respondent = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The group that makes proposals (the optimised side)
    #[default]
    Proposer,
    /// The group that holds tentative matches and upgrades them
    Respondent,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Proposer => 0,
            Side::Respondent => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Proposer),
            1 => Some(Side::Respondent),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Proposer => Side::Respondent,
            Side::Respondent => Side::Proposer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Respondent => f.write_str("respondent"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
