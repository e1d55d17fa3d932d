//! LadderError: everything the ranking engine can reject.

use crate::models::player::PlayerId;

/// Errors that can occur while grouping, reconciling or editing ranks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LadderError {
    /// Fewer than 2 present players.
    InsufficientPlayers { present: usize },
    /// No split of the present players into groups of 4 and 3 exists (only 5 players).
    NoValidGrouping { present: usize },
    /// Manual edit target rank outside 1..=max.
    InvalidRank { rank: u32, max: usize },
    /// Player not on the roster.
    PlayerNotFound(PlayerId),
    /// Group placements do not cover exactly the present players on the roster.
    InvalidPlacements { info: String },
    /// Roster ranks are not a permutation of 1..N.
    InconsistentRanks { info: String },
}

impl std::fmt::Display for LadderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LadderError::InsufficientPlayers { present } => {
                write!(f, "Need at least 2 present players (got {})", present)
            }
            LadderError::NoValidGrouping { present } => {
                write!(f, "Cannot split {} players into groups of 4 and 3", present)
            }
            LadderError::InvalidRank { rank, max } => {
                write!(f, "Rank {} is out of range (must be between 1 and {})", rank, max)
            }
            LadderError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            LadderError::InvalidPlacements { info } => write!(f, "Invalid group placements: {}", info),
            LadderError::InconsistentRanks { info } => write!(f, "Inconsistent ranks: {}", info),
        }
    }
}

impl std::error::Error for LadderError {}
