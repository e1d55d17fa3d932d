//! Group, GroupPlacement and the group formats.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// How a group plays its matches, decided by its size.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFormat {
    /// Two players, one match.
    Exhibition,
    /// Three players, all play all (3 matches).
    RoundRobin,
    /// Four players, single elimination over two rounds (4 matches).
    Bracket,
}

impl GroupFormat {
    /// Format for a group of `size` players. Only 2, 3 and 4 are playable.
    pub fn for_size(size: usize) -> Option<Self> {
        match size {
            2 => Some(GroupFormat::Exhibition),
            3 => Some(GroupFormat::RoundRobin),
            4 => Some(GroupFormat::Bracket),
            _ => None,
        }
    }

    /// Number of matches played by a group of this format.
    pub fn match_count(self) -> usize {
        match self {
            GroupFormat::Exhibition => 1,
            GroupFormat::RoundRobin => 3,
            GroupFormat::Bracket => 4,
        }
    }
}

/// Players competing together in one round, best-ranked first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    pub players: Vec<Player>,
}

impl Group {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// `None` for sizes that have no match format.
    pub fn format(&self) -> Option<GroupFormat> {
        GroupFormat::for_size(self.players.len())
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}

/// Final order of a group after its matches, winner first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupPlacement {
    pub players: Vec<Player>,
}

impl GroupPlacement {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}
