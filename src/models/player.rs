//! Player data structure and roster helpers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a player (stable across rounds).
pub type PlayerId = Uuid;

/// A player on the ladder. `rank` 1 is the best.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rank: u32,
}

impl Player {
    /// Create a new player with a fresh id at the given rank.
    pub fn new(name: impl Into<String>, rank: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rank,
        }
    }
}

/// Copy of `players` ordered by rank (best first). Stable for equal ranks.
pub fn sorted_by_rank(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(|p| p.rank);
    sorted
}

/// The present subset of the roster, ordered by rank (best first).
/// Ids in `present_ids` that are not on the roster are ignored.
pub fn present_players(players: &[Player], present_ids: &HashSet<PlayerId>) -> Vec<Player> {
    sorted_by_rank(players)
        .into_iter()
        .filter(|p| present_ids.contains(&p.id))
        .collect()
}

/// Assign ranks 1..N following the order of `players`.
pub(crate) fn renumber(players: &mut [Player]) {
    for (i, p) in players.iter_mut().enumerate() {
        p.rank = i as u32 + 1;
    }
}
