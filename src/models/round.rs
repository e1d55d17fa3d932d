//! Round results handed to persistence: match records, round outcome and snapshot.

use crate::models::group::{Group, GroupPlacement};
use crate::models::player::{Player, PlayerId};
use crate::models::score::{MatchId, MatchScoreMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled match of a group: who plays whom under which id.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
}

/// A played match with valid scores, normalized for storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub score1: f64,
    pub score2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything computed when a round is completed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// One placement per group, in group order.
    pub placements: Vec<GroupPlacement>,
    /// Full roster with updated ranks, best first.
    pub players_after: Vec<Player>,
    pub records: Vec<MatchRecord>,
}

/// Stored view of a completed round. Field names follow the blob layout of earlier rounds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub groups: Vec<Group>,
    pub scores: MatchScoreMap,
    pub final_placements: Vec<GroupPlacement>,
    pub players_before: Vec<Player>,
    pub players_after: Vec<Player>,
    pub present_player_ids: Vec<PlayerId>,
    pub completed_at: DateTime<Utc>,
}

impl RoundSnapshot {
    /// Assemble the snapshot of a round from its inputs and computed outcome.
    pub fn from_outcome(
        groups: Vec<Group>,
        scores: MatchScoreMap,
        players_before: Vec<Player>,
        present_player_ids: Vec<PlayerId>,
        outcome: &RoundOutcome,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            groups,
            scores,
            final_placements: outcome.placements.clone(),
            players_before,
            players_after: outcome.players_after.clone(),
            present_player_ids,
            completed_at,
        }
    }
}
