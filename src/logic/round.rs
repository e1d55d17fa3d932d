//! Round workflow: groups for the present players, then the new ladder from the scores.

use crate::logic::partition::partition_groups;
use crate::logic::placement::{match_records, resolve_placement};
use crate::logic::reconcile::reconcile_rankings;
use crate::models::{
    present_players, Group, GroupPlacement, LadderError, MatchRecord, MatchScoreMap, Player, PlayerId,
    RoundOutcome,
};
use std::collections::HashSet;

/// Groups for a round in which the players in `present_ids` take part.
pub fn start_round(all_players: &[Player], present_ids: &HashSet<PlayerId>) -> Result<Vec<Group>, LadderError> {
    partition_groups(&present_players(all_players, present_ids))
}

/// Resolve every group (numbered from 1 in the given order) and reconcile the ladder.
///
/// Nothing is kept between calls: the same inputs always give the same outcome.
pub fn complete_round(
    all_players: &[Player],
    present_ids: &HashSet<PlayerId>,
    groups: &[Group],
    scores: &MatchScoreMap,
) -> Result<RoundOutcome, LadderError> {
    let numbered = groups.iter().zip(1u32..);
    let placements: Vec<GroupPlacement> = numbered
        .clone()
        .map(|(group, number)| resolve_placement(group, number, scores))
        .collect();
    let records: Vec<MatchRecord> = numbered
        .flat_map(|(group, number)| match_records(group, number, scores))
        .collect();
    let players_after = reconcile_rankings(all_players, present_ids, &placements)?;
    log::info!(
        "Completed round: {} groups, {} recorded matches, {} players re-ranked",
        groups.len(),
        records.len(),
        players_after.len()
    );
    Ok(RoundOutcome {
        placements,
        players_after,
        records,
    })
}
