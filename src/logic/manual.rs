//! Administrative rank corrections outside the round flow.

use crate::models::{renumber, sorted_by_rank, LadderError, Player, PlayerId};
use std::collections::HashSet;

/// Move one player to `new_rank`; everyone else keeps their relative order.
///
/// Returns the roster ordered best first and renumbered 1..N. Moving a player to the rank they
/// already hold returns `players` unchanged.
pub fn reorder_player_ranks(
    players: &[Player],
    player_id: PlayerId,
    new_rank: u32,
) -> Result<Vec<Player>, LadderError> {
    let max = players.len();
    if new_rank < 1 || new_rank as usize > max {
        return Err(LadderError::InvalidRank { rank: new_rank, max });
    }
    let mut ladder = sorted_by_rank(players);
    let idx = ladder
        .iter()
        .position(|p| p.id == player_id)
        .ok_or(LadderError::PlayerNotFound(player_id))?;
    if ladder[idx].rank == new_rank {
        return Ok(players.to_vec());
    }

    let player = ladder.remove(idx);
    log::info!("Moving {} from rank {} to rank {}", player.name, player.rank, new_rank);
    ladder.insert(new_rank as usize - 1, player);
    renumber(&mut ladder);
    Ok(ladder)
}

/// Check that the roster's ranks are exactly 1..N with unique player ids.
pub fn validate_ranks(players: &[Player]) -> Result<(), LadderError> {
    let mut ids = HashSet::new();
    for p in players {
        if !ids.insert(p.id) {
            return Err(LadderError::InconsistentRanks {
                info: format!("player {} is listed twice", p.id),
            });
        }
    }
    let mut ranks: Vec<u32> = players.iter().map(|p| p.rank).collect();
    ranks.sort_unstable();
    if let Some((i, &rank)) = ranks.iter().enumerate().find(|&(i, rank)| *rank != i as u32 + 1) {
        return Err(LadderError::InconsistentRanks {
            info: format!("expected rank {} but found {}", i + 1, rank),
        });
    }
    Ok(())
}
