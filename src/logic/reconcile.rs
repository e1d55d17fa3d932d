//! Rank reconciliation: merge group placements back into the full ladder.
//!
//! Adjacent groups exchange one player: the last of the higher group swaps with the first of
//! the next lower group. The resulting present-player order then refills exactly the roster
//! slots the present players held before the round; absent players keep their slots.

use crate::models::{renumber, sorted_by_rank, GroupPlacement, LadderError, Player, PlayerId};
use std::collections::{HashMap, HashSet};

/// Apply the promotion/relegation swap at every boundary between adjacent groups, top down.
fn swap_boundaries(groups: &mut [Vec<PlayerId>]) {
    for upper in 0..groups.len().saturating_sub(1) {
        let (above, below) = groups.split_at_mut(upper + 1);
        let (Some(relegated), Some(promoted)) = (above[upper].last_mut(), below[0].first_mut()) else {
            continue;
        };
        std::mem::swap(relegated, promoted);
    }
}

/// New full ladder after a round.
///
/// `all_players` is the roster before the round (its rank order is the global order),
/// `present_ids` the players who took part, and `placements` the group results in group order.
/// The returned roster is ordered best first with ranks renumbered 1..N.
pub fn reconcile_rankings(
    all_players: &[Player],
    present_ids: &HashSet<PlayerId>,
    placements: &[GroupPlacement],
) -> Result<Vec<Player>, LadderError> {
    let roster = sorted_by_rank(all_players);
    let by_id: HashMap<PlayerId, &Player> = roster.iter().map(|p| (p.id, p)).collect();

    let mut groups: Vec<Vec<PlayerId>> = placements.iter().map(GroupPlacement::ids).collect();
    swap_boundaries(&mut groups);

    let mut seen = HashSet::new();
    let mut present_order = Vec::new();
    for id in groups.into_iter().flatten() {
        // Placement entries may be stale copies; the roster record is authoritative.
        let player = *by_id.get(&id).ok_or(LadderError::PlayerNotFound(id))?;
        if !present_ids.contains(&id) {
            return Err(LadderError::InvalidPlacements {
                info: format!("{} was placed but is not present", player.name),
            });
        }
        if !seen.insert(id) {
            return Err(LadderError::InvalidPlacements {
                info: format!("{} is placed more than once", player.name),
            });
        }
        present_order.push(player);
    }

    let present_slots = roster.iter().filter(|p| present_ids.contains(&p.id)).count();
    if present_slots != present_order.len() {
        return Err(LadderError::InvalidPlacements {
            info: format!(
                "{} present players on the roster but {} placed",
                present_slots,
                present_order.len()
            ),
        });
    }

    let mut present_order = present_order.into_iter();
    let mut ladder: Vec<Player> = roster
        .iter()
        .map(|slot| {
            if present_ids.contains(&slot.id) {
                present_order.next().unwrap_or(slot).clone()
            } else {
                slot.clone()
            }
        })
        .collect();
    renumber(&mut ladder);
    log::debug!(
        "Reconciled {} placements over {} players ({} present)",
        placements.len(),
        ladder.len(),
        present_slots
    );
    Ok(ladder)
}
