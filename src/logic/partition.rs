//! Group partitioning: split the present players into groups of 4 and 3 (or one pair).

use crate::models::{Group, LadderError, Player};

/// Group sizes for `present` players, strongest group first.
///
/// Two players form a single exhibition pair. From three players up, as many groups of 4 as
/// possible are used and the rest are groups of 3. Five players cannot be split.
pub fn group_sizes(present: usize) -> Result<Vec<usize>, LadderError> {
    if present < 2 {
        return Err(LadderError::InsufficientPlayers { present });
    }
    if present == 2 {
        return Ok(vec![2]);
    }
    let fours = (0..=present / 4)
        .rev()
        .find(|a| (present - 4 * a) % 3 == 0)
        .ok_or(LadderError::NoValidGrouping { present })?;
    let threes = (present - 4 * fours) / 3;
    let mut sizes = vec![4; fours];
    sizes.extend(std::iter::repeat(3).take(threes));
    Ok(sizes)
}

/// Split `present_players` (best rank first) into consecutive groups, groups of 4 first.
pub fn partition_groups(present_players: &[Player]) -> Result<Vec<Group>, LadderError> {
    let sizes = group_sizes(present_players.len())?;
    let mut rest = present_players;
    let groups: Vec<Group> = sizes
        .iter()
        .map(|&size| {
            let (head, tail) = rest.split_at(size);
            rest = tail;
            Group::new(head.to_vec())
        })
        .collect();
    log::debug!(
        "Partitioned {} present players into groups of sizes {:?}",
        present_players.len(),
        sizes
    );
    Ok(groups)
}
