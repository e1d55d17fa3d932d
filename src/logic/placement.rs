//! Group results: turn a group's match scores into its placement (winner first).
//!
//! - 4 players: bracket. Round 1 is seed 1 vs 4 (`r1-m1`) and seed 2 vs 3 (`r1-m2`); round 2 is
//!   the final between the winners (`r2-m1`) and the consolation match between the losers
//!   (`r2-m2`). An unset or invalid score counts as 0-0, so the first-listed player advances.
//! - 3 players: round robin (`m1` = 1v2, `m2` = 1v3, `m3` = 2v3), ordered by wins. A three-way
//!   cycle is broken by point differential; other ties keep rank order.
//! - 2 players: one match (`m1`); without a valid decisive score the order is kept.

use crate::models::{
    score_outcome, Fixture, Group, GroupFormat, GroupPlacement, MatchId, MatchRecord, MatchScoreMap,
    Player,
};
use std::cmp::Reverse;

/// Round robin pairings as (first seat, second seat), in match number order.
const ROUND_ROBIN: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// One bracket match with its participants and result.
struct BracketMatch<'a> {
    id: MatchId,
    first: &'a Player,
    second: &'a Player,
    winner: &'a Player,
    loser: &'a Player,
    /// Decided by the 0-0 default because the score is unset or invalid.
    defaulted: bool,
}

/// Decide a bracket match. Higher score wins; ties and missing scores go to `first`.
fn bracket_match<'a>(
    scores: &MatchScoreMap,
    id: MatchId,
    first: &'a Player,
    second: &'a Player,
) -> BracketMatch<'a> {
    let outcome = score_outcome(scores, id);
    let (score1, score2) = outcome.played().unwrap_or((0.0, 0.0));
    let (winner, loser) = if score2 > score1 { (second, first) } else { (first, second) };
    BracketMatch {
        id,
        first,
        second,
        winner,
        loser,
        defaulted: outcome.played().is_none(),
    }
}

/// All four matches of a bracket group: `[r1-m1, r1-m2, r2-m1, r2-m2]`.
fn bracket<'a>(players: &'a [Player], group_number: u32, scores: &MatchScoreMap) -> [BracketMatch<'a>; 4] {
    let semi1 = bracket_match(scores, MatchId::bracket(group_number, 1, 1), &players[0], &players[3]);
    let semi2 = bracket_match(scores, MatchId::bracket(group_number, 1, 2), &players[1], &players[2]);
    let final_match = bracket_match(scores, MatchId::bracket(group_number, 2, 1), semi1.winner, semi2.winner);
    let consolation = bracket_match(scores, MatchId::bracket(group_number, 2, 2), semi1.loser, semi2.loser);
    [semi1, semi2, final_match, consolation]
}

fn resolve_bracket(players: &[Player], group_number: u32, scores: &MatchScoreMap) -> Vec<Player> {
    let matches = bracket(players, group_number, scores);
    for m in matches.iter().filter(|m| m.defaulted) {
        log::warn!("Bracket match {} has no valid score; {} advances by default", m.id, m.winner.name);
    }
    let [_, _, final_match, consolation] = matches;
    [final_match.winner, final_match.loser, consolation.winner, consolation.loser]
        .into_iter()
        .cloned()
        .collect()
}

fn resolve_round_robin(players: &[Player], group_number: u32, scores: &MatchScoreMap) -> Vec<Player> {
    let mut wins = [0u32; 3];
    let mut differential = [0f64; 3];
    for (game, &(a, b)) in ROUND_ROBIN.iter().enumerate() {
        let Some((score_a, score_b)) = score_outcome(scores, MatchId::single(group_number, game as u32 + 1)).played()
        else {
            continue;
        };
        differential[a] += score_a - score_b;
        differential[b] += score_b - score_a;
        if score_a > score_b {
            wins[a] += 1;
        } else if score_b > score_a {
            wins[b] += 1;
        }
    }

    let mut order: Vec<usize> = (0..3).collect();
    if wins == [1, 1, 1] {
        log::debug!("Group {} is a three-way cycle; differentials {:?}", group_number, differential);
        order.sort_by(|&i, &j| {
            differential[j]
                .total_cmp(&differential[i])
                .then(players[i].rank.cmp(&players[j].rank))
        });
    } else {
        order.sort_by_key(|&i| (Reverse(wins[i]), players[i].rank));
    }
    order.into_iter().map(|i| players[i].clone()).collect()
}

fn resolve_exhibition(players: &[Player], group_number: u32, scores: &MatchScoreMap) -> Vec<Player> {
    match score_outcome(scores, MatchId::single(group_number, 1)).played() {
        Some((score1, score2)) if score2 > score1 => vec![players[1].clone(), players[0].clone()],
        _ => players.to_vec(),
    }
}

/// Placement of `group` (numbered from 1 within the round) given the round's scores.
///
/// Always a permutation of the group. Groups outside the 2..=4 sizes keep their order.
pub fn resolve_placement(group: &Group, group_number: u32, scores: &MatchScoreMap) -> GroupPlacement {
    let players = &group.players;
    let placed = match group.format() {
        Some(GroupFormat::Bracket) => resolve_bracket(players, group_number, scores),
        Some(GroupFormat::RoundRobin) => resolve_round_robin(players, group_number, scores),
        Some(GroupFormat::Exhibition) => resolve_exhibition(players, group_number, scores),
        None => {
            log::warn!("Group {} has {} players; keeping its order", group_number, players.len());
            players.clone()
        }
    };
    log::debug!(
        "Group {} placement: {:?}",
        group_number,
        placed.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
    );
    GroupPlacement::new(placed)
}

/// Matches of `group` in match id order. Bracket round 2 pairings follow the round 1 scores
/// (with the same defaults as [`resolve_placement`]).
pub fn group_fixtures(group: &Group, group_number: u32, scores: &MatchScoreMap) -> Vec<Fixture> {
    let players = &group.players;
    match group.format() {
        Some(GroupFormat::Bracket) => bracket(players, group_number, scores)
            .iter()
            .map(|m| Fixture {
                match_id: m.id,
                player1: m.first.id,
                player2: m.second.id,
            })
            .collect(),
        Some(GroupFormat::RoundRobin) => ROUND_ROBIN
            .iter()
            .enumerate()
            .map(|(game, &(a, b))| Fixture {
                match_id: MatchId::single(group_number, game as u32 + 1),
                player1: players[a].id,
                player2: players[b].id,
            })
            .collect(),
        Some(GroupFormat::Exhibition) => vec![Fixture {
            match_id: MatchId::single(group_number, 1),
            player1: players[0].id,
            player2: players[1].id,
        }],
        None => Vec::new(),
    }
}

/// Normalized records of the matches of `group` that have valid scores.
pub fn match_records(group: &Group, group_number: u32, scores: &MatchScoreMap) -> Vec<MatchRecord> {
    group_fixtures(group, group_number, scores)
        .into_iter()
        .filter_map(|f| {
            let (score1, score2) = score_outcome(scores, f.match_id).played()?;
            Some(MatchRecord {
                match_id: f.match_id,
                player1: f.player1,
                player2: f.player2,
                score1,
                score2,
                note: scores.get(&f.match_id).and_then(|s| s.note.clone()),
            })
        })
        .collect()
}
