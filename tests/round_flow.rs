//! Integration tests for a full round: grouping, group results and the new ladder.

use ladder_league::{
    complete_round, partition_groups, reorder_player_ranks, resolve_placement, start_round, Group,
    LadderError, MatchId, MatchScore, MatchScoreMap, Player, PlayerId, RoundSnapshot,
};
use std::collections::HashSet;

fn ladder(n: u32) -> Vec<Player> {
    (1..=n).map(|r| Player::new(format!("P{r}"), r)).collect()
}

fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

fn scores(entries: &[(&str, &str, &str)]) -> MatchScoreMap {
    entries
        .iter()
        .map(|(id, s1, s2)| (id.parse::<MatchId>().unwrap(), MatchScore::new(*s1, *s2)))
        .collect()
}

fn everyone(players: &[Player]) -> HashSet<PlayerId> {
    players.iter().map(|p| p.id).collect()
}

#[test]
fn four_player_bracket_round() {
    let players = ladder(4);
    let present = everyone(&players);
    let groups = start_round(&players, &present).unwrap();
    assert_eq!(groups.len(), 1);

    let s = scores(&[
        ("g1-r1-m1", "10", "5"),
        ("g1-r1-m2", "10", "5"),
        ("g1-r2-m1", "10", "8"),
        ("g1-r2-m2", "10", "9"),
    ]);
    let outcome = complete_round(&players, &present, &groups, &s).unwrap();
    assert_eq!(names(&outcome.placements[0].players), ["P1", "P2", "P4", "P3"]);
    let after: Vec<(&str, u32)> = outcome.players_after.iter().map(|p| (p.name.as_str(), p.rank)).collect();
    assert_eq!(after, [("P1", 1), ("P2", 2), ("P4", 3), ("P3", 4)]);
    assert_eq!(outcome.records.len(), 4);
}

#[test]
fn three_player_cycle_is_broken_by_differential() {
    let players = ladder(3);
    let group = Group::new(players.clone());
    let s = scores(&[("g1-m1", "10", "8"), ("g1-m2", "2", "10"), ("g1-m3", "10", "9")]);
    let placement = resolve_placement(&group, 1, &s);
    assert_eq!(names(&placement.players), ["P3", "P2", "P1"]);
}

#[test]
fn five_present_players_cannot_be_grouped() {
    assert_eq!(
        partition_groups(&ladder(5)),
        Err(LadderError::NoValidGrouping { present: 5 })
    );
}

#[test]
fn manual_edit_moves_last_to_first() {
    let players = ladder(4);
    let result = reorder_player_ranks(&players, players[3].id, 1).unwrap();
    let standings: Vec<(&str, u32)> = result.iter().map(|p| (p.name.as_str(), p.rank)).collect();
    assert_eq!(standings, [("P4", 1), ("P1", 2), ("P2", 3), ("P3", 4)]);
}

#[test]
fn manual_edit_to_current_rank_changes_nothing() {
    let players = ladder(4);
    for p in &players {
        assert_eq!(reorder_player_ranks(&players, p.id, p.rank).unwrap(), players);
    }
}

#[test]
fn round_with_absent_players_and_two_groups() {
    // P4 and P9 sit out; 7 present players make a group of 4 and a group of 3.
    let players = ladder(9);
    let present: HashSet<PlayerId> = players
        .iter()
        .filter(|p| p.rank != 4 && p.rank != 9)
        .map(|p| p.id)
        .collect();
    let groups = start_round(&players, &present).unwrap();
    assert_eq!(names(&groups[0].players), ["P1", "P2", "P3", "P5"]);
    assert_eq!(names(&groups[1].players), ["P6", "P7", "P8"]);

    let s = scores(&[
        // Bracket: P5 upsets P1, P2 beats P3, P2 wins the final, P1 beats P3.
        ("g1-r1-m1", "6", "11"),
        ("g1-r1-m2", "11", "9"),
        ("g1-r2-m1", "11", "13"),
        ("g1-r2-m2", "11", "3"),
        // Round robin: P8 wins both, P6 beats P7.
        ("g2-m1", "11", "5"),
        ("g2-m2", "4", "11"),
        ("g2-m3", "8", "11"),
    ]);
    let outcome = complete_round(&players, &present, &groups, &s).unwrap();
    assert_eq!(names(&outcome.placements[0].players), ["P2", "P5", "P1", "P3"]);
    assert_eq!(names(&outcome.placements[1].players), ["P8", "P6", "P7"]);

    // P3 (last of group 1) and P8 (first of group 2) swap; P4 and P9 keep their slots.
    assert_eq!(
        names(&outcome.players_after),
        ["P2", "P5", "P1", "P4", "P8", "P3", "P6", "P7", "P9"]
    );
    let ranks: Vec<u32> = outcome.players_after.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, (1..=9).collect::<Vec<_>>());
}

#[test]
fn partial_scores_still_complete_the_round() {
    let players = ladder(6);
    let present = everyone(&players);
    let groups = start_round(&players, &present).unwrap();
    let outcome = complete_round(&players, &present, &groups, &scores(&[("g2-m1", "oops", "3")])).unwrap();
    assert!(outcome.records.is_empty());
    // No results: placements keep rank order and only the boundary swap applies.
    assert_eq!(names(&outcome.players_after), ["P1", "P2", "P4", "P3", "P5", "P6"]);
}

#[test]
fn snapshot_uses_the_stored_field_names() {
    let players = ladder(2);
    let present = everyone(&players);
    let groups = start_round(&players, &present).unwrap();
    let s = scores(&[("g1-m1", "3", "11")]);
    let outcome = complete_round(&players, &present, &groups, &s).unwrap();
    let snapshot = RoundSnapshot::from_outcome(
        groups,
        s,
        players.clone(),
        players.iter().map(|p| p.id).collect(),
        &outcome,
        chrono::Utc::now(),
    );
    let json = serde_json::to_value(&snapshot).unwrap();
    for key in ["groups", "scores", "finalPlacements", "playersBefore", "playersAfter", "presentPlayerIds"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["playersAfter"][0]["name"], "P2");
    assert_eq!(json["scores"]["g1-m1"]["score2"], "11");
}
