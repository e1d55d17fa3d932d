//! Ladder league ranking engine: library with models and ranking logic.

pub mod logic;
pub mod models;

pub use logic::{
    complete_round, group_fixtures, group_sizes, match_records, partition_groups, reconcile_rankings,
    reorder_player_ranks, resolve_placement, start_round, validate_ranks,
};
pub use models::{
    present_players, score_outcome, sorted_by_rank, Fixture, Group, GroupFormat, GroupPlacement,
    LadderError, MatchId, MatchIdParseError, MatchRecord, MatchScore, MatchScoreMap, Player, PlayerId,
    RoundOutcome, RoundSnapshot, ScoreOutcome,
};
