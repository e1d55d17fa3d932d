//! Data structures for the ladder: players, groups, match scores, round results.

mod error;
mod group;
mod player;
mod round;
mod score;

pub use error::LadderError;
pub use group::{Group, GroupFormat, GroupPlacement};
pub use player::{present_players, sorted_by_rank, Player, PlayerId};
pub(crate) use player::renumber;
pub use round::{Fixture, MatchRecord, RoundOutcome, RoundSnapshot};
pub use score::{score_outcome, MatchId, MatchIdParseError, MatchScore, MatchScoreMap, ScoreOutcome};
