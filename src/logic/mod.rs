//! Ranking engine: grouping, group results, ladder reconciliation and manual corrections.

mod manual;
mod partition;
mod placement;
mod reconcile;
mod round;

pub use manual::{reorder_player_ranks, validate_ranks};
pub use partition::{group_sizes, partition_groups};
pub use placement::{group_fixtures, match_records, resolve_placement};
pub use reconcile::reconcile_rankings;
pub use round::{complete_round, start_round};
