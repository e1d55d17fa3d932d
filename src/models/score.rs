//! Match ids and entered match scores.
//!
//! Match ids are shared with stored rounds and the export layer, so their text form
//! (`g<group>-r<round>-m<match>` for brackets, `g<group>-m<match>` otherwise) must not change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifies one match of one group within a round.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchId {
    /// Match of a 4-player bracket: `g<group>-r<round>-m<game>`.
    Bracket { group: u32, round: u32, game: u32 },
    /// Match of a 3- or 2-player group: `g<group>-m<game>`.
    Single { group: u32, game: u32 },
}

impl MatchId {
    pub fn bracket(group: u32, round: u32, game: u32) -> Self {
        MatchId::Bracket { group, round, game }
    }

    pub fn single(group: u32, game: u32) -> Self {
        MatchId::Single { group, game }
    }

    /// 1-based group number this match belongs to.
    pub fn group(&self) -> u32 {
        match *self {
            MatchId::Bracket { group, .. } | MatchId::Single { group, .. } => group,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Bracket { group, round, game } => write!(f, "g{}-r{}-m{}", group, round, game),
            MatchId::Single { group, game } => write!(f, "g{}-m{}", group, game),
        }
    }
}

/// A string that is not a valid match id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchIdParseError {
    pub input: String,
}

impl fmt::Display for MatchIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid match id {:?} (expected g<N>-r<R>-m<M> or g<N>-m<M>)",
            self.input
        )
    }
}

impl std::error::Error for MatchIdParseError {}

/// Parse one `<prefix><number>` segment; numbers are plain digits, at least 1, no leading zero.
fn segment(part: &str, prefix: char) -> Option<u32> {
    let digits = part.strip_prefix(prefix)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for MatchId {
    type Err = MatchIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MatchIdParseError { input: s.to_string() };
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [g, r, m] => Ok(MatchId::Bracket {
                group: segment(g, 'g').ok_or_else(err)?,
                round: segment(r, 'r').ok_or_else(err)?,
                game: segment(m, 'm').ok_or_else(err)?,
            }),
            [g, m] => Ok(MatchId::Single {
                group: segment(g, 'g').ok_or_else(err)?,
                game: segment(m, 'm').ok_or_else(err)?,
            }),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for MatchId {
    type Error = MatchIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.to_string()
    }
}

/// Scores as entered for one match. Either side may be blank while the round is in progress.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score1: String,
    pub score2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// What an entered score pair amounts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScoreOutcome {
    /// At least one side is blank (or no score was entered at all).
    Unset,
    /// At least one side is not a finite number.
    Invalid,
    Played { score1: f64, score2: f64 },
}

impl ScoreOutcome {
    /// Scores of a played match, `None` for unset or invalid entries.
    pub fn played(self) -> Option<(f64, f64)> {
        match self {
            ScoreOutcome::Played { score1, score2 } => Some((score1, score2)),
            ScoreOutcome::Unset | ScoreOutcome::Invalid => None,
        }
    }
}

impl MatchScore {
    pub fn new(score1: impl Into<String>, score2: impl Into<String>) -> Self {
        Self {
            score1: score1.into(),
            score2: score2.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn outcome(&self) -> ScoreOutcome {
        let (s1, s2) = (self.score1.trim(), self.score2.trim());
        if s1.is_empty() || s2.is_empty() {
            return ScoreOutcome::Unset;
        }
        match (s1.parse::<f64>(), s2.parse::<f64>()) {
            (Ok(score1), Ok(score2)) if score1.is_finite() && score2.is_finite() => {
                ScoreOutcome::Played { score1, score2 }
            }
            _ => ScoreOutcome::Invalid,
        }
    }
}

/// Entered scores for a round, keyed by match id.
pub type MatchScoreMap = HashMap<MatchId, MatchScore>;

/// Outcome of `id` in `scores`; a missing entry counts as unset.
pub fn score_outcome(scores: &MatchScoreMap, id: MatchId) -> ScoreOutcome {
    scores
        .get(&id)
        .map(MatchScore::outcome)
        .unwrap_or(ScoreOutcome::Unset)
}
