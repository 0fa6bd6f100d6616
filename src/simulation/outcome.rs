//! Win/loss evaluation

use serde::{Deserialize, Serialize};

use crate::core::config::Tuning;
use crate::model::opinion::PublicOpinion;
use crate::model::status::{Followers, PlayerStatus};

/// Sticky end-of-game markers. Only a full reset clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalFlags {
    pub is_game_over: bool,
    pub is_cleared: bool,
}

impl TerminalFlags {
    pub fn is_terminal(&self) -> bool {
        self.is_game_over || self.is_cleared
    }
}

/// What a fresh evaluation concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    GameOver,
    Cleared,
}

/// Game-over condition: apathy too high or energy spent
pub fn is_lost(status: &PlayerStatus, opinion: &PublicOpinion, tuning: &Tuning) -> bool {
    opinion.apathetic() >= tuning.game_over.apathetic || status.energy() <= tuning.game_over.energy
}

/// Clear condition: every threshold met at once
pub fn is_won(
    status: &PlayerStatus,
    opinion: &PublicOpinion,
    followers: Followers,
    tuning: &Tuning,
) -> bool {
    let t = &tuning.clear;
    status.credibility() >= t.credibility
        && status.comm() >= t.comm
        && followers.count() >= t.followers
        && opinion.apathetic() <= t.apathetic
}

/// Evaluate the end conditions.
///
/// Returns `flags` unchanged if either is already set. Game-over is checked
/// first and wins over a simultaneous clear.
pub fn evaluate(
    flags: TerminalFlags,
    status: &PlayerStatus,
    opinion: &PublicOpinion,
    followers: Followers,
    tuning: &Tuning,
) -> TerminalFlags {
    if flags.is_terminal() {
        return flags;
    }
    if is_lost(status, opinion, tuning) {
        return TerminalFlags {
            is_game_over: true,
            ..flags
        };
    }
    if is_won(status, opinion, followers, tuning) {
        return TerminalFlags {
            is_cleared: true,
            ..flags
        };
    }
    flags
}

/// Classify the change between two flag sets
pub fn transition(before: TerminalFlags, after: TerminalFlags) -> GameOutcome {
    if !before.is_game_over && after.is_game_over {
        GameOutcome::GameOver
    } else if !before.is_cleared && after.is_cleared {
        GameOutcome::Cleared
    } else {
        GameOutcome::InProgress
    }
}
