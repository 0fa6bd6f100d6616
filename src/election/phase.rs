//! Election phase state machine
//!
//! `Idle -> Announced -> Voting -> Result`, with `Result -> Announced` when
//! the next election is called. Participation can be toggled in any phase
//! except `Idle`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionPhase {
    #[default]
    Idle,
    Announced,
    Voting,
    /// Declared but never entered by any transition. Kept so snapshots that
    /// contain it still load.
    Counting,
    Result,
}

/// Outcome of the last completed election
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionResult {
    /// Turnout percent, rounded
    pub turnout: u32,
    /// Vote share percent, rounded
    pub vote_share: u32,
    /// Decided on the unrounded vote share
    pub won: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionState {
    pub phase: ElectionPhase,
    pub participating: bool,
    pub month: u32,
    pub year: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_result: Option<ElectionResult>,
}

impl ElectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call an election for `month`/`year`.
    ///
    /// Moves to `Announced` from any phase. `last_result` is kept until a
    /// new result replaces it.
    pub fn announce(&mut self, month: u32, year: u32) {
        self.phase = ElectionPhase::Announced;
        self.month = month;
        self.year = year;
    }

    /// Returns false in `Idle`
    pub fn join(&mut self) -> bool {
        if self.phase == ElectionPhase::Idle {
            return false;
        }
        self.participating = true;
        true
    }

    /// Returns false in `Idle`
    pub fn leave(&mut self) -> bool {
        if self.phase == ElectionPhase::Idle {
            return false;
        }
        self.participating = false;
        true
    }

    /// `Announced -> Voting`. Participation is not checked.
    pub fn open_voting(&mut self) -> bool {
        if self.phase != ElectionPhase::Announced {
            return false;
        }
        self.phase = ElectionPhase::Voting;
        true
    }

    /// `Voting -> Result`, recording `result`
    pub fn record_result(&mut self, result: ElectionResult) -> bool {
        if self.phase != ElectionPhase::Voting {
            return false;
        }
        self.phase = ElectionPhase::Result;
        self.last_result = Some(result);
        true
    }

    /// Back to idle with no participation and no result
    pub fn reset(&mut self) {
        self.phase = ElectionPhase::Idle;
        self.participating = false;
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ElectionResult {
        ElectionResult {
            turnout: 40,
            vote_share: 30,
            won: false,
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut e = ElectionState::new();
        assert_eq!(e.phase, ElectionPhase::Idle);

        e.announce(3, 1);
        assert_eq!(e.phase, ElectionPhase::Announced);
        assert_eq!((e.month, e.year), (3, 1));

        assert!(e.join());
        assert!(e.open_voting());
        assert_eq!(e.phase, ElectionPhase::Voting);

        assert!(e.record_result(sample_result()));
        assert_eq!(e.phase, ElectionPhase::Result);
        assert_eq!(e.last_result, Some(sample_result()));
    }

    #[test]
    fn test_join_leave_rejected_when_idle() {
        let mut e = ElectionState::new();
        assert!(!e.join());
        assert!(!e.leave());
        assert!(!e.participating);
    }

    #[test]
    fn test_open_voting_only_from_announced() {
        let mut e = ElectionState::new();
        assert!(!e.open_voting());
        e.announce(1, 1);
        assert!(e.open_voting());
        assert!(!e.open_voting());
    }

    #[test]
    fn test_open_voting_ignores_participation() {
        let mut e = ElectionState::new();
        e.announce(1, 1);
        assert!(!e.participating);
        assert!(e.open_voting());
    }

    #[test]
    fn test_announce_keeps_last_result() {
        let mut e = ElectionState::new();
        e.announce(1, 1);
        e.open_voting();
        e.record_result(sample_result());

        e.announce(2, 1);
        assert_eq!(e.phase, ElectionPhase::Announced);
        assert!(e.last_result.is_some());
    }

    #[test]
    fn test_reset() {
        let mut e = ElectionState::new();
        e.announce(1, 1);
        e.join();
        e.reset();
        assert_eq!(e.phase, ElectionPhase::Idle);
        assert!(!e.participating);
        assert!(e.last_result.is_none());
    }

    #[test]
    fn test_counting_phase_deserializes() {
        let e: ElectionState = serde_json::from_str(
            r#"{"phase":"counting","participating":true,"month":4,"year":1}"#,
        )
        .unwrap();
        assert_eq!(e.phase, ElectionPhase::Counting);
        assert!(e.last_result.is_none());
    }
}
