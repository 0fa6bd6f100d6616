//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for timeline entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for friends (NPCs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FriendId(pub Uuid);

impl FriendId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FriendId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower bound of every tracked score
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of every tracked score
pub const SCORE_MAX: f64 = 100.0;

/// Bound `value` to `[lo, hi]`
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Bound a score to `[0, 100]`
pub fn clamp_score(value: f64) -> f64 {
    clamp(value, SCORE_MIN, SCORE_MAX)
}

/// Round to one decimal place, for log deltas
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
