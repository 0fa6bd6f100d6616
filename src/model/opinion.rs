//! Public opinion: three independent axes, each bounded to [0, 100]

use serde::{Deserialize, Serialize};

use crate::core::types::clamp_score;

/// Additive change to the three opinion axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpinionShift {
    pub conservative: f64,
    pub liberal: f64,
    pub apathetic: f64,
}

impl OpinionShift {
    pub const fn new(conservative: f64, liberal: f64, apathetic: f64) -> Self {
        Self {
            conservative,
            liberal,
            apathetic,
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            conservative: self.conservative * factor,
            liberal: self.liberal * factor,
            apathetic: self.apathetic * factor,
        }
    }

    /// Same magnitudes, opposite direction
    pub fn inverted(&self) -> Self {
        self.scaled(-1.0)
    }
}

/// Conservative / liberal / apathetic leaning.
///
/// The axes are not a distribution: they do not sum to anything. Every
/// write is clamped, so a value outside [0, 100] is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PublicOpinion {
    conservative: f64,
    liberal: f64,
    apathetic: f64,
}

impl PublicOpinion {
    pub fn new(conservative: f64, liberal: f64, apathetic: f64) -> Self {
        Self {
            conservative: clamp_score(conservative),
            liberal: clamp_score(liberal),
            apathetic: clamp_score(apathetic),
        }
    }

    pub fn conservative(&self) -> f64 {
        self.conservative
    }

    pub fn liberal(&self) -> f64 {
        self.liberal
    }

    pub fn apathetic(&self) -> f64 {
        self.apathetic
    }

    pub fn set_conservative(&mut self, value: f64) {
        self.conservative = clamp_score(value);
    }

    pub fn set_liberal(&mut self, value: f64) {
        self.liberal = clamp_score(value);
    }

    pub fn set_apathetic(&mut self, value: f64) {
        self.apathetic = clamp_score(value);
    }

    /// Clamped add on every axis
    pub fn apply(&mut self, shift: OpinionShift) {
        self.set_conservative(self.conservative + shift.conservative);
        self.set_liberal(self.liberal + shift.liberal);
        self.set_apathetic(self.apathetic + shift.apathetic);
    }

    pub fn in_bounds(&self) -> bool {
        [self.conservative, self.liberal, self.apathetic]
            .iter()
            .all(|v| (0.0..=100.0).contains(v))
    }
}

impl Default for PublicOpinion {
    fn default() -> Self {
        Self::new(70.0, 70.0, 60.0)
    }
}
