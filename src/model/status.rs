//! Player status and follower count

use serde::{Deserialize, Serialize};

use crate::core::types::clamp_score;

/// Additive change to player status
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusShift {
    pub comm: f64,
    pub credibility: f64,
    pub energy: f64,
}

impl StatusShift {
    pub const fn new(comm: f64, credibility: f64, energy: f64) -> Self {
        Self {
            comm,
            credibility,
            energy,
        }
    }
}

/// Communication skill, credibility and energy, each bounded to [0, 100].
/// Energy at 0 means the player is incapacitated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    comm: f64,
    credibility: f64,
    energy: f64,
}

impl PlayerStatus {
    pub fn new(comm: f64, credibility: f64, energy: f64) -> Self {
        Self {
            comm: clamp_score(comm),
            credibility: clamp_score(credibility),
            energy: clamp_score(energy),
        }
    }

    pub fn comm(&self) -> f64 {
        self.comm
    }

    pub fn credibility(&self) -> f64 {
        self.credibility
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn set_comm(&mut self, value: f64) {
        self.comm = clamp_score(value);
    }

    pub fn set_credibility(&mut self, value: f64) {
        self.credibility = clamp_score(value);
    }

    pub fn set_energy(&mut self, value: f64) {
        self.energy = clamp_score(value);
    }

    pub fn apply(&mut self, shift: StatusShift) {
        self.set_comm(self.comm + shift.comm);
        self.set_credibility(self.credibility + shift.credibility);
        self.set_energy(self.energy + shift.energy);
    }

    pub fn in_bounds(&self) -> bool {
        [self.comm, self.credibility, self.energy]
            .iter()
            .all(|v| (0.0..=100.0).contains(v))
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self::new(50.0, 50.0, 80.0)
    }
}

/// SNS follower count, floored at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Followers(u32);

impl Followers {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// Add a signed delta; the result never drops below zero
    pub fn apply(&mut self, delta: i64) {
        let next = (self.0 as i64 + delta).clamp(0, u32::MAX as i64);
        self.0 = next as u32;
    }
}
