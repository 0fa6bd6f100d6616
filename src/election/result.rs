//! Election outcome model

use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::core::types::clamp;
use crate::election::phase::ElectionResult;
use crate::model::opinion::{OpinionShift, PublicOpinion};
use crate::model::status::{Followers, PlayerStatus};

/// Everything the outcome depends on besides the noise draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectionInputs {
    pub conservative: f64,
    pub liberal: f64,
    pub apathetic: f64,
    pub credibility: f64,
    pub comm: f64,
    pub followers: u32,
}

impl ElectionInputs {
    pub fn gather(opinion: &PublicOpinion, status: &PlayerStatus, followers: Followers) -> Self {
        Self {
            conservative: opinion.conservative(),
            liberal: opinion.liberal(),
            apathetic: opinion.apathetic(),
            credibility: status.credibility(),
            comm: status.comm(),
            followers: followers.count(),
        }
    }

    /// Support estimate before turnout is factored in
    pub fn approval_like(&self) -> f64 {
        (self.conservative + self.liberal) / 2.0 + self.credibility * 0.2 + self.comm * 0.1
            + (self.followers as f64 * 0.01).min(10.0)
            - self.apathetic * 0.2
    }
}

/// Unrounded figures alongside the rounded result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tally {
    pub turnout: f64,
    pub vote_share: f64,
    pub result: ElectionResult,
}

/// Turnout for a given noise value, clamped to [0, 100]
pub fn turnout(apathetic: f64, noise: f64) -> f64 {
    clamp(100.0 - apathetic + noise, 0.0, 100.0)
}

/// Compute the outcome from fixed inputs and a noise value.
///
/// `won` compares the unrounded vote share with the threshold.
pub fn tally(inputs: &ElectionInputs, noise: f64, win_threshold: f64) -> Tally {
    let turnout = turnout(inputs.apathetic, noise);
    let vote_share = clamp(
        inputs.approval_like() / 100.0 * (turnout / 100.0) * 100.0,
        0.0,
        100.0,
    );
    let won = vote_share >= win_threshold;

    Tally {
        turnout,
        vote_share,
        result: ElectionResult {
            turnout: turnout.round() as u32,
            vote_share: vote_share.round() as u32,
            won,
        },
    }
}

/// Draw turnout noise in `[-turnout_noise, +turnout_noise]` and tally
pub fn compute_result(inputs: &ElectionInputs, tuning: &Tuning, rng: &mut dyn RandomSource) -> Tally {
    let noise = rng.uniform(-tuning.turnout_noise, tuning.turnout_noise);
    tally(inputs, noise, tuning.elect_win_threshold)
}

/// Opinion change after an election: a win energizes, a loss disheartens
pub fn rebound(won: bool) -> OpinionShift {
    let shift = OpinionShift::new(1.0, 1.0, -2.0);
    if won {
        shift
    } else {
        shift.inverted()
    }
}
