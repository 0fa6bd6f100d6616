//! Life events: one-off narrative changes rolled at the end of a day

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;
use crate::model::opinion::OpinionShift;
use crate::model::status::StatusShift;
use crate::timeline::Impact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeEvent {
    School,
    Job,
    Marriage,
    Baby,
    Move,
}

impl LifeEvent {
    pub const ALL: [LifeEvent; 5] = [
        LifeEvent::School,
        LifeEvent::Job,
        LifeEvent::Marriage,
        LifeEvent::Baby,
        LifeEvent::Move,
    ];

    /// Pick one uniformly
    pub fn roll(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.pick(Self::ALL.len())]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::School => "Went back to school",
            Self::Job => "Started a new job",
            Self::Marriage => "Got married",
            Self::Baby => "A child was born",
            Self::Move => "Moved house",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::School => "New studies broadened your outlook.",
            Self::Job => "Working life brings new responsibilities.",
            Self::Marriage => "You started walking the road together as a family.",
            Self::Baby => "Life got a lot livelier.",
            Self::Move => "You joined a new local community.",
        }
    }

    pub fn status_shift(&self) -> StatusShift {
        match self {
            Self::School => StatusShift::new(3.0, 0.0, -2.0),
            Self::Job => StatusShift::new(0.0, 3.0, -3.0),
            Self::Marriage => StatusShift::new(1.0, 2.0, 0.0),
            Self::Baby => StatusShift::new(0.0, 2.0, -4.0),
            Self::Move => StatusShift::new(2.0, 0.0, -1.0),
        }
    }

    pub fn opinion_shift(&self) -> OpinionShift {
        match self {
            Self::School => OpinionShift::new(0.0, 2.0, -1.0),
            Self::Job => OpinionShift::new(2.0, 0.0, -1.0),
            Self::Marriage => OpinionShift::new(1.0, 0.0, 0.0),
            Self::Baby => OpinionShift::new(1.0, 0.0, -1.0),
            Self::Move => OpinionShift::new(0.0, 1.0, 0.0),
        }
    }

    pub fn impact(&self) -> Impact {
        match self {
            Self::School | Self::Job | Self::Baby => Impact::Good,
            Self::Marriage | Self::Move => Impact::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;

    #[test]
    fn test_roll_is_uniform_over_table() {
        let mut rng = ScriptedRandom::new([0.0, 0.2, 0.4, 0.6, 0.8]);
        let rolled: Vec<_> = (0..5).map(|_| LifeEvent::roll(&mut rng)).collect();
        assert_eq!(rolled, LifeEvent::ALL);
    }

    #[test]
    fn test_every_event_costs_or_keeps_energy() {
        for ev in LifeEvent::ALL {
            assert!(ev.status_shift().energy <= 0.0, "{:?}", ev);
        }
    }

    #[test]
    fn test_no_life_event_is_bad() {
        assert!(LifeEvent::ALL.iter().all(|e| e.impact() != Impact::Bad));
    }
}
