//! The full game snapshot

use serde::{Deserialize, Serialize};

use crate::core::calendar::Calendar;
use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::election::ElectionState;
use crate::model::{Followers, PlayerStatus, PublicOpinion, Roster};
use crate::simulation::outcome::TerminalFlags;
use crate::timeline::{Category, Filter, Impact, Timeline, TimelineEvent};

/// Everything the core tracks. This is also the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub events: Timeline,
    pub friends: Roster,
    pub followers: Followers,
    pub status: PlayerStatus,
    pub opinion: PublicOpinion,
    pub filter: Filter,
    #[serde(flatten)]
    pub calendar: Calendar,
    pub action_points: u32,
    pub election: ElectionState,
    #[serde(flatten)]
    pub flags: TerminalFlags,
}

impl GameState {
    /// Start-of-game state. Friend leanings and the follower seed are drawn
    /// from `rng`; everything else is fixed.
    pub fn new_game(tuning: &Tuning, rng: &mut dyn RandomSource) -> Self {
        let friends = Roster::generate(rng);
        let followers = Followers::new(rng.range_inclusive(80, 150) as u32);
        let calendar = Calendar::default();

        let mut events = Timeline::new();
        events.push(
            TimelineEvent::new(
                calendar.label(),
                Category::System,
                "One month until the election. Your actions move public opinion.",
                Impact::Neutral,
            )
            .with_description("Pick an action to get started."),
        );

        Self {
            events,
            friends,
            followers,
            status: PlayerStatus::default(),
            opinion: PublicOpinion::default(),
            filter: Filter::All,
            calendar,
            action_points: tuning.action_points_per_day,
            election: ElectionState::new(),
            flags: TerminalFlags::default(),
        }
    }

    /// Label for entries logged now
    pub fn date_label(&self) -> String {
        self.calendar.label()
    }

    pub fn is_terminal(&self) -> bool {
        self.flags.is_terminal()
    }

    /// True when every tracked score is within its bounds
    pub fn in_bounds(&self) -> bool {
        self.opinion.in_bounds()
            && self.status.in_bounds()
            && self.friends.iter().all(|f| f.leaning().in_bounds())
    }
}
