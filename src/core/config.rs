//! Tuning constants with documented purpose
//!
//! Every probability, threshold and coefficient the simulation reads is
//! collected here. Values are read-only once a game is running.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{Result, SimError};

/// Difficulty slot used to pick the SNS outrage rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Probability that an SNS post backfires, per difficulty slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutrageRates {
    pub easy: f64,
    pub normal: f64,
    pub hard: f64,
}

impl Default for OutrageRates {
    fn default() -> Self {
        Self {
            easy: 0.10,
            normal: 0.15,
            hard: 0.20,
        }
    }
}

impl OutrageRates {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

/// All four must hold at once for the game to be cleared
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearThresholds {
    /// Minimum credibility (inclusive)
    pub credibility: f64,
    /// Minimum communication skill (inclusive)
    pub comm: f64,
    /// Minimum follower count (inclusive)
    pub followers: u32,
    /// Maximum public apathy (inclusive)
    pub apathetic: f64,
}

impl Default for ClearThresholds {
    fn default() -> Self {
        Self {
            credibility: 80.0,
            comm: 70.0,
            followers: 1000,
            apathetic: 40.0,
        }
    }
}

/// Either one ends the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOverThresholds {
    /// Public apathy at or above this loses the game
    pub apathetic: f64,
    /// Energy at or below this loses the game
    pub energy: f64,
}

impl Default for GameOverThresholds {
    fn default() -> Self {
        Self {
            apathetic: 90.0,
            energy: 0.0,
        }
    }
}

/// Tuning for the whole simulation
///
/// Loaded once (defaults or a TOML override) and passed by reference into
/// every algorithm. Nothing mutates it during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === CALENDAR ===
    /// Days in a month; the day after the last one rolls the month over
    /// and announces an election.
    pub days_per_month: u32,

    /// Action points granted at the start of every day.
    pub action_points_per_day: u32,

    // === SNS ===
    /// Difficulty slot that selects the outrage rate.
    pub difficulty: Difficulty,

    /// Chance a post backfires, per difficulty.
    pub outrage_rates: OutrageRates,

    /// Followers scale post influence by `1 + followers * coeff`.
    ///
    /// At 0.0005, 1000 followers give a 1.5x multiplier.
    pub sns_influence_coeff: f64,

    /// Upper bound on the post influence multiplier.
    pub sns_influence_cap: f64,

    // === TALK ===
    /// Fraction of a friend's swing that leaks into public opinion.
    pub talk_spread: f64,

    // === RANDOM EVENTS ===
    /// Chance of a life event at the end of each day.
    pub life_event_prob: f64,

    /// Chance of a news item during the day tick.
    pub news_daily_prob: f64,

    /// Chance of a news item after each player action.
    ///
    /// Kept separate from `news_daily_prob` so the action path and the
    /// day tick can be tuned independently.
    pub post_action_news_prob: f64,

    // === END CONDITIONS ===
    pub clear: ClearThresholds,
    pub game_over: GameOverThresholds,

    // === ELECTION ===
    /// Vote share (percent, unrounded) needed to win.
    pub elect_win_threshold: f64,

    /// Turnout is perturbed by a uniform draw in `[-noise, +noise]`.
    pub turnout_noise: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            days_per_month: 30,
            action_points_per_day: 3,

            difficulty: Difficulty::Normal,
            outrage_rates: OutrageRates::default(),
            sns_influence_coeff: 0.0005,
            sns_influence_cap: 2.5,

            talk_spread: 0.2,

            life_event_prob: 0.10,
            news_daily_prob: 0.90,
            post_action_news_prob: 0.30,

            clear: ClearThresholds::default(),
            game_over: GameOverThresholds::default(),

            elect_win_threshold: 50.0,
            turnout_noise: 5.0,
        }
    }
}

impl Tuning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outrage probability for the configured difficulty
    pub fn outrage_prob(&self) -> f64 {
        self.outrage_rates.for_difficulty(self.difficulty)
    }

    /// Parse a TOML override. Keys that are absent keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tuning: Tuning = toml::from_str(content)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a TOML tuning file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.days_per_month == 0 {
            return Err(SimError::InvalidConfig("days_per_month must be at least 1".into()));
        }
        if self.action_points_per_day == 0 {
            return Err(SimError::InvalidConfig(
                "action_points_per_day must be at least 1".into(),
            ));
        }

        let probabilities = [
            ("outrage_rates.easy", self.outrage_rates.easy),
            ("outrage_rates.normal", self.outrage_rates.normal),
            ("outrage_rates.hard", self.outrage_rates.hard),
            ("life_event_prob", self.life_event_prob),
            ("news_daily_prob", self.news_daily_prob),
            ("post_action_news_prob", self.post_action_news_prob),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1]",
                    name, p
                )));
            }
        }

        if self.sns_influence_cap < 1.0 {
            return Err(SimError::InvalidConfig(format!(
                "sns_influence_cap ({}) should be >= 1.0",
                self.sns_influence_cap
            )));
        }
        if self.turnout_noise < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "turnout_noise ({}) must not be negative",
                self.turnout_noise
            )));
        }

        Ok(())
    }
}
