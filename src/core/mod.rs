pub mod calendar;
pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use calendar::{Calendar, DayRollover};
pub use config::{Difficulty, Tuning};
pub use error::{Result, SimError};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
