pub mod day;
pub mod outcome;

pub use day::{advance_day, DayReport};
pub use outcome::{evaluate, GameOutcome, TerminalFlags};
