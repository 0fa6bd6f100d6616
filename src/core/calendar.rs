//! Calendar system for day/month/year tracking
//!
//! The game moves one day at a time. Running past the last day of a month
//! rolls over to day 1 of the next month, which is when elections are
//! announced.

use serde::{Deserialize, Serialize};

/// What happened when the calendar moved forward one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRollover {
    /// Still inside the same month
    SameMonth,
    /// The month ended; carries the month and year that just finished
    MonthEnded { month: u32, year: u32 },
}

/// Calendar position. `day` is 1-based within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl Calendar {
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }

    /// Advance one day, wrapping the month after `days_per_month` and the
    /// year after month 12.
    pub fn advance(&mut self, days_per_month: u32) -> DayRollover {
        let next_day = self.day + 1;
        if next_day > days_per_month {
            let ended = DayRollover::MonthEnded {
                month: self.month,
                year: self.year,
            };
            self.day = 1;
            if self.month >= 12 {
                self.month = 1;
                self.year += 1;
            } else {
                self.month += 1;
            }
            ended
        } else {
            self.day = next_day;
            DayRollover::SameMonth
        }
    }

    /// Label used on timeline entries
    pub fn label(&self) -> String {
        format!("Y{} M{} D{}", self.year, self.month, self.day)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}
