//! The per-day tick
//!
//! Order matters: entries are prepended to the newest-first timeline in the
//! order the steps run, and recorded transcripts depend on it.
//!
//! 1. Opinion drift on every axis
//! 2. Daily news roll (dated for the incoming day)
//! 3. Calendar advance; a month end announces an election
//! 4. "New day" entry
//! 5. Life event roll (skipped once the game has ended)
//! 6. Win/loss evaluation (skipped once the game has ended)
//! 7. Action points refilled

use crate::core::calendar::DayRollover;
use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::game::state::GameState;
use crate::model::OpinionShift;
use crate::simulation::outcome::{evaluate, transition, GameOutcome};
use crate::tables::{roll_news, LifeEvent, NewsItem};
use crate::timeline::{Category, Delta, Impact, TimelineEvent};

/// Maximum drift per axis per day
pub const DAILY_DRIFT: f64 = 1.0;

/// What a day tick did, for callers that want more than the new state
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub drift: OpinionShift,
    pub news: Option<&'static NewsItem>,
    pub rollover: DayRollover,
    pub life_event: Option<LifeEvent>,
    pub outcome: GameOutcome,
}

/// Advance `state` by one day. Callers check the preconditions (no action
/// points left, no terminal flag).
pub fn advance_day(state: &mut GameState, tuning: &Tuning, rng: &mut dyn RandomSource) -> DayReport {
    // 1. drift
    let drift = OpinionShift::new(
        rng.uniform(-DAILY_DRIFT, DAILY_DRIFT),
        rng.uniform(-DAILY_DRIFT, DAILY_DRIFT),
        rng.uniform(-DAILY_DRIFT, DAILY_DRIFT),
    );
    state.opinion.apply(drift);
    tracing::debug!(
        "Daily drift: cons {:+.2}, lib {:+.2}, apa {:+.2}",
        drift.conservative,
        drift.liberal,
        drift.apathetic
    );

    // 2. daily news, dated for the day about to start
    let mut incoming = state.calendar;
    incoming.advance(tuning.days_per_month);
    let incoming_label = incoming.label();
    let news = roll_news(
        &mut state.opinion,
        &mut state.events,
        &incoming_label,
        tuning.news_daily_prob,
        rng,
    );

    // 3. calendar
    let rollover = state.calendar.advance(tuning.days_per_month);
    if let DayRollover::MonthEnded { month, year } = rollover {
        state.election.announce(month, year);
        tracing::info!("Month {} of year {} ended, election announced", month, year);
        state.events.push(
            TimelineEvent::new(
                state.date_label(),
                Category::System,
                "Election announced",
                Impact::Neutral,
            )
            .with_description(format!(
                "An election has been called for month {}, year {}. Join in and head to the polls.",
                month, year
            )),
        );
    }

    // 4. new day
    state.events.push(TimelineEvent::new(
        state.date_label(),
        Category::System,
        format!(
            "A new day has begun (month {}, day {})",
            state.calendar.month, state.calendar.day
        ),
        Impact::Neutral,
    ));

    // 5. life event
    let mut life_event = None;
    if !state.is_terminal() && rng.chance(tuning.life_event_prob) {
        let event = LifeEvent::roll(rng);
        state.status.apply(event.status_shift());
        state.opinion.apply(event.opinion_shift());
        state.events.push(
            TimelineEvent::new(state.date_label(), Category::System, event.title(), event.impact())
                .with_description(event.description())
                .with_delta(Delta::from_shift(event.opinion_shift())),
        );
        tracing::debug!("Life event: {:?}", event);
        life_event = Some(event);
    }

    // 6. win/loss
    let mut outcome = GameOutcome::InProgress;
    if !state.is_terminal() {
        let before = state.flags;
        let after = evaluate(before, &state.status, &state.opinion, state.followers, tuning);
        outcome = transition(before, after);
        match outcome {
            GameOutcome::GameOver => {
                tracing::info!("Game over on {}", state.date_label());
                state.events.push(
                    TimelineEvent::new(state.date_label(), Category::System, "Game over", Impact::Bad)
                        .with_description("The conditions were not met and your activities came to an end."),
                );
            }
            GameOutcome::Cleared => {
                tracing::info!("Game cleared on {}", state.date_label());
                state.events.push(
                    TimelineEvent::new(state.date_label(), Category::System, "Cleared!", Impact::Good)
                        .with_description("You are ready to run for the city council."),
                );
            }
            GameOutcome::InProgress => {}
        }
        state.flags = after;
    }

    // 7. refill, regardless of flags
    state.action_points = tuning.action_points_per_day;

    DayReport {
        drift,
        news,
        rollover,
        life_event,
        outcome,
    }
}
