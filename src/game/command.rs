//! Command surface
//!
//! Every command is a pure function of the prior state: the state is
//! cloned, the clone mutated, and the new state returned together with the
//! timeline entries the command produced. A rejected command returns the
//! prior state untouched.

use serde::{Deserialize, Serialize};

use crate::actions::{resolve_action, ActionKind};
use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::core::types::FriendId;
use crate::election::{compute_result, rebound, ElectionInputs, ElectionPhase};
use crate::game::state::GameState;
use crate::simulation::advance_day;
use crate::timeline::{Category, Delta, Filter, Impact, TimelineEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    PerformAction(ActionKind),
    AdvanceDay,
    ElectionJoin,
    ElectionLeave,
    ElectionOpenVotingAndCompute,
    SetFilter(Filter),
    SelectTalkTarget(FriendId),
    Reset,
}

/// Why a command was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GameEnded,
    NoActionPoints,
    ActionPointsRemaining,
    NoTalkTarget,
    ElectionIdle,
    NoElectionToCount,
    UnknownFriend,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::GameEnded => "the game has ended",
            Rejection::NoActionPoints => "no action points left today",
            Rejection::ActionPointsRemaining => "action points remain today",
            Rejection::NoTalkTarget => "no friend to talk to",
            Rejection::ElectionIdle => "no election has been announced",
            Rejection::NoElectionToCount => "no election is open for voting",
            Rejection::UnknownFriend => "friend not found or already selected",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub state: GameState,
    /// Entries this command added, newest first
    pub events: Vec<TimelineEvent>,
    pub rejection: Option<Rejection>,
}

impl CommandOutcome {
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    fn rejected(prior: &GameState, rejection: Rejection) -> Self {
        tracing::warn!("Command rejected: {}", rejection.reason());
        Self {
            state: prior.clone(),
            events: Vec::new(),
            rejection: Some(rejection),
        }
    }
}

/// Apply `command` to `prior`
pub fn apply_command(
    prior: &GameState,
    command: &Command,
    tuning: &Tuning,
    rng: &mut dyn RandomSource,
) -> CommandOutcome {
    if let Err(rejection) = check(prior, command) {
        return CommandOutcome::rejected(prior, rejection);
    }

    if let Command::Reset = command {
        let state = GameState::new_game(tuning, rng);
        tracing::info!("Game reset");
        return CommandOutcome {
            events: state.events.iter().cloned().collect(),
            state,
            rejection: None,
        };
    }

    let mut state = prior.clone();
    let logged_before = state.events.len();

    let rejection = match *command {
        Command::PerformAction(kind) => {
            if resolve_action(&mut state, kind, tuning, rng) {
                None
            } else {
                Some(Rejection::NoTalkTarget)
            }
        }
        Command::AdvanceDay => {
            advance_day(&mut state, tuning, rng);
            None
        }
        Command::ElectionJoin => {
            state.election.join();
            None
        }
        Command::ElectionLeave => {
            state.election.leave();
            None
        }
        Command::ElectionOpenVotingAndCompute => {
            hold_election(&mut state, tuning, rng);
            None
        }
        Command::SetFilter(filter) => {
            state.filter = filter;
            None
        }
        Command::SelectTalkTarget(id) => {
            if state.friends.bring_to_front(id) {
                None
            } else {
                Some(Rejection::UnknownFriend)
            }
        }
        Command::Reset => None,
    };

    if let Some(rejection) = rejection {
        return CommandOutcome::rejected(prior, rejection);
    }

    let added = state.events.len() - logged_before;
    CommandOutcome {
        events: state.events.latest(added).cloned().collect(),
        state,
        rejection: None,
    }
}

/// Preconditions, checked before anything is cloned
fn check(state: &GameState, command: &Command) -> Result<(), Rejection> {
    match command {
        Command::PerformAction(kind) => {
            if state.is_terminal() {
                return Err(Rejection::GameEnded);
            }
            if state.action_points < kind.cost() {
                return Err(Rejection::NoActionPoints);
            }
            if *kind == ActionKind::Talk && state.friends.is_empty() {
                return Err(Rejection::NoTalkTarget);
            }
        }
        Command::AdvanceDay => {
            if state.is_terminal() {
                return Err(Rejection::GameEnded);
            }
            if state.action_points > 0 {
                return Err(Rejection::ActionPointsRemaining);
            }
        }
        Command::ElectionJoin | Command::ElectionLeave => {
            if state.is_terminal() {
                return Err(Rejection::GameEnded);
            }
            if state.election.phase == ElectionPhase::Idle {
                return Err(Rejection::ElectionIdle);
            }
        }
        Command::ElectionOpenVotingAndCompute => {
            if state.is_terminal() {
                return Err(Rejection::GameEnded);
            }
            if !matches!(
                state.election.phase,
                ElectionPhase::Announced | ElectionPhase::Voting
            ) {
                return Err(Rejection::NoElectionToCount);
            }
        }
        Command::SelectTalkTarget(id) => {
            if state.friends.get(*id).is_none() {
                return Err(Rejection::UnknownFriend);
            }
        }
        Command::SetFilter(_) | Command::Reset => {}
    }
    Ok(())
}

/// Open voting (if still announced), count, record and apply the rebound
fn hold_election(state: &mut GameState, tuning: &Tuning, rng: &mut dyn RandomSource) {
    state.election.open_voting();

    let inputs = ElectionInputs::gather(&state.opinion, &state.status, state.followers);
    let tally = compute_result(&inputs, tuning, rng);
    state.election.record_result(tally.result);

    let result = tally.result;
    let shift = rebound(result.won);
    state.opinion.apply(shift);

    tracing::info!(
        "Election counted: turnout {}%, vote share {}%, won {}",
        result.turnout,
        result.vote_share,
        result.won
    );

    let (title, impact) = if result.won {
        ("Election won", Impact::Good)
    } else {
        ("Election lost", Impact::Bad)
    };
    state.events.push(
        TimelineEvent::new(state.date_label(), Category::System, title, impact)
            .with_description(format!(
                "Turnout {}% / vote share {}%",
                result.turnout, result.vote_share
            ))
            .with_delta(Delta::from_shift(shift)),
    );
}
