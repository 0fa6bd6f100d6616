//! A running game: current state plus the tuning, random source and store
//! it is played against.

use crate::actions::ActionKind;
use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::core::types::FriendId;
use crate::game::command::{apply_command, Command, CommandOutcome};
use crate::game::state::GameState;
use crate::persistence::{load_snapshot, save_snapshot, SnapshotStore};
use crate::timeline::Filter;

pub struct GameSession<S: SnapshotStore, R: RandomSource> {
    state: GameState,
    tuning: Tuning,
    rng: R,
    store: S,
}

impl<S: SnapshotStore, R: RandomSource> GameSession<S, R> {
    /// Start a fresh game. Nothing is written until the first command.
    pub fn new(tuning: Tuning, mut rng: R, store: S) -> Self {
        let state = GameState::new_game(&tuning, &mut rng);
        Self {
            state,
            tuning,
            rng,
            store,
        }
    }

    /// Continue the saved game if there is one, otherwise start fresh
    pub fn resume(tuning: Tuning, rng: R, store: S) -> Self {
        let mut session = Self::new(tuning, rng, store);
        session.load();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `command`; an accepted command replaces the state and is
    /// auto-saved.
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let outcome = apply_command(&self.state, &command, &self.tuning, &mut self.rng);
        if outcome.accepted() {
            self.state = outcome.state.clone();
            self.save();
        }
        outcome
    }

    pub fn perform_action(&mut self, kind: ActionKind) -> &GameState {
        self.dispatch(Command::PerformAction(kind));
        &self.state
    }

    pub fn advance_day(&mut self) -> &GameState {
        self.dispatch(Command::AdvanceDay);
        &self.state
    }

    pub fn election_join(&mut self) -> &GameState {
        self.dispatch(Command::ElectionJoin);
        &self.state
    }

    pub fn election_leave(&mut self) -> &GameState {
        self.dispatch(Command::ElectionLeave);
        &self.state
    }

    pub fn election_open_voting_and_compute(&mut self) -> &GameState {
        self.dispatch(Command::ElectionOpenVotingAndCompute);
        &self.state
    }

    pub fn set_filter(&mut self, filter: Filter) -> &GameState {
        self.dispatch(Command::SetFilter(filter));
        &self.state
    }

    pub fn select_talk_target(&mut self, id: FriendId) -> &GameState {
        self.dispatch(Command::SelectTalkTarget(id));
        &self.state
    }

    /// Reinitialize every entity to its start-of-game distribution
    pub fn reset(&mut self) -> &GameState {
        self.dispatch(Command::Reset);
        &self.state
    }

    /// Best-effort write of the current state. Failures are logged and
    /// otherwise ignored.
    pub fn save(&mut self) {
        match save_snapshot(&mut self.store, &self.state) {
            Ok(()) => tracing::debug!("Saved snapshot on {}", self.state.date_label()),
            Err(e) => tracing::warn!("Save failed: {}", e),
        }
    }

    /// Replace the current state with the saved one.
    ///
    /// Returns `None` and leaves the state untouched when there is no save,
    /// the record is corrupt, or the store is unavailable.
    pub fn load(&mut self) -> Option<&GameState> {
        match load_snapshot(&self.store) {
            Ok(Some(state)) => {
                tracing::info!("Loaded snapshot from {}", state.date_label());
                self.state = state;
                Some(&self.state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Load failed, keeping current game: {}", e);
                None
            }
        }
    }
}
