//! Game state and the command surface

pub mod command;
pub mod session;
pub mod state;

pub use command::{apply_command, Command, CommandOutcome, Rejection};
pub use session::GameSession;
pub use state::GameState;
