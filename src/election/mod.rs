//! Election subsystem
//!
//! An election is announced at every month end. The player may join or
//! leave, then open voting; the result depends on public opinion, status
//! and follower count, plus a small turnout noise.

pub mod phase;
pub mod result;

pub use phase::{ElectionPhase, ElectionResult, ElectionState};
pub use result::{compute_result, rebound, tally, ElectionInputs, Tally};
