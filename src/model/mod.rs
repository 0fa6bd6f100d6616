//! Opinion / status model
//!
//! Numeric state containers. Every field write goes through a clamp, so
//! scores stay in [0, 100] and followers never go negative.

pub mod friends;
pub mod opinion;
pub mod status;

pub use friends::{Friend, Roster};
pub use opinion::{OpinionShift, PublicOpinion};
pub use status::{Followers, PlayerStatus, StatusShift};
