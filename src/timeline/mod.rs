//! Timeline: the log of every state change the player sees

pub mod event;
pub mod log;

pub use event::{Category, Delta, Impact, TimelineEvent};
pub use log::{Filter, Timeline};
