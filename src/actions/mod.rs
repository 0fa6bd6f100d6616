//! Player actions

pub mod catalog;
pub mod resolver;

pub use catalog::ActionKind;
pub use resolver::{influence_multiplier, resolve_action};
