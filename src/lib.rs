//! Ballot Days - a small political life simulation
//!
//! The player spends a few action points each day voting, talking with
//! friends and posting online, watches public opinion drift, and stands in
//! the election called at every month end. Every command is a pure
//! transition over [`game::GameState`]; [`game::GameSession`] wraps that
//! with a random source and a snapshot store.

pub mod actions;
pub mod core;
pub mod election;
pub mod game;
pub mod model;
pub mod persistence;
pub mod simulation;
pub mod tables;
pub mod timeline;
