//! Snapshot encoding
//!
//! The whole [`GameState`] is stored as one JSON document under a fixed,
//! versioned key. There is no migration: a record that fails to decode is
//! treated as missing.

use crate::core::error::Result;
use crate::game::state::GameState;
use crate::persistence::store::SnapshotStore;

/// Storage key of the single saved game
pub const SNAPSHOT_KEY: &str = "ballot-days/snapshot/v1";

pub fn encode(state: &GameState) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(state)?)
}

pub fn decode(bytes: &[u8]) -> Result<GameState> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write `state` under [`SNAPSHOT_KEY`]
pub fn save_snapshot(store: &mut dyn SnapshotStore, state: &GameState) -> Result<()> {
    let bytes = encode(state)?;
    store.put(SNAPSHOT_KEY, &bytes)
}

/// Read the saved game.
///
/// `Ok(None)` when nothing was saved; decode failures are errors so the
/// caller can log them before treating them the same way.
pub fn load_snapshot(store: &dyn SnapshotStore) -> Result<Option<GameState>> {
    match store.get(SNAPSHOT_KEY)? {
        Some(bytes) => decode(&bytes).map(Some),
        None => Ok(None),
    }
}
