//! Persistence adapter
//!
//! The core never touches storage directly; a [`SnapshotStore`] is handed
//! in by whoever owns the session.

pub mod snapshot;
pub mod store;

pub use snapshot::{decode, encode, load_snapshot, save_snapshot, SNAPSHOT_KEY};
pub use store::{FileStore, MemoryStore, SnapshotStore};
