//! Save and resume a session.
//!
//! A `GameSnapshot` holds the full `GameState` and the RNG position, so a
//! restored session deals exactly what the original would have. JSON is
//! the human-readable form; bincode is the compact one. Where the bytes
//! are stored is up to the caller.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, GameState};

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary error: {0}")]
    Binary(#[from] bincode::Error),
}

/// A captured session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub rng: GameRngState,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
