//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Opaque identifier handed out by `GameState` when a player registers.
//! Ids are never reused within a session, even across `NewGame`.
//!
//! ## Player
//!
//! A roster entry: name, dealt role and whether the player is still alive.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Unique, immutable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered player.
///
/// `role` is `None` until the game starts. `alive` only ever goes from
/// true to false during a game; dealing a new game resets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Option<Role>,
    pub alive: bool,
}

impl Player {
    /// Create a living player with no role yet.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: None,
            alive: true,
        }
    }

    /// Set the role (builder style, mostly for tests and fixtures).
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Check if this player was dealt the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// Check if this player is mafia.
    #[must_use]
    pub fn is_mafia(&self) -> bool {
        self.has_role(Role::Mafia)
    }

    /// Clear the dealt role and revive, keeping id and name.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            role: None,
            alive: true,
        }
    }
}
