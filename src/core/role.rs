//! Roles and the two competing teams.

use serde::{Deserialize, Serialize};

/// A secret role dealt at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Eliminates one player per night.
    Mafia,
    /// May negate one night elimination per round.
    Doctor,
    /// Learns whether one player is mafia per round.
    Police,
    /// No night action.
    Citizen,
}

impl Role {
    /// All roles, in dealing order.
    pub const ALL: [Role; 4] = [Role::Mafia, Role::Doctor, Role::Police, Role::Citizen];

    #[must_use]
    pub const fn is_mafia(self) -> bool {
        matches!(self, Role::Mafia)
    }

    /// The team this role plays for. Doctor and police side with citizens.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Role::Mafia => Team::Mafia,
            Role::Doctor | Role::Police | Role::Citizen => Team::Citizen,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Mafia => "mafia",
            Role::Doctor => "doctor",
            Role::Police => "police",
            Role::Citizen => "citizen",
        };
        f.write_str(name)
    }
}

/// A winning side. `GameState::winner` is `None` while the game continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Mafia,
    Citizen,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Mafia => f.write_str("mafia"),
            Team::Citizen => f.write_str("citizens"),
        }
    }
}
