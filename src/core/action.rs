//! The action vocabulary dispatched by a UI driver.
//!
//! Actions are serde-tagged by `type` so a front end can send them as
//! JSON, e.g. `{"type": "CAST_VOTE", "voter": 3, "target": 1}`. A tag the
//! engine does not know deserializes to `Action::Unknown`, which every
//! state ignores.

use serde::{Deserialize, Serialize};

use super::config::SettingsPatch;
use super::player::PlayerId;

/// A single user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Register a player (setup).
    AddPlayer { name: String },
    /// Drop a player from the roster (setup).
    RemovePlayer { id: PlayerId },
    /// Change a player's display name.
    RenamePlayer { id: PlayerId, name: String },
    /// Merge a partial settings update.
    UpdateSettings { settings: SettingsPatch },
    /// Deal roles and begin the private reveal.
    StartGame,
    /// Hand the device to the next player in the reveal.
    NextReveal,
    /// Enter the night with a clean slate.
    StartNight,
    /// Wake the next role in the night sequence.
    NextNightStep,
    SetMafiaTarget { target: PlayerId },
    SetDoctorSave { target: PlayerId },
    SetPoliceCheck { target: PlayerId },
    /// Resolve the night and announce the result.
    StartDay,
    /// Open the voting round.
    StartVote,
    CastVote { voter: PlayerId, target: PlayerId },
    /// Tally the votes and eliminate the plurality target.
    ProcessVoteResult,
    /// Move from the day into the next night.
    NextRound,
    /// Reset for another game with the same roster.
    NewGame,
    /// Any action type this engine does not recognise.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "AddPlayer",
            Action::RemovePlayer { .. } => "RemovePlayer",
            Action::RenamePlayer { .. } => "RenamePlayer",
            Action::UpdateSettings { .. } => "UpdateSettings",
            Action::StartGame => "StartGame",
            Action::NextReveal => "NextReveal",
            Action::StartNight => "StartNight",
            Action::NextNightStep => "NextNightStep",
            Action::SetMafiaTarget { .. } => "SetMafiaTarget",
            Action::SetDoctorSave { .. } => "SetDoctorSave",
            Action::SetPoliceCheck { .. } => "SetPoliceCheck",
            Action::StartDay => "StartDay",
            Action::StartVote => "StartVote",
            Action::CastVote { .. } => "CastVote",
            Action::ProcessVoteResult => "ProcessVoteResult",
            Action::NextRound => "NextRound",
            Action::NewGame => "NewGame",
            Action::Unknown => "Unknown",
        }
    }

    /// Convenience constructor for `AddPlayer`.
    pub fn add_player(name: impl Into<String>) -> Self {
        Action::AddPlayer { name: name.into() }
    }

    /// Convenience constructor for `CastVote`.
    #[must_use]
    pub fn vote(voter: PlayerId, target: PlayerId) -> Self {
        Action::CastVote { voter, target }
    }
}
