//! Game settings.
//!
//! Settings are chosen during setup and stay fixed for the rest of the
//! game. `SettingsPatch` carries a partial update; fields left as `None`
//! keep their current value.
//!
//! Updating settings never validates ranges. `Settings::validate` is run
//! when a game is dealt, and UIs can call it up front to grey out the
//! start button.

use serde::{Deserialize, Serialize};

/// Fewest players a game can be dealt for.
pub const MIN_PLAYERS: usize = 4;

/// Default day discussion length in seconds.
pub const DEFAULT_DISCUSSION_SECS: u32 = 180;

/// Reasons a roster and settings cannot be dealt.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("need at least {min} players, got {0}", min = MIN_PLAYERS)]
    TooFewPlayers(usize),

    #[error("at least one mafia is required")]
    NoMafia,

    #[error("{mafia} mafia must be fewer than half of {players} players")]
    TooManyMafia { mafia: u32, players: usize },

    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration.
///
/// `allow_self_vote`, `first_day_kill` and `mafia_know_each_other` are
/// stored and round-tripped but no rule consults them yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mafia_count: u32,
    pub has_doctor: bool,
    pub has_police: bool,
    pub discussion_time_secs: u32,
    pub allow_self_vote: bool,
    pub first_day_kill: bool,
    pub mafia_know_each_other: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mafia_count: 1,
            has_doctor: true,
            has_police: true,
            discussion_time_secs: DEFAULT_DISCUSSION_SECS,
            allow_self_vote: false,
            first_day_kill: true,
            mafia_know_each_other: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the number of mafia.
    #[must_use]
    pub fn with_mafia_count(mut self, count: u32) -> Self {
        self.mafia_count = count;
        self
    }

    /// Include or drop the doctor.
    #[must_use]
    pub fn with_doctor(mut self, enabled: bool) -> Self {
        self.has_doctor = enabled;
        self
    }

    /// Include or drop the police.
    #[must_use]
    pub fn with_police(mut self, enabled: bool) -> Self {
        self.has_police = enabled;
        self
    }

    /// Set the day discussion length.
    #[must_use]
    pub fn with_discussion_time(mut self, secs: u32) -> Self {
        self.discussion_time_secs = secs;
        self
    }

    /// Number of doctor and police slots.
    #[must_use]
    pub fn special_role_count(&self) -> usize {
        usize::from(self.has_doctor) + usize::from(self.has_police)
    }

    /// Check these settings can be dealt to `player_count` players.
    ///
    /// The mafia must start as a strict minority; at parity the game
    /// would already be decided at the deal.
    pub fn validate(&self, player_count: usize) -> Result<(), SettingsError> {
        if player_count < MIN_PLAYERS {
            return Err(SettingsError::TooFewPlayers(player_count));
        }
        if self.mafia_count == 0 {
            return Err(SettingsError::NoMafia);
        }
        if (self.mafia_count as usize).saturating_mul(2) >= player_count {
            return Err(SettingsError::TooManyMafia {
                mafia: self.mafia_count,
                players: player_count,
            });
        }
        Ok(())
    }

    /// Return a copy with every field present in `patch` overwritten.
    #[must_use]
    pub fn merge(&self, patch: &SettingsPatch) -> Self {
        Self {
            mafia_count: patch.mafia_count.unwrap_or(self.mafia_count),
            has_doctor: patch.has_doctor.unwrap_or(self.has_doctor),
            has_police: patch.has_police.unwrap_or(self.has_police),
            discussion_time_secs: patch.discussion_time_secs.unwrap_or(self.discussion_time_secs),
            allow_self_vote: patch.allow_self_vote.unwrap_or(self.allow_self_vote),
            first_day_kill: patch.first_day_kill.unwrap_or(self.first_day_kill),
            mafia_know_each_other: patch
                .mafia_know_each_other
                .unwrap_or(self.mafia_know_each_other),
        }
    }
}

/// Partial settings update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mafia_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_doctor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_police: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_time_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_self_vote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day_kill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mafia_know_each_other: Option<bool>,
}

impl SettingsPatch {
    /// Patch only the mafia count.
    #[must_use]
    pub fn mafia_count(count: u32) -> Self {
        Self {
            mafia_count: Some(count),
            ..Self::default()
        }
    }

    /// Patch the doctor and police toggles.
    #[must_use]
    pub fn specials(has_doctor: bool, has_police: bool) -> Self {
        Self {
            has_doctor: Some(has_doctor),
            has_police: Some(has_police),
            ..Self::default()
        }
    }
}
