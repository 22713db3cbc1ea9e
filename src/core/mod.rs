//! Core engine types: players, roles, settings, actions, state, RNG.
//!
//! This module holds plain data. The rules that move a game from one
//! state to the next live in `crate::rules`.

pub mod player;
pub mod role;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId};
pub use role::{Role, Team};
pub use rng::{DealRng, GameRng, GameRngState};
pub use config::{Settings, SettingsError, SettingsPatch, MIN_PLAYERS};
pub use action::Action;
pub use state::{GameState, NightActions, NightStep, Phase, PoliceReport, RoundHistory, Vote};
