//! # mafia-engine
//!
//! A deterministic state machine for in-person Mafia party games played
//! on a single shared device.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `transition(&state, &action, &mut rng)` returns a
//!    new `GameState`; nothing is mutated in place where a caller can see it.
//!
//! 2. **Total function**: every action is accepted. Input the rules cannot
//!    act on degrades to "nothing happens" rather than an error.
//!
//! 3. **Injected randomness**: role dealing draws from a seedable `GameRng`,
//!    so a seed and an action log replay a game exactly.
//!
//! ## Flow
//!
//! ```text
//! Setup -> Reveal -> Night -> Day -> Vote -> Day -> (NextRound) Night ...
//!                               \                \
//!                                +-> Result <-----+   (a side has won)
//! ```
//!
//! ## Modules
//!
//! - `core`: players, roles, settings, actions, state, RNG
//! - `rules`: the transition function, night resolution, vote tally, win check
//! - `game`: `Game`, an owned session holding state and RNG
//! - `snapshot`: save/resume of a session
//!
//! ## Example
//!
//! ```
//! use mafia_engine::{Action, GameBuilder, Phase};
//!
//! let mut game = GameBuilder::new()
//!     .players(["Ann", "Ben", "Cat", "Dan", "Eve"])
//!     .seed(7)
//!     .build();
//!
//! game.dispatch(&Action::StartGame);
//! assert_eq!(game.state().phase, Phase::Reveal);
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Action, DealRng, GameRng, GameRngState, GameState, NightActions, NightStep, Phase, Player,
    PlayerId, PoliceReport, Role, RoundHistory, Settings, SettingsError, SettingsPatch, Team, Vote,
    MIN_PLAYERS,
};

pub use crate::rules::{check_winner, transition, NightOutcome, Tally, VoteOutcome};

pub use crate::game::{Game, GameBuilder};

pub use crate::snapshot::{GameSnapshot, SnapshotError};
