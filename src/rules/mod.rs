//! Game rules: the pure transition function and the pieces it is built
//! from.
//!
//! - `roles`: role pool construction and dealing
//! - `night`: night step sequencing and kill/save resolution
//! - `vote`: ballot tally and plurality outcome
//! - `elimination`: removing players and detecting a winner
//! - `engine`: `transition`, which dispatches an `Action` over a `GameState`

pub mod roles;
pub mod night;
pub mod vote;
pub mod elimination;
pub mod engine;

pub use roles::{assign_roles, role_pool};
pub use night::{investigate, resolve_night, NightOutcome};
pub use vote::{Tally, VoteOutcome};
pub use elimination::{check_winner, eliminate};
pub use engine::transition;
