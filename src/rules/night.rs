//! Night sequencing and resolution.
//!
//! The night wakes roles in a fixed order:
//!
//! ```text
//! Intro -> Mafia -> Doctor -> Police -> Done
//! ```
//!
//! Doctor and police steps are skipped when the role is disabled in the
//! settings. A dead doctor or police is still called so the table cannot
//! tell from the narration that they are gone.

use im::Vector;

use super::elimination::eliminate;
use crate::core::{NightActions, NightStep, Player, PlayerId, Role, Settings};

impl NightStep {
    /// The step after this one under the given settings. `Done` is terminal.
    #[must_use]
    pub fn next(self, settings: &Settings) -> NightStep {
        let after_mafia = || {
            if settings.has_doctor {
                NightStep::Doctor
            } else if settings.has_police {
                NightStep::Police
            } else {
                NightStep::Done
            }
        };

        match self {
            NightStep::Intro => NightStep::Mafia,
            NightStep::Mafia => after_mafia(),
            NightStep::Doctor if settings.has_police => NightStep::Police,
            NightStep::Doctor | NightStep::Police | NightStep::Done => NightStep::Done,
        }
    }

    /// The role that acts during this step, if any.
    #[must_use]
    pub fn acting_role(self) -> Option<Role> {
        match self {
            NightStep::Mafia => Some(Role::Mafia),
            NightStep::Doctor => Some(Role::Doctor),
            NightStep::Police => Some(Role::Police),
            NightStep::Intro | NightStep::Done => None,
        }
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        self == NightStep::Done
    }
}

/// Result of resolving one night.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NightOutcome {
    pub killed: Option<PlayerId>,
    pub saved: bool,
}

/// Whether `target` is mafia. Unknown ids investigate as innocent.
#[must_use]
pub fn investigate(players: &Vector<Player>, target: PlayerId) -> bool {
    players.iter().any(|p| p.id == target && p.is_mafia())
}

/// Apply the mafia kill unless the doctor protected the same player.
///
/// No target, an unknown target or an already-dead target kills nobody.
pub fn resolve_night(players: &mut Vector<Player>, actions: &NightActions) -> NightOutcome {
    let Some(target) = actions.mafia_target else {
        return NightOutcome::default();
    };

    if actions.doctor_save == Some(target) {
        return NightOutcome {
            killed: None,
            saved: true,
        };
    }

    NightOutcome {
        killed: eliminate(players, target).then_some(target),
        saved: false,
    }
}
