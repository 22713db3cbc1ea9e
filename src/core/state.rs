//! Game state: the single aggregate the state machine replaces on every
//! transition.
//!
//! ## GameState
//!
//! - Roster, settings, phase and night sub-step
//! - Reveal and voter cursors
//! - Night scratch (`NightActions`), the current votes and round history
//! - Round counter and winner
//!
//! Collections are `im` vectors, so handing out a fresh state per action
//! costs a pointer copy rather than a deep clone.
//!
//! The read-only queries here are what a UI driver renders from. Derived
//! orderings such as the voter sequence are computed on demand, never
//! stored.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::Settings;
use super::player::{Player, PlayerId};
use super::role::{Role, Team};

/// Top-level game stage. UIs render one screen per phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Reveal,
    Night,
    Day,
    Vote,
    Result,
}

/// Sub-stage of the night, waking one role at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NightStep {
    #[default]
    Intro,
    Mafia,
    Doctor,
    Police,
    Done,
}

/// Per-night scratch record. Cleared whenever a night begins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NightActions {
    pub mafia_target: Option<PlayerId>,
    pub doctor_save: Option<PlayerId>,
    pub police_check: Option<PlayerId>,
    /// Frozen at the moment of the check.
    pub police_check_result: Option<bool>,
}

/// One ballot in the current voting round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub voter: PlayerId,
    pub target: PlayerId,
}

/// Outcome of one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundHistory {
    pub round_no: u32,
    pub night_killed: Option<PlayerId>,
    /// True when the doctor protected the mafia's target.
    pub saved: bool,
    /// Attached after the vote; `None` until then or if nobody went out.
    pub voted_out: Option<PlayerId>,
}

impl RoundHistory {
    #[must_use]
    pub fn new(round_no: u32, night_killed: Option<PlayerId>, saved: bool) -> Self {
        Self {
            round_no,
            night_killed,
            saved,
            voted_out: None,
        }
    }
}

/// What the police learned tonight. Only for the police's own screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoliceReport {
    pub target: PlayerId,
    pub is_mafia: bool,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vector<Player>,
    pub settings: Settings,
    pub phase: Phase,
    /// Index into `players` of the player currently seeing their role.
    pub reveal_index: usize,
    pub night_actions: NightActions,
    /// Ballots in casting order.
    pub votes: Vector<Vote>,
    pub history: Vector<RoundHistory>,
    /// Current round (starts at 1).
    pub round: u32,
    /// Index into `alive_players()` of the next voter.
    pub voter_index: usize,
    pub winner: Option<Team>,
    pub night_step: NightStep,

    /// Next player id to allocate.
    next_player_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: Vector::new(),
            settings: Settings::default(),
            phase: Phase::Setup,
            reveal_index: 0,
            night_actions: NightActions::default(),
            votes: Vector::new(),
            history: Vector::new(),
            round: 1,
            voter_index: 0,
            winner: None,
            night_step: NightStep::Intro,
            next_player_id: 0,
        }
    }
}

impl GameState {
    /// Create the initial setup state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a setup state with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // === Entity Management ===

    /// Allocate a new player ID.
    pub fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    /// Reset to the initial state, keeping the roster with roles cleared.
    ///
    /// The id counter carries over so later registrations stay unique.
    #[must_use]
    pub fn fresh_with_roster(&self) -> Self {
        Self {
            players: self.players.iter().map(Player::reset).collect(),
            next_player_id: self.next_player_id,
            ..Self::default()
        }
    }

    // === Roster Queries ===

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable lookup, for use on a state that is being built.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Living players in roster order. This is also the voting order.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Number of players (alive or not) dealt the given role.
    #[must_use]
    pub fn count_role(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.has_role(role)).count()
    }

    // === Phase Queries ===

    /// The player whose role is on screen during the reveal.
    #[must_use]
    pub fn revealing_player(&self) -> Option<&Player> {
        self.players.get(self.reveal_index)
    }

    /// The living player expected to vote next.
    #[must_use]
    pub fn current_voter(&self) -> Option<&Player> {
        self.alive_players().nth(self.voter_index)
    }

    /// True once every living player has a ballot in.
    #[must_use]
    pub fn all_votes_cast(&self) -> bool {
        self.votes.len() >= self.alive_count()
    }

    /// The most recent round record.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundHistory> {
        self.history.back()
    }

    /// Tonight's police result, if the police is still alive to know it.
    ///
    /// The UI must still restrict this to the police's own screen.
    #[must_use]
    pub fn police_report(&self) -> Option<PoliceReport> {
        let target = self.night_actions.police_check?;
        let is_mafia = self.night_actions.police_check_result?;
        let police_alive = self.alive_players().any(|p| p.has_role(Role::Police));
        police_alive.then_some(PoliceReport { target, is_mafia })
    }

    // === Target Rules ===

    /// Players the role woken at `step` may pick, in roster order.
    ///
    /// The mafia cannot pick one of their own and the police cannot check
    /// themselves. The doctor may protect anyone alive, self included.
    pub fn night_targets(&self, step: NightStep) -> impl Iterator<Item = &Player> {
        self.alive_players().filter(move |p| match step {
            NightStep::Mafia => !p.is_mafia(),
            NightStep::Doctor => true,
            NightStep::Police => !p.has_role(Role::Police),
            NightStep::Intro | NightStep::Done => false,
        })
    }

    /// Living players `voter` may vote for: everyone but themselves.
    pub fn vote_targets(&self, voter: PlayerId) -> impl Iterator<Item = &Player> {
        self.alive_players().filter(move |p| p.id != voter)
    }

    /// The other mafia, shown to a mafia player during the reveal.
    ///
    /// Empty for anyone who is not mafia.
    pub fn mafia_partners(&self, id: PlayerId) -> impl Iterator<Item = &Player> {
        let is_mafia = self.player(id).is_some_and(Player::is_mafia);
        self.players
            .iter()
            .filter(move |p| is_mafia && p.id != id && p.is_mafia())
    }

    /// True once a side has won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
