//! The game state machine.
//!
//! `transition` is a total function: every `(state, action)` pair yields a
//! state. Input the rules cannot act on degrades to "nothing happens":
//!
//! - `Action::Unknown` returns an equal state
//! - unknown player ids are treated as "no player"
//! - `StartGame` with settings that fail `Settings::validate` is ignored
//! - once a winner is decided, only `NewGame` has any effect
//!
//! Preconditions left to the UI driver: roster edits only during setup,
//! one ballot per voter, voters in `alive_players()` order, and showing
//! the police result only to the police.

use super::elimination::{check_winner, eliminate};
use super::night::{investigate, resolve_night};
use super::roles::assign_roles;
use crate::core::{
    Action, GameRng, GameState, NightActions, NightStep, Phase, Player, RoundHistory, Vote,
};

/// Compute the state after `action`.
///
/// `rng` is only drawn from when roles are dealt.
#[must_use]
pub fn transition(state: &GameState, action: &Action, rng: &mut GameRng) -> GameState {
    if state.winner.is_some() && *action != Action::NewGame {
        log::warn!("Ignoring {}: game already decided", action.name());
        return state.clone();
    }

    log::debug!("{} in {:?} (round {})", action.name(), state.phase, state.round);

    let mut next = state.clone();

    match action {
        Action::AddPlayer { name } => {
            let id = next.alloc_player_id();
            next.players.push_back(Player::new(id, name.as_str()));
        }
        Action::RemovePlayer { id } => {
            next.players = state.players.iter().filter(|p| p.id != *id).cloned().collect();
        }
        Action::RenamePlayer { id, name } => {
            if let Some(player) = next.player_mut(*id) {
                player.name = name.clone();
            }
        }
        Action::UpdateSettings { settings } => {
            next.settings = state.settings.merge(settings);
        }
        Action::StartGame => start_game(&mut next, rng),
        Action::NextReveal => {
            if next.reveal_index + 1 < next.players.len() {
                next.reveal_index += 1;
            } else {
                next.phase = Phase::Night;
                next.night_step = NightStep::Intro;
            }
        }
        Action::StartNight => {
            next.phase = Phase::Night;
            next.night_step = NightStep::Intro;
            next.night_actions = NightActions::default();
        }
        Action::NextNightStep => {
            next.night_step = state.night_step.next(&state.settings);
        }
        Action::SetMafiaTarget { target } => {
            next.night_actions.mafia_target = Some(*target);
        }
        Action::SetDoctorSave { target } => {
            next.night_actions.doctor_save = Some(*target);
        }
        Action::SetPoliceCheck { target } => {
            next.night_actions.police_check = Some(*target);
            next.night_actions.police_check_result = Some(investigate(&state.players, *target));
        }
        Action::StartDay => start_day(&mut next),
        Action::StartVote => {
            next.phase = Phase::Vote;
            next.votes.clear();
            next.voter_index = 0;
        }
        Action::CastVote { voter, target } => {
            next.votes.push_back(Vote {
                voter: *voter,
                target: *target,
            });
            if next.votes.len() < next.alive_count() {
                next.voter_index += 1;
            }
        }
        Action::ProcessVoteResult => process_vote_result(&mut next),
        Action::NextRound => {
            next.phase = Phase::Night;
            next.night_step = NightStep::Intro;
            next.round += 1;
            next.night_actions = NightActions::default();
            next.votes.clear();
        }
        Action::NewGame => {
            log::info!("New game with {} returning players", state.players.len());
            next = state.fresh_with_roster();
        }
        Action::Unknown => {}
    }

    next
}

fn start_game(next: &mut GameState, rng: &mut GameRng) {
    if let Err(err) = next.settings.validate(next.players.len()) {
        log::warn!("Refusing to start game: {}", err);
        return;
    }

    let mut deal = rng.deal_stream();
    assign_roles(&mut next.players, &next.settings, &mut deal);
    next.phase = Phase::Reveal;
    next.reveal_index = 0;

    log::info!(
        "Dealt roles to {} players ({} mafia)",
        next.players.len(),
        next.settings.mafia_count
    );
}

fn start_day(next: &mut GameState) {
    let outcome = resolve_night(&mut next.players, &next.night_actions);

    match (outcome.killed, outcome.saved) {
        (Some(id), _) => log::info!("Round {}: {} was killed in the night", next.round, id),
        (None, true) => log::info!("Round {}: the doctor saved the mafia's target", next.round),
        (None, false) => log::info!("Round {}: nobody was attacked", next.round),
    }

    let record = RoundHistory::new(next.round, outcome.killed, outcome.saved);
    next.history.push_back(record);
    settle(next);
}

fn process_vote_result(next: &mut GameState) {
    let voted_out = match next.tally().outcome().eliminated() {
        Some(id) if eliminate(&mut next.players, id) => Some(id),
        _ => None,
    };

    match voted_out {
        Some(id) => log::info!("Round {}: {} was voted out", next.round, id),
        None => log::info!("Round {}: nobody was voted out", next.round),
    }

    if let Some(last) = next.history.back_mut() {
        last.voted_out = voted_out;
    }
    settle(next);
}

/// Re-evaluate the winner after an elimination and pick the next phase.
fn settle(next: &mut GameState) {
    next.winner = check_winner(&next.players);
    next.phase = match next.winner {
        Some(team) => {
            log::info!("The {} win after round {}", team, next.round);
            Phase::Result
        }
        None => Phase::Day,
    };
}
