//! Night phase tests: step sequencing, kill/save resolution and the
//! police investigation.

use mafia_engine::{
    Action, Game, GameRng, GameState, NightActions, NightStep, Phase, Player, Role, Settings,
};

/// A game already in the night, with roles fixed by seat.
fn seated(roles: &[Role], settings: Settings) -> Game {
    let mut state = GameState::with_settings(settings);
    for (i, &role) in roles.iter().enumerate() {
        let id = state.alloc_player_id();
        state.players.push_back(Player::new(id, format!("Seat {}", i)).with_role(role));
    }
    state.phase = Phase::Night;
    Game::from_parts(state, GameRng::new(0))
}

fn steps(game: &mut Game) -> Vec<NightStep> {
    let mut seen = vec![game.state().night_step];
    for _ in 0..6 {
        game.dispatch(&Action::NextNightStep);
        seen.push(game.state().night_step);
    }
    seen.dedup();
    seen
}

const TABLE: [Role; 5] = [Role::Mafia, Role::Doctor, Role::Police, Role::Citizen, Role::Citizen];

/// Test the full night order with both specials enabled.
#[test]
fn test_full_night_order() {
    let mut game = seated(&TABLE, Settings::default());
    assert_eq!(
        steps(&mut game),
        vec![
            NightStep::Intro,
            NightStep::Mafia,
            NightStep::Doctor,
            NightStep::Police,
            NightStep::Done,
        ]
    );
}

/// Test that disabling the doctor goes straight from mafia to police.
#[test]
fn test_no_doctor() {
    let mut game = seated(&TABLE, Settings::default().with_doctor(false));
    assert_eq!(
        steps(&mut game),
        vec![NightStep::Intro, NightStep::Mafia, NightStep::Police, NightStep::Done]
    );
}

/// Test that disabling both specials goes from mafia to done.
#[test]
fn test_no_specials() {
    let mut game = seated(&TABLE, Settings::default().with_doctor(false).with_police(false));
    assert_eq!(steps(&mut game), vec![NightStep::Intro, NightStep::Mafia, NightStep::Done]);
}

/// Test that a dead doctor is still called, so narration leaks nothing.
#[test]
fn test_dead_doctor_still_called() {
    let mut game = seated(&TABLE, Settings::default());
    let mut state = game.state().clone();
    state.players[1].alive = false;
    game = Game::from_parts(state, GameRng::new(0));

    assert!(steps(&mut game).contains(&NightStep::Doctor));
}

/// Test that the doctor saving the mafia's target prevents the death.
#[test]
fn test_doctor_save() {
    let mut game = seated(&TABLE, Settings::default());
    let target = game.state().players[3].id;

    game.dispatch(&Action::SetMafiaTarget { target });
    game.dispatch(&Action::SetDoctorSave { target });
    let before: Vec<_> = game.state().players.iter().map(|p| p.alive).collect();
    game.dispatch(&Action::StartDay);

    let state = game.state();
    let after: Vec<_> = state.players.iter().map(|p| p.alive).collect();
    assert_eq!(before, after);

    let round = state.last_round().copied().unwrap();
    assert!(round.saved);
    assert_eq!(round.night_killed, None);
    assert_eq!(round.voted_out, None);
    assert_eq!(state.phase, Phase::Day);
}

/// Test that only the mafia's target dies when the doctor guesses wrong.
#[test]
fn test_doctor_misses() {
    let mut game = seated(&TABLE, Settings::default());
    let target = game.state().players[3].id;
    let guarded = game.state().players[4].id;

    game.dispatch(&Action::SetMafiaTarget { target });
    game.dispatch(&Action::SetDoctorSave { target: guarded });
    game.dispatch(&Action::StartDay);

    let state = game.state();
    let dead: Vec<_> = state.players.iter().filter(|p| !p.alive).map(|p| p.id).collect();
    assert_eq!(dead, vec![target]);
    assert_eq!(state.history.len(), 1);
    assert!(!state.history[0].saved);
    assert_eq!(state.history[0].night_killed, Some(target));
}

/// Test that a night with no mafia choice is quiet.
#[test]
fn test_no_target_no_kill() {
    let mut game = seated(&TABLE, Settings::default());
    game.dispatch(&Action::StartDay);

    let state = game.state();
    assert_eq!(state.alive_count(), 5);
    assert_eq!(state.last_round().map(|r| (r.night_killed, r.saved)), Some((None, false)));
}

/// Test the police result and its visibility rules.
#[test]
fn test_police_report() {
    let mut game = seated(&TABLE, Settings::default());
    let mafia = game.state().players[0].id;
    let police = game.state().players[2].id;

    game.dispatch(&Action::SetPoliceCheck { target: mafia });
    let report = game.state().police_report().unwrap();
    assert_eq!(report.target, mafia);
    assert!(report.is_mafia);

    // The police dies the same night: nobody is left to know.
    game.dispatch(&Action::SetMafiaTarget { target: police });
    game.dispatch(&Action::StartDay);
    assert_eq!(game.state().night_actions.police_check_result, Some(true));
    assert!(game.state().police_report().is_none());
}

/// Test that StartNight wipes last night's scratch.
#[test]
fn test_start_night_clears_scratch() {
    let mut game = seated(&TABLE, Settings::default());
    let target = game.state().players[3].id;
    game.dispatch(&Action::NextNightStep);
    game.dispatch(&Action::SetMafiaTarget { target });
    game.dispatch(&Action::SetPoliceCheck { target });

    game.dispatch(&Action::StartNight);

    let state = game.state();
    assert_eq!(state.night_actions, NightActions::default());
    assert_eq!(state.night_step, NightStep::Intro);
    assert_eq!(state.phase, Phase::Night);
}
