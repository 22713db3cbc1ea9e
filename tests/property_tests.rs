//! Property tests for dealing, win detection and the winner lock.

use mafia_engine::{
    check_winner, Action, Game, GameBuilder, GameRng, GameState, Phase, Player, PlayerId, Role,
    Settings, Team,
};
use proptest::prelude::*;

/// Settings that pass validation for `n` players, with `n`.
fn valid_table() -> impl Strategy<Value = (usize, Settings)> {
    (4usize..=20, any::<bool>(), any::<bool>()).prop_flat_map(|(n, doctor, police)| {
        // A strict minority of mafia; the specials always fit alongside.
        let max_mafia = ((n - 1) / 2) as u32;
        (Just(n), 1..=max_mafia, Just(doctor), Just(police)).prop_map(
            |(n, mafia, doctor, police)| {
                let settings = Settings::default()
                    .with_mafia_count(mafia)
                    .with_doctor(doctor)
                    .with_police(police);
                (n, settings)
            },
        )
    })
}

fn dealt(n: usize, settings: Settings, seed: u64) -> Game {
    let mut game = GameBuilder::new()
        .players((0..n).map(|i| format!("P{}", i)))
        .settings(settings)
        .seed(seed)
        .build();
    game.dispatch(&Action::StartGame);
    game
}

fn table(roles: &[(Role, bool)]) -> Vec<Player> {
    roles
        .iter()
        .enumerate()
        .map(|(i, &(role, alive))| {
            let id = PlayerId::new(i as u32 + 1);
            let mut player = Player::new(id, format!("P{}", i)).with_role(role);
            player.alive = alive;
            player
        })
        .collect()
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Mafia), Just(Role::Doctor), Just(Role::Police), Just(Role::Citizen)]
}

proptest! {
    /// Test that every valid deal hands out exactly the configured roles.
    #[test]
    fn test_deal_matches_settings((n, settings) in valid_table(), seed in any::<u64>()) {
        let game = dealt(n, settings.clone(), seed);
        let state = game.state();

        prop_assert_eq!(state.phase, Phase::Reveal);
        prop_assert_eq!(state.count_role(Role::Mafia), settings.mafia_count as usize);
        prop_assert_eq!(state.count_role(Role::Doctor), settings.has_doctor as usize);
        prop_assert_eq!(state.count_role(Role::Police), settings.has_police as usize);
        prop_assert_eq!(
            state.count_role(Role::Citizen),
            n - settings.mafia_count as usize - settings.special_role_count()
        );
        prop_assert!(state.players.iter().all(|p| p.alive && p.role.is_some()));
    }

    /// Test that no accepted deal hands either side the game outright.
    #[test]
    fn test_deal_is_undecided((n, settings) in valid_table(), seed in any::<u64>()) {
        let game = dealt(n, settings, seed);
        prop_assert_eq!(check_winner(&game.state().players), None);
    }

    /// Test that a mafia at or above half the table is never dealt.
    #[test]
    fn test_parity_deal_refused(n in 4usize..=20, extra in 0u32..3) {
        let mafia = (n / 2) as u32 + extra;
        let settings = Settings::default()
            .with_mafia_count(mafia)
            .with_doctor(false)
            .with_police(false);
        let game = dealt(n, settings, 0);

        prop_assert_eq!(game.state().phase, Phase::Setup);
        prop_assert!(game.state().players.iter().all(|p| p.role.is_none()));
    }

    /// Test that the same seed always deals the same table.
    #[test]
    fn test_deal_is_reproducible((n, settings) in valid_table(), seed in any::<u64>()) {
        let a = dealt(n, settings.clone(), seed);
        let b = dealt(n, settings, seed);
        prop_assert_eq!(a.state(), b.state());
    }

    /// Test the win condition against a direct count.
    #[test]
    fn test_check_winner_matches_counts(
        roles in prop::collection::vec((role_strategy(), any::<bool>()), 0..16)
    ) {
        let players = table(&roles);
        let mafia = roles.iter().filter(|(r, alive)| *alive && r.is_mafia()).count();
        let others = roles.iter().filter(|(r, alive)| *alive && !r.is_mafia()).count();

        let expected = if mafia == 0 {
            Some(Team::Citizen)
        } else if mafia >= others {
            Some(Team::Mafia)
        } else {
            None
        };
        prop_assert_eq!(check_winner(&players), expected);
    }

    /// Test that dead players never affect the outcome.
    #[test]
    fn test_check_winner_ignores_dead(
        living in prop::collection::vec(role_strategy(), 1..10),
        dead in prop::collection::vec(role_strategy(), 0..10),
    ) {
        let only_living: Vec<_> = living.iter().map(|&r| (r, true)).collect();
        let mut with_dead = only_living.clone();
        with_dead.extend(dead.iter().map(|&r| (r, false)));

        prop_assert_eq!(check_winner(&table(&only_living)), check_winner(&table(&with_dead)));
    }

    /// Test that a decided game ignores every action except NewGame.
    #[test]
    fn test_winner_lock(
        target in 1u32..8,
        winner in prop_oneof![Just(Team::Mafia), Just(Team::Citizen)],
    ) {
        let mut state = GameState::new();
        for i in 0..6 {
            let id = state.alloc_player_id();
            let role = if i == 0 { Role::Mafia } else { Role::Citizen };
            state.players.push_back(Player::new(id, format!("P{}", i)).with_role(role));
        }
        state.phase = Phase::Result;
        state.winner = Some(winner);

        let target = PlayerId::new(target);
        let actions = [
            Action::StartGame,
            Action::StartNight,
            Action::SetMafiaTarget { target },
            Action::StartDay,
            Action::StartVote,
            Action::vote(PlayerId::new(1), target),
            Action::ProcessVoteResult,
            Action::NextRound,
            Action::RemovePlayer { id: target },
        ];
        let mut rng = GameRng::new(0);
        for action in &actions {
            prop_assert_eq!(&mafia_engine::transition(&state, action, &mut rng), &state);
        }
        let fresh = mafia_engine::transition(&state, &Action::NewGame, &mut rng);
        prop_assert_eq!(fresh.winner, None);
    }
}
