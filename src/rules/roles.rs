//! Role pool construction and dealing.

use im::Vector;

use crate::core::{DealRng, Player, Role, Settings};

/// Build the unshuffled role pool for `player_count` players.
///
/// Mafia first, then the doctor and police if enabled, then citizens up
/// to the player count. The pool never exceeds `player_count`: if the
/// settings ask for more special slots than seats, later slots are
/// dropped. `Settings::validate` rejects such settings before dealing.
#[must_use]
pub fn role_pool(settings: &Settings, player_count: usize) -> Vec<Role> {
    let mafia = (settings.mafia_count as usize).min(player_count);
    let mut pool = vec![Role::Mafia; mafia];

    if settings.has_doctor && pool.len() < player_count {
        pool.push(Role::Doctor);
    }
    if settings.has_police && pool.len() < player_count {
        pool.push(Role::Police);
    }
    pool.resize(player_count, Role::Citizen);

    pool
}

/// Deal a uniformly shuffled role to every player, in roster order.
///
/// Every player comes out alive with exactly one role.
pub fn assign_roles(players: &mut Vector<Player>, settings: &Settings, deal: &mut DealRng) {
    let mut pool = role_pool(settings, players.len());
    deal.shuffle(&mut pool);

    for (player, role) in players.iter_mut().zip(pool) {
        player.role = Some(role);
        player.alive = true;
    }
}
