//! Eliminations and the win condition.

use im::Vector;

use crate::core::{Player, PlayerId, Team};

/// Mark a living player dead.
///
/// Returns true if a living player with that id existed. Dead players
/// stay dead and unknown ids change nothing.
pub fn eliminate(players: &mut Vector<Player>, id: PlayerId) -> bool {
    match players.iter_mut().find(|p| p.id == id && p.alive) {
        Some(player) => {
            player.alive = false;
            true
        }
        None => false,
    }
}

/// Decide whether a side has won.
///
/// Among living players: no mafia left means the citizens win; mafia
/// at or above the number of everyone else means the mafia win.
/// Otherwise the game goes on.
pub fn check_winner<'a, I>(players: I) -> Option<Team>
where
    I: IntoIterator<Item = &'a Player>,
{
    let (mafia, others) = players
        .into_iter()
        .filter(|p| p.alive)
        .fold((0usize, 0usize), |(m, c), p| {
            if p.is_mafia() {
                (m + 1, c)
            } else {
                (m, c + 1)
            }
        });

    if mafia == 0 {
        Some(Team::Citizen)
    } else if mafia >= others {
        Some(Team::Mafia)
    } else {
        None
    }
}
