//! An owned game session: the current state plus the RNG that deals it.
//!
//! `Game` is the value a UI driver holds. `dispatch` takes `&mut self`, so
//! only one action is ever in flight, and the state is replaced wholesale
//! by the result of `transition`.

use crate::core::{Action, GameRng, GameState, Settings};
use crate::rules::transition;
use crate::snapshot::GameSnapshot;

/// A single game session.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    rng: GameRng,
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    players: Vec<String>,
    settings: Settings,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            settings: Settings::default(),
            seed: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Register several players, in seating order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Fix the RNG seed. Without one the session is seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session in the setup phase.
    pub fn build(self) -> Game {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut game = Game::from_parts(GameState::with_settings(self.settings), rng);
        for name in self.players {
            game.dispatch(&Action::AddPlayer { name });
        }
        game
    }
}

impl Game {
    /// Create an empty session with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(GameState::new(), GameRng::new(seed))
    }

    /// Wrap an existing state and RNG.
    #[must_use]
    pub fn from_parts(state: GameState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: &Action) -> &GameState {
        self.state = transition(&self.state, action, &mut self.rng);
        &self.state
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all<'a, I>(&mut self, actions: I) -> &GameState
    where
        I: IntoIterator<Item = &'a Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Capture the session, including the RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a captured session.
    #[must_use]
    pub fn restore(snapshot: &GameSnapshot) -> Self {
        Self {
            state: snapshot.state.clone(),
            rng: GameRng::from_state(&snapshot.rng),
        }
    }

    /// Split into state and RNG.
    #[must_use]
    pub fn into_parts(self) -> (GameState, GameRng) {
        (self.state, self.rng)
    }
}
