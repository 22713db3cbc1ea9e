//! Seeded randomness for dealing roles.
//!
//! The state machine never reaches for a global RNG. A `Game` owns one
//! `GameRng`, and every `StartGame` draws a fresh `DealRng` from it:
//!
//! - the same seed replays the same sequence of deals
//! - the first and second deal of a session differ
//! - the session RNG is fully described by its seed and deal count, so a
//!   restored session deals on exactly as the original would have
//!
//! ```
//! use mafia_engine::core::GameRng;
//!
//! let mut seats = vec!["Ann", "Ben", "Cat", "Dan"];
//! GameRng::new(9).deal_stream().shuffle(&mut seats);
//!
//! let mut again = vec!["Ann", "Ben", "Cat", "Dan"];
//! GameRng::new(9).deal_stream().shuffle(&mut again);
//! assert_eq!(seats, again);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread derived seeds apart.
const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

/// Session RNG handed to `transition`.
///
/// It never draws numbers itself; it only derives one `DealRng` per deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    seed: u64,
    /// Deal streams handed out so far.
    deals: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, deals: 0 }
    }

    /// Seed from the thread RNG. Used when a session is built without a seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        log::debug!("Seeding session RNG with {}", seed);
        Self::new(seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of deal streams drawn from this RNG.
    #[must_use]
    pub fn deals(&self) -> u64 {
        self.deals
    }

    /// Derive the stream for the next deal.
    ///
    /// Depends only on the seed and how many deals came before.
    #[must_use]
    pub fn deal_stream(&mut self) -> DealRng {
        self.deals += 1;
        let seed = self.seed.wrapping_add(self.deals.wrapping_mul(STREAM_SPACING));
        DealRng {
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Capture the position for a snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            deals: self.deals,
        }
    }

    /// Rebuild an RNG at a captured position.
    #[must_use]
    pub fn from_state(saved: &GameRngState) -> Self {
        Self {
            seed: saved.seed,
            deals: saved.deals,
        }
    }
}

/// Short-lived ChaCha8 stream used for a single deal.
#[derive(Clone, Debug)]
pub struct DealRng {
    stream: ChaCha8Rng,
}

impl DealRng {
    /// Uniform in-place shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub deals: u64,
}
