//! Ballot tally and plurality outcome.
//!
//! Targets are counted in order of first appearance. A target is voted
//! out only with a strictly greatest count; a tie for the top count, or
//! an empty ballot box, eliminates nobody.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameState, PlayerId, Vote};

/// Vote counts for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// (target, count) in order of each target's first ballot.
    counts: Vec<(PlayerId, usize)>,
}

/// How a voting round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// A single target had the most votes.
    Eliminated(PlayerId),
    /// Two or more targets shared the top count.
    Tie(SmallVec<[PlayerId; 4]>),
    /// No ballots were cast.
    NoVotes,
}

impl VoteOutcome {
    /// The eliminated player, if any.
    #[must_use]
    pub fn eliminated(&self) -> Option<PlayerId> {
        match self {
            VoteOutcome::Eliminated(id) => Some(*id),
            VoteOutcome::Tie(_) | VoteOutcome::NoVotes => None,
        }
    }
}

impl Tally {
    /// Count ballots per target.
    pub fn from_votes<'a, I>(votes: I) -> Self
    where
        I: IntoIterator<Item = &'a Vote>,
    {
        let mut slots: FxHashMap<PlayerId, usize> = FxHashMap::default();
        let mut counts: Vec<(PlayerId, usize)> = Vec::new();

        for vote in votes {
            match slots.get(&vote.target) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(vote.target, counts.len());
                    counts.push((vote.target, 1));
                }
            }
        }

        Self { counts }
    }

    /// (target, count) pairs in order of first appearance.
    #[must_use]
    pub fn entries(&self) -> &[(PlayerId, usize)] {
        &self.counts
    }

    /// Votes received by `target`.
    #[must_use]
    pub fn count(&self, target: PlayerId) -> usize {
        self.counts
            .iter()
            .find(|(id, _)| *id == target)
            .map_or(0, |&(_, n)| n)
    }

    /// Total ballots counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// Highest count received by any target (0 with no ballots).
    #[must_use]
    pub fn top_count(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).max().unwrap_or(0)
    }

    /// Every target sharing the top count, in first-appearance order.
    #[must_use]
    pub fn leaders(&self) -> SmallVec<[PlayerId; 4]> {
        let top = self.top_count();
        self.counts
            .iter()
            .filter(|&&(_, n)| top > 0 && n == top)
            .map(|&(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn outcome(&self) -> VoteOutcome {
        let leaders = self.leaders();
        match leaders.len() {
            0 => VoteOutcome::NoVotes,
            1 => VoteOutcome::Eliminated(leaders[0]),
            _ => VoteOutcome::Tie(leaders),
        }
    }
}

impl GameState {
    /// Tally of the ballots cast so far this round.
    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally::from_votes(self.votes.iter())
    }
}
