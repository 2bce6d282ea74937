//! Session win/loss/tie counters.

use crate::result::RoundOutcome;

/// Running counters for one game session.
///
/// Each counter is bumped exactly once per resolved round and never
/// decremented; the counters live as long as the [`Game`](crate::Game)
/// that owns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the player lost.
    pub losses: u32,
    /// Rounds that pushed.
    pub ties: u32,
}

impl SessionStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Records a resolved round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::DealerBust | RoundOutcome::PlayerWin => self.wins += 1,
            RoundOutcome::PlayerBust | RoundOutcome::DealerWin => self.losses += 1,
            RoundOutcome::Push => self.ties += 1,
        }
    }

    /// Returns the total number of resolved rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}
