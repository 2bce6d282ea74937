//! Round outcomes and the render snapshot.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::game::RoundState;
use crate::stats::SessionStats;

/// Outcome of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player drew past 21.
    PlayerBust,
    /// Dealer drew past 21.
    DealerBust,
    /// Dealer finished with the higher value.
    DealerWin,
    /// Player finished with the higher value.
    PlayerWin,
    /// Equal values, no winner.
    Push,
}

impl RoundOutcome {
    /// Returns the outcome message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts! You win.",
            Self::DealerWin => "Dealer wins.",
            Self::PlayerWin => "You win!",
            Self::Push => "Push!",
        }
    }

    /// Returns whether the outcome counts as a player win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }

    /// Returns whether the outcome counts as a player loss.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWin)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A plain value snapshot of the current round, for rendering.
///
/// A presentation layer polls this after each action and redraws from it;
/// game logic never calls back into the renderer. While `hole_revealed` is
/// false the dealer's first card should be drawn with
/// [`FACE_DOWN_ASSET`](crate::FACE_DOWN_ASSET) and `dealer_score` excludes
/// it.
#[derive(Debug, Clone)]
pub struct RoundSnapshot {
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// The player's cards, in deal order.
    pub player_cards: Vec<Card>,
    /// The dealer's cards, in deal order (first card is the hole card).
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's hole card is revealed.
    pub hole_revealed: bool,
    /// The player's current score.
    pub player_score: u8,
    /// The dealer's visible score (hole card excluded until revealed).
    pub dealer_score: u8,
    /// Current round state.
    pub state: RoundState,
    /// Outcome of the round, once complete.
    pub outcome: Option<RoundOutcome>,
    /// Session win/loss/tie counters.
    pub stats: SessionStats,
}
