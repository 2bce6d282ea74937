//! Game engine and round state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck;
use crate::hand::{DealerHand, Hand};
use crate::result::{RoundOutcome, RoundSnapshot};
use crate::stats::SessionStats;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack engine that manages round flow and session
/// statistics.
///
/// The game owns the deck, both hands, the round state machine, and the
/// win/loss/tie counters. A fresh game starts in [`RoundState::Complete`]
/// with nothing dealt; call [`Game::start_round`] to begin play.
pub struct Game {
    /// Cards remaining in the current round's deck.
    pub deck: Mutex<Vec<Card>>,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand.
    pub dealer_hand: Mutex<DealerHand>,
    /// Outcome of the last completed round.
    outcome: Mutex<Option<RoundOutcome>>,
    /// Session win/loss/tie counters.
    stats: Mutex<SessionStats>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use lonejack::{Game, RoundState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), RoundState::Complete);
    /// assert_eq!(game.stats().rounds(), 0);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Mutex::new(Vec::new()),
            state: Mutex::new(RoundState::Complete),
            player_hand: Mutex::new(Hand::new()),
            dealer_hand: Mutex::new(DealerHand::new()),
            outcome: Mutex::new(None),
            stats: Mutex::new(SessionStats::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Starts a new round from a freshly shuffled 52-card deck.
    ///
    /// Both hands are cleared, any prior outcome message is discarded, and
    /// two cards are dealt to each side in player, dealer, player, dealer
    /// order. Session counters are untouched.
    pub fn start_round(&self) {
        let deck = deck::build(&mut *self.rng.lock());
        self.start_round_with_deck(deck);
    }

    /// Starts a new round from a prepared deck instead of shuffling one.
    ///
    /// Cards are drawn from the back of the vector. Useful for deterministic
    /// tests and replays; [`Game::start_round`] is this with a fresh shuffle.
    pub fn start_round_with_deck(&self, deck: Vec<Card>) {
        *self.deck.lock() = deck;
        self.player_hand.lock().clear();
        self.dealer_hand.lock().clear();
        *self.outcome.lock() = None;

        // Deal order: player, dealer, player, dealer.
        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.player_hand.lock().add_card(card);
            }
            if let Some(card) = self.draw() {
                self.dealer_hand.lock().add_card(card);
            }
        }

        *self.state.lock() = RoundState::InProgress;
    }

    /// Draws a card from the deck.
    ///
    /// Returns `None` when the deck is exhausted, leaving it unchanged.
    /// Unreachable in a normal round, which uses well under 52 cards.
    fn draw(&self) -> Option<Card> {
        self.deck.lock().pop()
    }

    /// Completes the round: reveals the hole card, records the outcome in
    /// the session counters, and moves to `Complete`.
    ///
    /// This is the single point where counters change.
    fn finish_round(&self, outcome: RoundOutcome) {
        self.dealer_hand.lock().reveal_hole();
        self.stats.lock().record(outcome);
        *self.outcome.lock() = Some(outcome);
        *self.state.lock() = RoundState::Complete;
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the outcome of the last completed round, if any.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        *self.outcome.lock()
    }

    /// Returns a copy of the session counters.
    pub fn stats(&self) -> SessionStats {
        *self.stats.lock()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the player's current score.
    pub fn player_score(&self) -> u8 {
        self.player_hand.lock().value()
    }

    /// Returns the dealer's full score, hole card included.
    pub fn dealer_score(&self) -> u8 {
        self.dealer_hand.lock().value()
    }

    /// Returns the dealer's visible score (hole card excluded while the
    /// round is in progress).
    pub fn dealer_visible_score(&self) -> u8 {
        self.dealer_hand.lock().visible_value()
    }

    /// Returns a plain value snapshot of the current round for rendering.
    pub fn snapshot(&self) -> RoundSnapshot {
        let dealer = self.dealer_hand.lock();
        let dealer_cards = dealer.cards().to_vec();
        let hole_revealed = dealer.is_hole_revealed();
        let dealer_score = dealer.visible_value();
        drop(dealer);

        let player = self.player_hand.lock();
        let player_cards = player.cards().to_vec();
        let player_score = player.value();
        drop(player);

        RoundSnapshot {
            cards_remaining: self.cards_remaining(),
            player_cards,
            dealer_cards,
            hole_revealed,
            player_score,
            dealer_score,
            state: self.state(),
            outcome: self.outcome(),
            stats: self.stats(),
        }
    }
}
