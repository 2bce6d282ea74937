use alloc::vec::Vec;

use crate::card::Card;

use super::Game;

/// Dealer draws while below this value. The threshold is purely numeric;
/// the dealer stands on soft 17 as well.
pub(super) const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Dealer plays out their hand: reveal the hole card, then draw until
    /// reaching 17 or higher.
    ///
    /// Returns the cards drawn. The loop also stops if the deck runs out,
    /// which cannot happen from a full 52-card deck.
    pub(super) fn dealer_play(&self) -> Vec<Card> {
        self.dealer_hand.lock().reveal_hole();

        let mut drawn = Vec::new();

        while self.dealer_hand.lock().value() < DEALER_STANDS_AT {
            let Some(card) = self.draw() else { break };
            self.dealer_hand.lock().add_card(card);
            drawn.push(card);
        }

        drawn
    }
}
