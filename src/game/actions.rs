use crate::card::Card;
use crate::result::RoundOutcome;

use super::{Game, RoundState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card, or `None` if the round is not in progress or
    /// the deck is exhausted. Going over 21 ends the round as a bust; landing
    /// exactly on 21 does not auto-stand, the player must stand explicitly.
    pub fn hit(&self) -> Option<Card> {
        if *self.state.lock() != RoundState::InProgress {
            return None;
        }

        let card = self.draw()?;

        let mut player = self.player_hand.lock();
        player.add_card(card);
        let busted = player.is_bust();
        drop(player);

        if busted {
            self.finish_round(RoundOutcome::PlayerBust);
        }

        Some(card)
    }

    /// Player action: Stand (end the player turn).
    ///
    /// The dealer reveals the hole card, draws to 17, and the round is
    /// resolved by comparing final scores. Returns the outcome, or `None`
    /// if the round is not in progress.
    pub fn stand(&self) -> Option<RoundOutcome> {
        if *self.state.lock() != RoundState::InProgress {
            return None;
        }

        self.dealer_play();
        Some(self.resolve())
    }

    /// Compares final scores and completes the round.
    fn resolve(&self) -> RoundOutcome {
        let dealer_value = self.dealer_hand.lock().value();
        let player_value = self.player_hand.lock().value();

        let outcome = if dealer_value > 21 {
            RoundOutcome::DealerBust
        } else if dealer_value > player_value {
            RoundOutcome::DealerWin
        } else if dealer_value < player_value {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::Push
        };

        self.finish_round(outcome);
        outcome
    }
}
