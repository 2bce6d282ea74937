//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lonejack::{
    Card, DECK_SIZE, DealerHand, FACE_DOWN_ASSET, Game, Hand, ParseCardError, RoundOutcome,
    RoundState, Suit, deck,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that yields the given cards in draw order.
fn deck_from_draws(draws: &[Card]) -> Vec<Card> {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    deck
}

#[test]
fn score_is_invariant_under_reordering() {
    let cards = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 7),
        card(Suit::Clubs, 13),
        card(Suit::Diamonds, 3),
    ];

    let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];

    let mut values = Vec::new();
    for order in orders {
        let mut hand = Hand::new();
        for index in order {
            hand.add_card(cards[index]);
        }
        values.push(hand.value());
    }

    assert!(values.iter().all(|&v| v == values[0]));
    assert_eq!(values[0], 21);
}

#[test]
fn single_ace_demotes_when_hand_would_bust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 9));
    assert_eq!(hand.value(), 20);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Clubs, 5));
    // 11 + 9 + 5 = 25, so the ace drops to 1.
    assert_eq!(hand.value(), 15);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn two_aces_and_a_king_score_twelve() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Clubs, 13));
    assert_eq!(hand.value(), 12);
    assert!(!hand.is_soft());
}

#[test]
fn built_deck_has_52_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let deck = deck::build(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<(Suit, u8)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deck_and_hands_always_cover_52_cards() {
    let game = Game::new(3);
    game.start_round();
    game.hit();
    game.hit();

    let snapshot = game.snapshot();
    let mut cards: Vec<Card> = game.deck.lock().clone();
    cards.extend(&snapshot.player_cards);
    cards.extend(&snapshot.dealer_cards);

    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<(Suit, u8)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn dealer_reaches_seventeen_after_stand() {
    for seed in 0..32 {
        let game = Game::new(seed);
        game.start_round();
        game.stand().unwrap();

        assert_eq!(game.state(), RoundState::Complete);
        assert!(game.dealer_score() >= 17 || game.cards_remaining() == 0);
    }
}

#[test]
fn stand_resolution_player_wins() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 6),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 5), // dealer up
        card(Suit::Hearts, 7),   // dealer draw
    ]));

    assert_eq!(game.player_score(), 19);
    // Hole card masked: only the 5 shows.
    assert_eq!(game.dealer_visible_score(), 5);
    assert_eq!(game.dealer_score(), 11);

    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::PlayerWin);
    assert_eq!(outcome.message(), "You win!");
    assert_eq!(game.dealer_score(), 18);
    assert_eq!(game.state(), RoundState::Complete);

    let stats = game.stats();
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 0);
    assert_eq!(stats.ties, 0);
}

#[test]
fn hit_past_21_busts_and_later_actions_are_noops() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 2),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 3), // dealer up
        card(Suit::Hearts, 5),   // player hit
    ]));

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, 5);
    assert_eq!(game.player_score(), 24);
    assert_eq!(game.state(), RoundState::Complete);
    assert_eq!(game.outcome(), Some(RoundOutcome::PlayerBust));
    assert_eq!(game.outcome().unwrap().message(), "Bust! You lose.");
    assert_eq!(game.stats().losses, 1);

    // Complete: hit and stand change nothing.
    assert!(game.hit().is_none());
    assert!(game.stand().is_none());
    assert_eq!(game.player_hand.lock().len(), 3);
    assert_eq!(game.dealer_hand.lock().len(), 2);
    assert_eq!(game.stats().losses, 1);
}

#[test]
fn equal_scores_push() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),   // player
        card(Suit::Spades, 10),   // dealer hole
        card(Suit::Diamonds, 10), // player
        card(Suit::Clubs, 4),     // dealer up
        card(Suit::Hearts, 6),    // dealer draw to 20
    ]));

    assert_eq!(game.player_score(), 20);

    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::Push);
    assert_eq!(outcome.message(), "Push!");
    assert_eq!(game.dealer_score(), 20);
    assert_eq!(game.stats().ties, 1);
    assert_eq!(game.stats().wins, 0);
    assert_eq!(game.stats().losses, 0);
}

#[test]
fn dealer_bust_is_a_player_win() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Diamonds, 8), // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Hearts, 9),   // dealer draw to 25
    ]));

    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::DealerBust);
    assert_eq!(outcome.message(), "Dealer busts! You win.");
    assert_eq!(game.stats().wins, 1);
}

#[test]
fn dealer_with_higher_score_wins() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Diamonds, 7), // player
        card(Suit::Clubs, 9),    // dealer up
    ]));

    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::DealerWin);
    assert_eq!(outcome.message(), "Dealer wins.");
    assert_eq!(game.stats().losses, 1);
}

#[test]
fn twenty_one_does_not_auto_stand() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 5),   // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Diamonds, 6), // player
        card(Suit::Clubs, 7),    // dealer up
        card(Suit::Hearts, 10),  // player hit to 21
    ]));

    game.hit().unwrap();
    assert_eq!(game.player_score(), 21);
    // Still the player's turn; standing is an explicit action.
    assert_eq!(game.state(), RoundState::InProgress);

    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::PlayerWin);
}

#[test]
fn new_round_resets_state_but_not_counters() {
    let game = Game::new(17);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 2),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 3), // dealer up
        card(Suit::Hearts, 5),   // player hit
    ]));
    game.hit();
    assert_eq!(game.stats().losses, 1);

    game.start_round();
    assert_eq!(game.state(), RoundState::InProgress);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.player_hand.lock().len(), 2);
    assert_eq!(game.dealer_hand.lock().len(), 2);
    assert!(!game.dealer_hand.lock().is_hole_revealed());
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(game.stats().losses, 1);
}

#[test]
fn actions_before_first_round_are_noops() {
    let game = Game::new(1);
    assert_eq!(game.state(), RoundState::Complete);
    assert!(game.hit().is_none());
    assert!(game.stand().is_none());
    assert_eq!(game.stats().rounds(), 0);
}

#[test]
fn hit_on_exhausted_deck_is_a_noop() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 2),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 3), // dealer up
    ]));

    assert_eq!(game.cards_remaining(), 0);
    assert!(game.hit().is_none());
    assert_eq!(game.state(), RoundState::InProgress);
    assert_eq!(game.player_hand.lock().len(), 2);
}

#[test]
fn stand_on_exhausted_deck_still_resolves() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 2),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 3), // dealer up
    ]));

    // Dealer sits at 5 with nothing left to draw.
    let outcome = game.stand().unwrap();
    assert_eq!(outcome, RoundOutcome::PlayerWin);
    assert_eq!(game.dealer_score(), 5);
    assert_eq!(game.state(), RoundState::Complete);
}

#[test]
fn snapshot_masks_hole_card_until_complete() {
    let game = Game::new(0);
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Diamonds, 9), // player
        card(Suit::Clubs, 8),    // dealer up
    ]));

    let snapshot = game.snapshot();
    assert_eq!(snapshot.state, RoundState::InProgress);
    assert_eq!(snapshot.cards_remaining, 0);
    assert_eq!(snapshot.player_cards.len(), 2);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert!(!snapshot.hole_revealed);
    assert_eq!(snapshot.player_score, 19);
    assert_eq!(snapshot.dealer_score, 8);
    assert_eq!(snapshot.outcome, None);

    game.stand();

    let snapshot = game.snapshot();
    assert!(snapshot.hole_revealed);
    assert_eq!(snapshot.dealer_score, 18);
    assert_eq!(snapshot.outcome, Some(RoundOutcome::PlayerWin));
    assert_eq!(snapshot.stats.wins, 1);
}

#[test]
fn dealer_hand_masks_soft_values_too() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 6);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn asset_ids_round_trip() {
    let ten = card(Suit::Spades, 10);
    assert_eq!(ten.asset_id(), "10_of_Spades");
    assert_eq!("10_of_Spades".parse::<Card>().unwrap(), ten);

    let ace = card(Suit::Hearts, 1);
    assert_eq!(ace.asset_id(), "A_of_Hearts");
    assert_eq!(ace.to_string(), "A of Hearts");
    assert_eq!("A_of_Hearts".parse::<Card>().unwrap(), ace);

    assert_ne!(FACE_DOWN_ASSET, ace.asset_id());
}

#[test]
fn parse_errors() {
    assert_eq!(
        "AofHearts".parse::<Card>().unwrap_err(),
        ParseCardError::MissingSeparator
    );
    assert_eq!(
        "X_of_Hearts".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank
    );
    assert_eq!(
        "A_of_Stars".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
    assert_eq!(
        "0_of_Clubs".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank
    );
}
