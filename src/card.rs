//! Card types and presentation identifiers.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the suit name as used in asset identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hearts" => Ok(Self::Hearts),
            "Diamonds" => Ok(Self::Diamonds),
            "Clubs" => Ok(Self::Clubs),
            "Spades" => Ok(Self::Spades),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank symbol as used in asset identifiers ("A", "2".."10",
    /// "J", "Q", "K").
    #[must_use]
    pub const fn rank_symbol(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Returns the stable image-asset identifier for this card.
    ///
    /// The identifier is of the form `{rank}_of_{suit}` and is what a
    /// presentation layer keys card artwork on.
    ///
    /// # Example
    ///
    /// ```
    /// use lonejack::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Hearts, 1);
    /// assert_eq!(card.asset_id(), "A_of_Hearts");
    /// ```
    #[must_use]
    pub fn asset_id(self) -> String {
        format!("{}_of_{}", self.rank_symbol(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_symbol(), self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the asset-id form, e.g. `10_of_Spades`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .split_once("_of_")
            .ok_or(ParseCardError::MissingSeparator)?;

        let rank = match rank {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            n => match n.parse::<u8>() {
                Ok(r @ 2..=10) => r,
                _ => return Err(ParseCardError::UnknownRank),
            },
        };

        Ok(Self::new(suit.parse()?, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Asset identifier for the dealer's face-down hole card.
pub const FACE_DOWN_ASSET: &str = "back";
