//! Card values: rank, suit and the colors derived from them.
//!
//! Cards are plain `Copy` values. Identity is the `(rank, suit)` pair, so a
//! standard deck holds exactly 52 distinct cards.
//!
//! ```
//! use klondike_core::core::{Card, Color, Rank, Suit};
//!
//! let card = Card::new(Rank::Queen, Suit::Heart);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "Q♥");
//! ```

use serde::{Deserialize, Serialize};

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 for Ace up to 13 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, `None` outside `1..=13`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The rank one above this one, `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// Display glyph: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Diamond,
    Heart,
}

impl Suit {
    /// Dense index order, used by `SuitMap`.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    /// Order in which foundations are probed and listed: C, D, S, H.
    pub const FOUNDATION_ORDER: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Spade, Suit::Heart];

    /// Dense index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Red for diamonds and hearts, black for spades and clubs.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
