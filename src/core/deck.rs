//! Ordered, position-addressable card storage.
//!
//! `Deck` is the one storage primitive every container is built on.
//! Position 0 is the top end and position -1 the bottom end; any negative
//! position counts from the bottom (`len + pos`). Out-of-range access gives
//! back `None` or an empty `Vec` rather than panicking.
//!
//! ```
//! use klondike_core::core::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::from_cards(vec![
//!     Card::new(Rank::Ace, Suit::Spade),
//!     Card::new(Rank::Two, Suit::Spade),
//!     Card::new(Rank::Three, Suit::Spade),
//! ]);
//!
//! assert_eq!(deck.peek(-1), Some(Card::new(Rank::Three, Suit::Spade)));
//! assert_eq!(deck.take_one(0), Some(Card::new(Rank::Ace, Suit::Spade)));
//! assert_eq!(deck.take_one(5), None);
//! assert_eq!(deck.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rng::GameRng;

/// An ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding `cards`, index 0 on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Read-only view of the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consume the deck, yielding its cards top first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Resolve `pos` against `len`, counting negatives from the bottom.
    ///
    /// Returns `None` if the resolved position is below zero. The upper
    /// bound is left to the caller since inserts accept `len` itself.
    fn resolve(pos: isize, len: usize) -> Option<usize> {
        if pos < 0 {
            len.checked_sub(pos.unsigned_abs())
        } else {
            Some(pos.unsigned_abs())
        }
    }

    fn index(&self, pos: isize) -> Option<usize> {
        Self::resolve(pos, self.cards.len()).filter(|&i| i < self.cards.len())
    }

    /// Look at the card at `pos` without removing it.
    #[must_use]
    pub fn peek(&self, pos: isize) -> Option<Card> {
        self.index(pos).map(|i| self.cards[i])
    }

    /// Remove and return the card at `pos`.
    pub fn take_one(&mut self, pos: isize) -> Option<Card> {
        let i = self.index(pos)?;
        Some(self.cards.remove(i))
    }

    /// Remove up to `count` cards, one at a time, from `pos`.
    ///
    /// Stops early once nothing is left at `pos`. A negative count takes
    /// nothing.
    pub fn take_many(&mut self, count: isize, pos: isize) -> Vec<Card> {
        let mut taken = Vec::new();
        for _ in 0..count.max(0) {
            match self.take_one(pos) {
                Some(card) => taken.push(card),
                None => break,
            }
        }
        taken
    }

    /// Remove the inclusive range `start..=end`, preserving order.
    ///
    /// Both bounds may be negative. A range that falls outside the deck or
    /// ends before it starts removes nothing. A non-negative `end` must lie
    /// strictly after `start`; a single card is only taken through a
    /// negative `end`, as in `take_range(-1, -1)` or `take_range(i, -1)`.
    pub fn take_range(&mut self, start: isize, end: isize) -> Vec<Card> {
        if end >= 0 && end <= start {
            return Vec::new();
        }
        match (self.index(start), self.index(end)) {
            (Some(start), Some(end)) if start <= end => self.cards.drain(start..=end).collect(),
            _ => Vec::new(),
        }
    }

    /// Insert `card` at `pos`, shifting later cards down.
    ///
    /// An absent card is a no-op. Position `len` inserts at the bottom. If
    /// `pos` is out of range the card is handed back untouched.
    pub fn put_one(&mut self, card: Option<Card>, pos: isize) -> Result<(), Card> {
        let Some(card) = card else {
            return Ok(());
        };
        match Self::resolve(pos, self.cards.len()) {
            Some(i) if i <= self.cards.len() => {
                self.cards.insert(i, card);
                Ok(())
            }
            _ => Err(card),
        }
    }

    /// Add a card at the top.
    pub fn push_front(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Add a card at the bottom.
    pub fn append_one(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Add cards at the bottom, in order. Empty input is a no-op.
    pub fn append_many<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
