//! Foundations: one per suit, built up from Ace to King.
//!
//! Ordering is enforced when a card is appended; nothing ever repairs a
//! foundation after the fact. The top card sits at position -1.

use crate::core::{Card, Deck, Rank, Suit};

/// A single-suit ascending pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Foundation {
    suit: Suit,
    deck: Deck,
}

impl Foundation {
    /// Create an empty foundation for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            deck: Deck::new(),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The most recently added card.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.deck.peek(-1)
    }

    /// Cards from Ace upward.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// All thirteen cards are home.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.len() == Rank::ALL.len()
    }

    /// Whether `card` is the next card this foundation needs.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        if card.suit != self.suit {
            return false;
        }
        match self.top_card() {
            None => card.is_ace(),
            Some(top) => top.rank.next() == Some(card.rank),
        }
    }

    /// Append `card` if it is accepted, otherwise hand it back.
    pub fn append_one(&mut self, card: Card) -> Result<(), Card> {
        if !self.can_accept(card) {
            return Err(card);
        }
        self.deck.append_one(card);
        Ok(())
    }

    /// Remove the top card.
    pub fn take_one(&mut self) -> Option<Card> {
        self.deck.take_one(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::from_value(rank).unwrap(), suit)
    }

    #[test]
    fn test_empty_accepts_only_own_ace() {
        let foundation = Foundation::new(Suit::Heart);

        assert!(foundation.can_accept(card(1, Suit::Heart)));
        assert!(!foundation.can_accept(card(1, Suit::Spade)));
        assert!(!foundation.can_accept(card(2, Suit::Heart)));
        assert_eq!(foundation.top_card(), None);
    }

    #[test]
    fn test_builds_in_sequence() {
        let mut foundation = Foundation::new(Suit::Club);

        for rank in Rank::ALL {
            assert_eq!(foundation.append_one(Card::new(rank, Suit::Club)), Ok(()));
        }

        assert_eq!(foundation.len(), 13);
        assert!(foundation.is_complete());
        assert!(!foundation.can_accept(card(13, Suit::Club)));
    }

    #[test]
    fn test_rejects_out_of_sequence() {
        let mut foundation = Foundation::new(Suit::Diamond);
        foundation.append_one(card(1, Suit::Diamond)).unwrap();

        assert_eq!(foundation.append_one(card(3, Suit::Diamond)), Err(card(3, Suit::Diamond)));
        assert_eq!(foundation.append_one(card(2, Suit::Heart)), Err(card(2, Suit::Heart)));
        assert_eq!(foundation.append_one(card(1, Suit::Diamond)), Err(card(1, Suit::Diamond)));
        assert_eq!(foundation.len(), 1);
    }

    #[test]
    fn test_take_one() {
        let mut foundation = Foundation::new(Suit::Spade);
        foundation.append_one(card(1, Suit::Spade)).unwrap();
        foundation.append_one(card(2, Suit::Spade)).unwrap();

        assert_eq!(foundation.take_one(), Some(card(2, Suit::Spade)));
        assert_eq!(foundation.top_card(), Some(card(1, Suit::Spade)));
        assert!(foundation.can_accept(card(2, Suit::Spade)));
    }
}
