//! Tableau columns: a face-down pile under a face-up pile.
//!
//! The hidden deck's index 0 is the next card to turn over. The visible
//! deck runs from the deepest face-up card at index 0 to the playable card
//! at index -1.
//!
//! Whenever a removal leaves the visible deck empty, the next hidden card
//! is turned face up. Every removal path goes through `flip_if_exposed`, so
//! a column never shows an empty face-up pile while cards remain hidden.

use crate::core::{Card, Deck};
use crate::rules::can_place_on_tableau;

/// One of the seven tableau columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TableauColumn {
    hidden: Deck,
    visible: Deck,
}

impl TableauColumn {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a column from explicit piles. The visible pile is flipped in
    /// from hidden if it starts out empty.
    #[must_use]
    pub fn from_parts(hidden: Deck, visible: Deck) -> Self {
        let mut column = Self { hidden, visible };
        column.flip_if_exposed();
        column
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// The face-up cards, deepest first.
    #[must_use]
    pub fn visible(&self) -> &Deck {
        &self.visible
    }

    /// Face-down cards, next-to-flip first. Not for display.
    #[must_use]
    pub(crate) fn hidden(&self) -> &Deck {
        &self.hidden
    }

    /// Total cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len() + self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty() && self.visible.is_empty()
    }

    /// Look at a face-up card; -1 is the playable top card.
    #[must_use]
    pub fn peek_visible(&self, pos: isize) -> Option<Card> {
        self.visible.peek(pos)
    }

    /// The playable card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.visible.peek(-1)
    }

    /// Remove one face-up card, then turn over a hidden card if needed.
    pub fn take_one(&mut self, pos: isize) -> Option<Card> {
        let card = self.visible.take_one(pos);
        self.flip_if_exposed();
        card
    }

    /// Remove the face-up cards from `start` to the top, in order, then turn
    /// over a hidden card if needed.
    pub fn take_range(&mut self, start: isize) -> Vec<Card> {
        let cards = self.visible.take_range(start, -1);
        self.flip_if_exposed();
        cards
    }

    /// Put a card on top. Legality is the caller's job.
    pub fn append_one(&mut self, card: Card) {
        self.visible.append_one(card);
    }

    /// Put cards on top in order. Legality is the caller's job.
    pub fn append_many<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.visible.append_many(cards);
    }

    /// Deal a face-down card onto the front of the hidden pile.
    pub fn push_hidden(&mut self, card: Card) {
        self.hidden.push_front(card);
    }

    /// Turn the next hidden card face up, regardless of what is showing.
    /// Used once per column at the end of the deal.
    pub fn flip(&mut self) -> Option<Card> {
        let card = self.hidden.take_one(0)?;
        self.visible.append_one(card);
        Some(card)
    }

    fn flip_if_exposed(&mut self) {
        if self.visible.is_empty() {
            self.flip();
        }
    }

    /// Index of the deepest face-up card from which the cards up to the top
    /// form a descending, alternating-color run. `None` when nothing shows.
    #[must_use]
    pub fn run_start(&self) -> Option<usize> {
        let cards = self.visible.cards();
        if cards.is_empty() {
            return None;
        }
        let mut start = cards.len() - 1;
        while start > 0 && can_place_on_tableau(Some(cards[start]), Some(cards[start - 1])) {
            start -= 1;
        }
        Some(start)
    }

    /// Whether the column is built on a King with nothing hidden under it.
    ///
    /// This looks at the deepest face-up card rather than the playable one,
    /// so a King with a run stacked on it counts too. For a lone King the
    /// two agree.
    #[must_use]
    pub fn is_king_anchored(&self) -> bool {
        self.hidden.is_empty() && self.visible.peek(0).is_some_and(Card::is_king)
    }
}
