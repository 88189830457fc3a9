//! Game state: the nine containers and read-only views of them.
//!
//! ## GameState
//!
//! Owns every card in play:
//! - four foundations, keyed by suit
//! - seven tableau columns, left to right
//! - the stock (index 0 is the next card drawn)
//! - the waste (index 0 is the most recent draw, the only playable card)
//!
//! `Clone` is a full deep copy. Every container stores its cards in an
//! owned `Vec`, so a clone shares nothing with the original and can be
//! mutated freely for speculative evaluation.
//!
//! ## Snapshot
//!
//! What a renderer needs: foundation tops, column shapes, the waste, and
//! counters. Serializable so it can be handed to a UI as-is.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::deck::Deck;
use super::pile::{ColumnId, Pile, COLUMN_COUNT};
use super::suit_map::SuitMap;
use super::action::Action;
use crate::piles::{Foundation, TableauColumn};

/// Complete Klondike state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// One foundation per suit.
    pub foundations: SuitMap<Foundation>,

    /// Tableau columns, left to right.
    pub columns: [TableauColumn; COLUMN_COUNT],

    /// Undrawn cards, next draw at index 0.
    pub stock: Deck,

    /// Drawn cards, playable card at index 0.
    pub waste: Deck,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            foundations: SuitMap::new(Foundation::new),
            columns: Default::default(),
            stock: Deck::new(),
            waste: Deck::new(),
        }
    }
}

impl GameState {
    /// Create a state with every container empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state whose only cards are `stock`. Handy for exercising the
    /// draw cycle.
    #[must_use]
    pub fn with_stock(stock: Deck) -> Self {
        Self {
            stock,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(&self, id: ColumnId) -> &TableauColumn {
        &self.columns[id.index()]
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut TableauColumn {
        &mut self.columns[id.index()]
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit]
    }

    pub fn foundation_mut(&mut self, suit: Suit) -> &mut Foundation {
        &mut self.foundations[suit]
    }

    /// The playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.peek(0)
    }

    /// The card a move from or onto `pile` would interact with.
    #[must_use]
    pub fn top_of(&self, pile: Pile) -> Option<Card> {
        match pile {
            Pile::Waste => self.waste_top(),
            Pile::Foundation(suit) => self.foundation(suit).top_card(),
            Pile::Column(id) => self.column(id).top(),
        }
    }

    /// Iterate over every card in every container.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        let foundations = self.foundations.values().flat_map(|f| f.cards().iter());
        let columns = self
            .columns
            .iter()
            .flat_map(|c| c.hidden().iter().chain(c.visible().iter()));
        foundations
            .chain(columns)
            .chain(self.stock.iter())
            .chain(self.waste.iter())
            .copied()
    }

    /// Total number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.foundations.values().map(Foundation::len).sum::<usize>()
            + self.columns.iter().map(TableauColumn::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// True if no card appears in two places.
    #[must_use]
    pub fn has_unique_cards(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.all_cards().all(|card| seen.insert(card))
    }

    /// True if the state holds exactly the 52 cards of a standard deck.
    #[must_use]
    pub fn is_full_deck(&self) -> bool {
        self.card_count() == 52 && self.has_unique_cards()
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.values().all(Foundation::is_complete)
    }

    /// Every legal move, in display order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Action> {
        crate::rules::legal_moves(self)
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            foundations: self
                .foundations
                .iter()
                .map(|(suit, f)| FoundationView {
                    suit,
                    top: f.top_card(),
                    len: f.len(),
                })
                .collect(),
            columns: self
                .columns
                .iter()
                .map(|c| ColumnView {
                    hidden: c.hidden_count(),
                    visible: c.visible().cards().to_vec(),
                })
                .collect(),
            waste: self.waste.cards().to_vec(),
            stock_len: self.stock.len(),
            remaining: self.stock.len() + self.waste.len(),
        }
    }
}

/// Foundation as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationView {
    pub suit: Suit,
    pub top: Option<Card>,
    pub len: usize,
}

/// Tableau column as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    /// Face-down card count.
    pub hidden: usize,
    /// Face-up cards, deepest first.
    pub visible: Vec<Card>,
}

/// Read-only view of a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Foundations in C, D, S, H order.
    pub foundations: Vec<FoundationView>,
    /// Columns, left to right.
    pub columns: Vec<ColumnView>,
    /// Waste cards, playable card first.
    pub waste: Vec<Card>,
    /// Cards left in the stock.
    pub stock_len: usize,
    /// Stock plus waste, the "cards left to deal" counter.
    pub remaining: usize,
}
