//! Candidate moves.
//!
//! An `Action` describes a transfer without owning or touching any state:
//! where the cards come from, where they go, which cards would move, and
//! what they would land on. The enumerator produces them and the executor
//! reports the one it applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::pile::Pile;

/// A legal (or applied) move.
///
/// ## Example
///
/// ```
/// use klondike_core::core::{Action, Card, Pile, Rank, Suit};
///
/// let ace = Card::new(Rank::Ace, Suit::Heart);
/// let action = Action::single(Pile::Waste, Pile::Foundation(Suit::Heart), ace, None);
///
/// assert_eq!(action.lead_card(), Some(ace));
/// assert_eq!(action.to_string(), "waste -> foundation ♥: A♥");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Source pile.
    pub from: Pile,

    /// Destination pile.
    pub to: Pile,

    /// Cards that move, in the order they land (lead card first).
    /// SmallVec keeps short runs off the heap.
    pub cards: SmallVec<[Card; 4]>,

    /// Destination's top card before the move, for display.
    pub dest_top: Option<Card>,
}

impl Action {
    /// Create an action moving `cards`.
    #[must_use]
    pub fn new(from: Pile, to: Pile, cards: &[Card], dest_top: Option<Card>) -> Self {
        Self {
            from,
            to,
            cards: SmallVec::from_slice(cards),
            dest_top,
        }
    }

    /// Create an action moving one card.
    #[must_use]
    pub fn single(from: Pile, to: Pile, card: Card, dest_top: Option<Card>) -> Self {
        Self::new(from, to, &[card], dest_top)
    }

    /// The card that is placed directly onto the destination.
    #[must_use]
    pub fn lead_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Number of cards that move.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}:", self.from, self.to)?;
        for (i, card) in self.cards.iter().enumerate() {
            let sep = if i == 0 { " " } else { "," };
            write!(f, "{sep}{card}")?;
        }
        if let Some(top) = self.dest_top {
            write!(f, " onto {top}")?;
        }
        Ok(())
    }
}
