//! Per-suit storage with O(1) access.
//!
//! Backed by a fixed array with one entry per suit, indexed by
//! `Suit::index()`. Used to key the four foundations.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::Suit;

/// One `T` per suit.
///
/// ```
/// use klondike_core::core::{Suit, SuitMap};
///
/// let mut counts: SuitMap<u8> = SuitMap::new(|_| 0);
/// counts[Suit::Heart] += 1;
/// assert_eq!(counts[Suit::Heart], 1);
/// assert_eq!(counts[Suit::Spade], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    #[must_use]
    pub fn get(&self, suit: Suit) -> &T {
        &self.data[suit.index()]
    }

    pub fn get_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.data[suit.index()]
    }

    /// Iterate in foundation order (C, D, S, H).
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::FOUNDATION_ORDER
            .into_iter()
            .map(move |suit| (suit, self.get(suit)))
    }

    /// Iterate over values in index order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Default> Default for SuitMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        self.get(suit)
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        self.get_mut(suit)
    }
}
