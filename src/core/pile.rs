//! Opaque handles for the containers a card can move between.
//!
//! Callers pick their own user-facing naming (the `Display` impls give a
//! reasonable default); the engine only ever compares handles.

use serde::{Deserialize, Serialize};

use super::card::Suit;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// Tableau column identifier, 0-based internally.
///
/// `Display` prints the 1-based number players see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColumnId(u8);

impl ColumnId {
    /// Column for a 0-based index, `None` past the seventh column.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < COLUMN_COUNT).then(|| Self(index as u8))
    }

    /// Column for a 1-based number as shown to players.
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        Self::new(number.checked_sub(1)?)
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all columns, left to right.
    ///
    /// ```
    /// use klondike_core::core::ColumnId;
    ///
    /// let columns: Vec<_> = ColumnId::all().collect();
    /// assert_eq!(columns.len(), 7);
    /// assert_eq!(columns[0].index(), 0);
    /// assert_eq!(columns[6].to_string(), "7");
    /// ```
    pub fn all() -> impl Iterator<Item = ColumnId> {
        (0..COLUMN_COUNT as u8).map(ColumnId)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl TryFrom<u8> for ColumnId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(index)).ok_or_else(|| format!("no tableau column at index {index}"))
    }
}

impl From<ColumnId> for u8 {
    fn from(column: ColumnId) -> Self {
        column.0
    }
}

/// A move endpoint.
///
/// The stock is not a pile here: it is only touched by the draw step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    /// Top card of the waste (talon).
    Waste,
    /// The foundation for a suit.
    Foundation(Suit),
    /// A tableau column.
    Column(ColumnId),
}

impl Pile {
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, Pile::Foundation(_))
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Waste => f.write_str("waste"),
            Pile::Foundation(suit) => write!(f, "foundation {suit}"),
            Pile::Column(column) => write!(f, "column {column}"),
        }
    }
}

impl From<ColumnId> for Pile {
    fn from(column: ColumnId) -> Self {
        Pile::Column(column)
    }
}

impl From<Suit> for Pile {
    fn from(suit: Suit) -> Self {
        Pile::Foundation(suit)
    }
}
