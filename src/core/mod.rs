//! Core engine types: cards, decks, piles, state, actions, RNG, configuration.
//!
//! Everything here is a value type or a plain container. The rules that
//! decide which transfers are legal live in `rules`.

pub mod card;
pub mod deck;
pub mod suit_map;
pub mod pile;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
pub use suit_map::SuitMap;
pub use pile::{ColumnId, Pile, COLUMN_COUNT};
pub use rng::GameRng;
pub use config::KlondikeConfig;
pub use action::Action;
pub use error::{MoveError, Result};
pub use state::{ColumnView, FoundationView, GameState, Snapshot};
