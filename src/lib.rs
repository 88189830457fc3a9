//! # klondike-core
//!
//! A rules engine for Klondike solitaire, with no user interface of its own.
//!
//! ## Design Principles
//!
//! 1. **Validate Before Mutating**: Every transfer is re-checked against the
//!    state it is applied to. A rejected move changes nothing.
//!
//! 2. **Value Semantics**: `GameState` clones deeply. A clone can be played
//!    forward freely without touching the original, which is what hints do.
//!
//! 3. **Reproducible Deals**: Shuffling goes through a seeded `GameRng`, so
//!    the same seed always deals the same game.
//!
//! ## Layout
//!
//! - Waste position 0 is the playable card (the last one drawn).
//! - Stock position 0 is the next card to draw.
//! - A column's top card is the last visible card; its next face-down card
//!   is the first hidden card.
//! - A foundation's top card is its last card.
//!
//! ## Modules
//!
//! - `core`: Cards, decks, piles, state, actions, RNG, configuration, errors
//! - `piles`: Tableau columns and foundations
//! - `rules`: Legality checks, move enumeration and move execution
//! - `dealer`: Shuffling, the opening deal, drawing and recycling
//! - `hint`: One-move lookahead and foundation auto-play
//! - `game`: The `Klondike` session type

pub mod core;
pub mod piles;
pub mod rules;
pub mod dealer;
pub mod hint;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit,
    Deck, SuitMap,
    ColumnId, Pile, COLUMN_COUNT,
    GameRng, KlondikeConfig,
    Action, MoveError, Result,
    ColumnView, FoundationView, GameState, Snapshot,
};

pub use crate::piles::{Foundation, TableauColumn};

pub use crate::rules::{
    apply_move, can_move_to_foundation, can_place_on_tableau, fitting_run_start, is_valid_run,
    legal_moves,
};

pub use crate::dealer::{deal, draw_step, new_game, new_game_with, shuffled_deck, standard_deck, DrawOutcome};

pub use crate::hint::{auto_play, hints, Hint};

pub use crate::game::Klondike;
