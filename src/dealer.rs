//! Dealing and drawing.
//!
//! ## Deal
//!
//! Cards are dealt round-robin: pass `s` gives one face-down card to every
//! column from `s` rightwards, so column `i` ends up with `i + 1` cards.
//! Each column then turns its front card face up and the remaining 24 cards
//! become the stock.
//!
//! ## Draw and recycle
//!
//! A draw turns up to `draw_count` cards from the stock onto the waste, one
//! at a time, so the last card turned is the playable one.
//!
//! When the stock is too short for a full draw, the waste is turned back
//! into the stock. The waste is reversed (restoring the order the cards
//! were drawn in) and the stragglers left in the stock are pushed onto its
//! front one by one. Recycling never shuffles: the draw order is a fixed
//! cycle. If that leaves enough cards, a draw follows straight away.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Card, ColumnId, Deck, GameRng, GameState, KlondikeConfig, Rank, Suit};

/// What a draw step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Cards moved from the stock to the waste.
    Drew(usize),
    /// The waste was turned back into the stock, then `drawn` cards were
    /// drawn from it.
    Recycled { drawn: usize },
    /// The stock is too short to draw from and the waste is empty.
    NoCardsLeft,
}

/// The 52 cards, suit by suit (C, D, S, H), Ace to King.
#[must_use]
pub fn standard_deck() -> Deck {
    Suit::FOUNDATION_ORDER
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Shuffle a standard deck with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Deck {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

/// Lay out `deck` into a fresh game. Cards left over form the stock.
#[must_use]
pub fn deal(mut deck: Deck) -> GameState {
    let mut state = GameState::new();

    for pass in ColumnId::all() {
        for id in ColumnId::all().filter(|&id| id >= pass) {
            if let Some(card) = deck.take_one(0) {
                state.column_mut(id).push_hidden(card);
            }
        }
    }
    for column in &mut state.columns {
        column.flip();
    }

    state.stock = deck;
    debug!("dealt tableau, {} cards in stock", state.stock.len());
    state
}

/// Shuffle and deal a new game with the default rules.
///
/// A seed makes the deal reproducible; without one a random seed is used.
#[must_use]
pub fn new_game(seed: Option<u64>) -> GameState {
    let config = KlondikeConfig {
        seed,
        ..KlondikeConfig::default()
    };
    new_game_with(&config)
}

/// Shuffle and deal a new game following `config`.
#[must_use]
pub fn new_game_with(config: &KlondikeConfig) -> GameState {
    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    deal_with_rng(config, &mut rng)
}

/// Shuffle with `rng` and deal following `config`.
#[must_use]
pub fn deal_with_rng(config: &KlondikeConfig, rng: &mut GameRng) -> GameState {
    let mut state = deal(shuffled_deck(rng));
    if config.opening_draw {
        draw_step(&mut state, config.effective_draw_count());
    }
    state
}

/// Move up to `count` cards from the stock top onto the waste top.
fn draw(state: &mut GameState, count: usize) -> usize {
    let mut drawn = 0;
    while drawn < count {
        let Some(card) = state.stock.take_one(0) else {
            break;
        };
        state.waste.push_front(card);
        drawn += 1;
    }
    drawn
}

/// Perform one draw, recycling the waste into the stock when the stock is
/// too short for a full draw.
pub fn draw_step(state: &mut GameState, draw_count: usize) -> DrawOutcome {
    let draw_count = draw_count.max(1);
    let before = state.card_count();

    if state.stock.len() >= draw_count {
        let drawn = draw(state, draw_count);
        debug!("drew {drawn} cards, {} left in stock", state.stock.len());
        return DrawOutcome::Drew(drawn);
    }

    if state.waste.is_empty() {
        warn!(
            "stock has {} cards and the waste is empty, nothing to deal",
            state.stock.len()
        );
        return DrawOutcome::NoCardsLeft;
    }

    let mut rebuilt: Vec<Card> = std::mem::take(&mut state.waste).into_cards();
    rebuilt.reverse();
    while let Some(card) = state.stock.take_one(0) {
        rebuilt.insert(0, card);
    }
    state.stock = Deck::from_cards(rebuilt);

    let drawn = if state.stock.len() >= draw_count {
        draw(state, draw_count)
    } else {
        0
    };
    debug!("recycled waste into stock of {}, drew {drawn}", state.stock.len() + drawn);
    debug_assert_eq!(state.card_count(), before, "recycle changed the card count");

    DrawOutcome::Recycled { drawn }
}
