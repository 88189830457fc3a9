//! Move execution.
//!
//! `apply_move` never trusts an earlier enumeration: it re-checks the move
//! against the state it is handed and only then mutates. A rejected move
//! leaves every container exactly as it was.

use log::debug;

use crate::core::{Action, Card, ColumnId, GameState, MoveError, Pile, Result, Suit};

use super::validator::{can_place_on_tableau, fitting_run_start};

/// Move cards from `from` to `to`.
///
/// Supported routes:
/// - column or waste to a foundation (one card)
/// - waste or foundation to a column (one card)
/// - column to column (the run that fits, in order)
///
/// Returns the applied move.
pub fn apply_move(state: &mut GameState, from: Pile, to: Pile) -> Result<Action> {
    if from == to {
        return Err(MoveError::SamePile(from));
    }

    let before = state.card_count();
    let action = match (from, to) {
        (Pile::Column(src), Pile::Column(dst)) => move_run(state, src, dst)?,
        (Pile::Column(_) | Pile::Waste, Pile::Foundation(suit)) => move_to_foundation(state, from, suit)?,
        (Pile::Waste | Pile::Foundation(_), Pile::Column(dst)) => move_to_column(state, from, dst)?,
        _ => return Err(MoveError::UnsupportedRoute { from, to }),
    };

    debug_assert_eq!(state.card_count(), before, "card count changed by {action}");
    debug_assert!(state.has_unique_cards(), "duplicate card after {action}");
    debug!("applied {action}");
    Ok(action)
}

/// Remove the playable card of a single-card source.
fn take_top(state: &mut GameState, pile: Pile) -> Option<Card> {
    match pile {
        Pile::Waste => state.waste.take_one(0),
        Pile::Foundation(suit) => state.foundation_mut(suit).take_one(),
        Pile::Column(id) => state.column_mut(id).take_one(-1),
    }
}

fn move_to_foundation(state: &mut GameState, from: Pile, suit: Suit) -> Result<Action> {
    let to = Pile::Foundation(suit);
    let card = state.top_of(from).ok_or(MoveError::EmptySource(from))?;
    let foundation = state.foundation(suit);
    if !foundation.can_accept(card) {
        return Err(MoveError::Rejected { card, from, to });
    }
    let dest_top = foundation.top_card();

    if let Some(taken) = take_top(state, from) {
        let placed = state.foundation_mut(suit).append_one(taken);
        debug_assert!(placed.is_ok(), "validated card {taken} refused by {to}");
    }
    Ok(Action::single(from, to, card, dest_top))
}

fn move_to_column(state: &mut GameState, from: Pile, dst: ColumnId) -> Result<Action> {
    let to = Pile::Column(dst);
    let card = state.top_of(from).ok_or(MoveError::EmptySource(from))?;
    let dest_top = state.column(dst).top();
    if !can_place_on_tableau(Some(card), dest_top) {
        return Err(MoveError::Rejected { card, from, to });
    }

    if let Some(taken) = take_top(state, from) {
        state.column_mut(dst).append_one(taken);
    }
    Ok(Action::single(from, to, card, dest_top))
}

fn move_run(state: &mut GameState, src: ColumnId, dst: ColumnId) -> Result<Action> {
    let from = Pile::Column(src);
    let to = Pile::Column(dst);
    if state.column(src).top().is_none() {
        return Err(MoveError::EmptySource(from));
    }
    let dest_top = state.column(dst).top();
    let idx = fitting_run_start(state.column(src), dest_top).ok_or(MoveError::NoFittingCard { from, to })?;

    let cards = state.column_mut(src).take_range(idx as isize);
    let action = Action::new(from, to, &cards, dest_top);
    state.column_mut(dst).append_many(cards);
    Ok(action)
}
