//! Legal move enumeration.
//!
//! Moves are listed in a fixed order so hint output is stable:
//!
//! 1. each column, left to right: its top card to a foundation, then a run
//!    from it to every other column that can take one
//! 2. the waste card to a foundation
//! 3. the waste card to every column
//! 4. each foundation's top card (C, D, S, H) to every column
//!
//! Foundation targets stop at the first suit that accepts the card.

use log::trace;

use crate::core::{Action, Card, ColumnId, GameState, Pile, Suit};

use super::validator::{can_move_to_foundation, can_place_on_tableau, fitting_run_start};

/// Every legal move in `state`. Empty when nothing can move.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Action> {
    let mut actions = Vec::new();

    for source in ColumnId::all() {
        column_moves(state, source, &mut actions);
    }
    waste_moves(state, &mut actions);
    foundation_moves(state, &mut actions);

    trace!("enumerated {} legal moves", actions.len());
    actions
}

fn first_accepting_foundation(state: &GameState, card: Option<Card>) -> Option<Suit> {
    Suit::FOUNDATION_ORDER
        .into_iter()
        .find(|&suit| can_move_to_foundation(card, state.foundation(suit)))
}

fn column_moves(state: &GameState, source: ColumnId, out: &mut Vec<Action>) {
    let column = state.column(source);
    let Some(top) = column.top() else {
        return;
    };

    if let Some(suit) = first_accepting_foundation(state, Some(top)) {
        let dest_top = state.foundation(suit).top_card();
        out.push(Action::single(Pile::Column(source), Pile::Foundation(suit), top, dest_top));
    }

    let cards = column.visible().cards();
    for dest in ColumnId::all().filter(|&d| d != source) {
        let dest_top = state.column(dest).top();
        let Some(idx) = fitting_run_start(column, dest_top) else {
            continue;
        };
        // moving a lone-standing King to another empty column gains nothing
        if idx == 0 && column.is_king_anchored() {
            continue;
        }
        out.push(Action::new(Pile::Column(source), Pile::Column(dest), &cards[idx..], dest_top));
    }
}

fn waste_moves(state: &GameState, out: &mut Vec<Action>) {
    let Some(card) = state.waste_top() else {
        return;
    };

    if let Some(suit) = first_accepting_foundation(state, Some(card)) {
        let dest_top = state.foundation(suit).top_card();
        out.push(Action::single(Pile::Waste, Pile::Foundation(suit), card, dest_top));
    }

    for dest in ColumnId::all() {
        let dest_top = state.column(dest).top();
        if can_place_on_tableau(Some(card), dest_top) {
            out.push(Action::single(Pile::Waste, Pile::Column(dest), card, dest_top));
        }
    }
}

fn foundation_moves(state: &GameState, out: &mut Vec<Action>) {
    for suit in Suit::FOUNDATION_ORDER {
        let Some(card) = state.foundation(suit).top_card() else {
            continue;
        };
        for dest in ColumnId::all() {
            let dest_top = state.column(dest).top();
            if can_place_on_tableau(Some(card), dest_top) {
                out.push(Action::single(Pile::Foundation(suit), Pile::Column(dest), card, dest_top));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Rank};
    use crate::piles::TableauColumn;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::from_value(rank).unwrap(), suit)
    }

    fn col(n: usize) -> ColumnId {
        ColumnId::from_number(n).unwrap()
    }

    fn set_column(state: &mut GameState, n: usize, hidden: &[Card], visible: &[Card]) {
        state.columns[n - 1] = TableauColumn::from_parts(
            Deck::from_cards(hidden.to_vec()),
            Deck::from_cards(visible.to_vec()),
        );
    }

    #[test]
    fn test_empty_state_has_no_moves() {
        assert!(legal_moves(&GameState::new()).is_empty());
    }

    #[test]
    fn test_column_to_foundation() {
        let mut state = GameState::new();
        set_column(&mut state, 2, &[card(9, Suit::Club)], &[card(1, Suit::Diamond)]);

        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, Pile::Column(col(2)));
        assert_eq!(moves[0].to, Pile::Foundation(Suit::Diamond));
        assert_eq!(moves[0].cards.as_slice(), &[card(1, Suit::Diamond)]);
    }

    #[test]
    fn test_run_moves_with_destination_top() {
        let mut state = GameState::new();
        set_column(
            &mut state,
            1,
            &[card(2, Suit::Club)],
            &[card(9, Suit::Heart), card(8, Suit::Spade)],
        );
        set_column(&mut state, 4, &[card(3, Suit::Club)], &[card(10, Suit::Club)]);

        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 1);
        let action = &moves[0];
        assert_eq!(action.from, Pile::Column(col(1)));
        assert_eq!(action.to, Pile::Column(col(4)));
        assert_eq!(action.cards.as_slice(), &[card(9, Suit::Heart), card(8, Suit::Spade)]);
        assert_eq!(action.dest_top, Some(card(10, Suit::Club)));
    }

    #[test]
    fn test_king_anchored_column_not_moved_to_empty() {
        let mut state = GameState::new();
        set_column(&mut state, 1, &[], &[card(13, Suit::Heart)]);

        assert!(legal_moves(&state).is_empty());

        // with something hidden under it, the King is worth moving
        set_column(&mut state, 1, &[card(4, Suit::Club)], &[card(13, Suit::Heart)]);
        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|a| a.from == Pile::Column(col(1))));
    }

    #[test]
    fn test_waste_moves() {
        let mut state = GameState::new();
        state.waste.append_many(vec![card(12, Suit::Heart), card(5, Suit::Club)]);
        set_column(&mut state, 3, &[], &[card(13, Suit::Spade)]);
        set_column(&mut state, 5, &[], &[card(13, Suit::Club)]);

        let moves = legal_moves(&state);
        let waste: Vec<_> = moves.iter().filter(|a| a.from == Pile::Waste).collect();
        assert_eq!(waste.len(), 2);
        assert_eq!(waste[0].to, Pile::Column(col(3)));
        assert_eq!(waste[1].to, Pile::Column(col(5)));
        assert_eq!(waste[0].dest_top, Some(card(13, Suit::Spade)));
    }

    #[test]
    fn test_waste_to_foundation_then_columns() {
        let mut state = GameState::new();
        state.waste.append_one(card(1, Suit::Heart));

        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Pile::Foundation(Suit::Heart));
    }

    #[test]
    fn test_foundation_to_column() {
        let mut state = GameState::new();
        for rank in 1..=4 {
            state.foundation_mut(Suit::Diamond).append_one(card(rank, Suit::Diamond)).unwrap();
        }
        set_column(&mut state, 6, &[], &[card(5, Suit::Spade)]);
        set_column(&mut state, 7, &[], &[card(5, Suit::Club)]);

        let moves = legal_moves(&state);
        let back: Vec<_> = moves
            .iter()
            .filter(|a| a.from == Pile::Foundation(Suit::Diamond))
            .map(|a| a.to)
            .collect();
        assert_eq!(back, vec![Pile::Column(col(6)), Pile::Column(col(7))]);
    }

    #[test]
    fn test_columns_listed_before_waste() {
        let mut state = GameState::new();
        set_column(&mut state, 1, &[], &[card(1, Suit::Spade)]);
        set_column(&mut state, 2, &[], &[card(3, Suit::Diamond)]);
        state.waste.append_one(card(1, Suit::Club));
        state.foundation_mut(Suit::Diamond).append_one(card(1, Suit::Diamond)).unwrap();
        state.foundation_mut(Suit::Diamond).append_one(card(2, Suit::Diamond)).unwrap();

        let moves = legal_moves(&state);
        let routes: Vec<_> = moves.iter().map(|a| (a.from, a.to)).collect();
        assert_eq!(
            routes,
            vec![
                (Pile::Column(col(1)), Pile::Foundation(Suit::Spade)),
                (Pile::Column(col(2)), Pile::Foundation(Suit::Diamond)),
                (Pile::Waste, Pile::Foundation(Suit::Club)),
            ]
        );
    }
}
