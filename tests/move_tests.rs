//! Move enumeration and execution integration tests.

use klondike_core::{
    apply_move, auto_play, hints, legal_moves, Card, ColumnId, Deck, GameState, Klondike,
    KlondikeConfig, MoveError, Pile, Rank, Snapshot, Suit, TableauColumn,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::from_value(rank).unwrap(), suit)
}

fn col(n: usize) -> Pile {
    Pile::Column(ColumnId::from_number(n).unwrap())
}

/// A state one step from winning: every foundation holds Ace to Queen and
/// the four Kings are spread over the waste and the tableau.
fn nearly_won() -> GameState {
    let mut state = GameState::new();
    for suit in Suit::FOUNDATION_ORDER {
        for rank in 1..=12 {
            state.foundation_mut(suit).append_one(card(rank, suit)).unwrap();
        }
    }
    state.waste.append_one(card(13, Suit::Heart));
    state.columns[0] = TableauColumn::from_parts(Deck::new(), Deck::from_cards(vec![card(13, Suit::Club)]));
    state.columns[3] = TableauColumn::from_parts(
        Deck::from_cards(vec![card(13, Suit::Spade)]),
        Deck::from_cards(vec![card(13, Suit::Diamond)]),
    );
    state
}

// =============================================================================
// Enumeration Tests
// =============================================================================

/// Test that every enumerated move on a dealt game can be applied.
#[test]
fn test_enumerated_moves_apply() {
    for seed in 0..20 {
        let state = klondike_core::new_game(Some(seed));
        for action in legal_moves(&state) {
            let mut trial = state.clone();
            let applied = apply_move(&mut trial, action.from, action.to)
                .unwrap_or_else(|e| panic!("seed {seed}: {action} failed: {e}"));
            assert_eq!(applied, action, "seed {seed}");
            assert!(trial.is_full_deck(), "seed {seed}: {action}");
        }
    }
}

/// Test that enumeration is repeatable and matches the state method.
#[test]
fn test_enumeration_is_stable() {
    let state = klondike_core::new_game(Some(31));
    assert_eq!(legal_moves(&state), legal_moves(&state));
    assert_eq!(state.legal_moves(), legal_moves(&state));
}

/// Test that a lone King at the bottom of a column is not offered to an
/// empty column.
#[test]
fn test_lone_king_stays_put() {
    let mut state = GameState::new();
    state.columns[0] = TableauColumn::from_parts(
        Deck::new(),
        Deck::from_cards(vec![card(13, Suit::Spade), card(12, Suit::Heart)]),
    );

    let moves = legal_moves(&state);
    assert!(moves.iter().all(|a| a.from != col(1)), "{moves:?}");
}

/// Test that a King with cards beneath it is offered to an empty column.
#[test]
fn test_buried_king_offered() {
    let mut state = GameState::new();
    state.columns[1] = TableauColumn::from_parts(
        Deck::from_cards(vec![card(4, Suit::Club)]),
        Deck::from_cards(vec![card(13, Suit::Spade), card(12, Suit::Heart)]),
    );

    let moves = legal_moves(&state);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|a| a.from == col(2) && a.to != col(2)));
    assert!(moves.iter().all(|a| a.cards.len() == 2));
}

// =============================================================================
// Execution Tests
// =============================================================================

/// Test that illegal requests are refused with no change to the game.
#[test]
fn test_illegal_moves_are_no_ops() {
    let mut state = klondike_core::new_game(Some(12));
    let legal = legal_moves(&state);
    let before = state.clone();

    let mut piles: Vec<Pile> = ColumnId::all().map(Pile::Column).collect();
    piles.push(Pile::Waste);
    piles.extend(Suit::FOUNDATION_ORDER.map(Pile::Foundation));

    for &from in &piles {
        for &to in &piles {
            if legal.iter().any(|a| a.from == from && a.to == to) {
                continue;
            }
            assert!(apply_move(&mut state, from, to).is_err(), "{from} -> {to}");
            assert_eq!(state, before, "{from} -> {to}");
        }
    }
}

/// Test that a move to the wrong foundation names the card in the error.
#[test]
fn test_wrong_foundation_error() {
    let mut state = GameState::new();
    state.waste.append_one(card(1, Suit::Heart));

    let err = apply_move(&mut state, Pile::Waste, Pile::Foundation(Suit::Spade)).unwrap_err();
    assert_eq!(
        err,
        MoveError::Rejected {
            card: card(1, Suit::Heart),
            from: Pile::Waste,
            to: Pile::Foundation(Suit::Spade),
        }
    );
    assert_eq!(err.to_string(), "A♥ cannot go from waste to foundation ♠");
}

/// Test that moving the last face-up card turns the next one over.
#[test]
fn test_move_reveals_hidden_card() {
    let mut state = GameState::new();
    state.columns[4] = TableauColumn::from_parts(
        Deck::from_cards(vec![card(2, Suit::Club), card(9, Suit::Club)]),
        Deck::from_cards(vec![card(6, Suit::Heart)]),
    );
    state.columns[5] = TableauColumn::from_parts(Deck::new(), Deck::from_cards(vec![card(7, Suit::Spade)]));

    apply_move(&mut state, col(5), col(6)).unwrap();

    assert_eq!(state.columns[4].top(), Some(card(2, Suit::Club)));
    assert_eq!(state.columns[4].hidden_count(), 1);
    assert_eq!(state.columns[5].visible().len(), 2);
}

// =============================================================================
// Winning Tests
// =============================================================================

/// Test that auto-play finishes a game whose last cards are all playable.
#[test]
fn test_auto_play_wins() {
    let mut state = nearly_won();
    assert!(!state.is_won());

    let moves = auto_play(&mut state);

    assert_eq!(moves.len(), 4);
    assert!(state.is_won());
    assert!(state.is_full_deck());
    // only a King taken back down from a foundation is left
    assert!(legal_moves(&state).iter().all(|a| matches!(a.from, Pile::Foundation(_))));
}

/// Test that a hint on a nearly-won game points at a foundation.
#[test]
fn test_hints_point_home() {
    let state = nearly_won();
    let hints = hints(&state);

    assert!(!hints.is_empty());
    assert!(hints.iter().any(|h| h.action.to.is_foundation()));
    assert!(!state.is_won());
}

// =============================================================================
// Session and Snapshot Tests
// =============================================================================

/// Test a short session: draw, move, hint, reset.
#[test]
fn test_session_flow() {
    let mut game = Klondike::new(KlondikeConfig::default().with_seed(77));
    assert_eq!(game.snapshot().remaining, 24);

    game.draw();
    if let Some(action) = game.legal_moves().into_iter().next() {
        game.apply_move(action.from, action.to).unwrap();
    }
    assert!(game.state().is_full_deck());

    let first = game.state().clone();
    game.reset();
    assert_ne!(game.state(), &first);
    assert_eq!(game.snapshot().remaining, 24);
}

/// Test that a snapshot survives a trip through JSON.
#[test]
fn test_snapshot_json() {
    let state = klondike_core::new_game(Some(4));
    let snapshot = state.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert_eq!(back.columns.len(), 7);
    assert_eq!(back.foundations.len(), 4);
    assert_eq!(back.stock_len + back.waste.len(), back.remaining);
}

/// Test that moves serialize for a front end.
#[test]
fn test_action_json() {
    let state = klondike_core::new_game(Some(4));
    let moves = legal_moves(&state);

    let json = serde_json::to_string(&moves).unwrap();
    let back: Vec<klondike_core::Action> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, moves);
}
