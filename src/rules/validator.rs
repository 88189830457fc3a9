//! Pure move-legality predicates.
//!
//! Nothing here touches state; every function answers "would this be
//! legal" for the cards it is given.

use crate::core::Card;
use crate::piles::{Foundation, TableauColumn};

/// The alternating-color rule for building on a tableau column.
///
/// - no source card: never legal
/// - empty destination: only a King
/// - otherwise: opposite colors and the destination exactly one rank higher
///
/// ```
/// use klondike_core::core::{Card, Rank, Suit};
/// use klondike_core::rules::can_place_on_tableau;
///
/// let nine = Card::new(Rank::Nine, Suit::Heart);
/// let ten = Card::new(Rank::Ten, Suit::Spade);
/// let king = Card::new(Rank::King, Suit::Club);
///
/// assert!(can_place_on_tableau(Some(nine), Some(ten)));
/// assert!(!can_place_on_tableau(Some(ten), Some(nine)));
/// assert!(can_place_on_tableau(Some(king), None));
/// assert!(!can_place_on_tableau(Some(nine), None));
/// ```
#[must_use]
pub fn can_place_on_tableau(source: Option<Card>, destination: Option<Card>) -> bool {
    let Some(source) = source else {
        return false;
    };
    match destination {
        None => source.is_king(),
        Some(dest) => {
            source.color() != dest.color()
                && i16::from(dest.rank.value()) - i16::from(source.rank.value()) == 1
        }
    }
}

/// Whether `cards` (deepest first) form a descending alternating run.
/// Empty and single-card slices are trivially valid.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| can_place_on_tableau(Some(pair[1]), Some(pair[0])))
}

/// Whether `card` can go onto `foundation`.
#[must_use]
pub fn can_move_to_foundation(card: Option<Card>, foundation: &Foundation) -> bool {
    card.is_some_and(|c| foundation.can_accept(c))
}

/// Visible index in `column` where a movable run can be split off to land
/// on `dest_top`.
///
/// Only cards inside the column's top run are considered, scanning from
/// the top card down. Runs hold distinct ranks, so at most one index fits.
#[must_use]
pub fn fitting_run_start(column: &TableauColumn, dest_top: Option<Card>) -> Option<usize> {
    let start = column.run_start()?;
    let cards = column.visible().cards();
    (start..cards.len())
        .rev()
        .find(|&idx| can_place_on_tableau(Some(cards[idx]), dest_top))
}
