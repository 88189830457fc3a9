//! Move errors.

use thiserror::Error;

use super::card::Card;
use super::pile::Pile;

pub type Result<T> = std::result::Result<T, MoveError>;

/// Why a move was rejected. A rejected move never changes the state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cannot move {0} onto itself")]
    SamePile(Pile),
    #[error("{0} has no card to move")]
    EmptySource(Pile),
    #[error("{card} cannot go from {from} to {to}")]
    Rejected { card: Card, from: Pile, to: Pile },
    #[error("no card in {from} fits on {to}")]
    NoFittingCard { from: Pile, to: Pile },
    #[error("cards cannot move from {from} to {to}")]
    UnsupportedRoute { from: Pile, to: Pile },
}
