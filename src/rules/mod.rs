//! Klondike rules: what may move where, and moving it.
//!
//! - `validator`: pure legality predicates
//! - `enumerator`: every legal move for a state, in a stable order
//! - `executor`: re-validate and apply one move, all or nothing
//!
//! Only properly sequenced runs move between columns. A column's movable
//! cards are the descending, alternating-color run ending at its top card;
//! cards below a break in that run stay where they are.

pub mod validator;
pub mod enumerator;
pub mod executor;

pub use validator::{can_move_to_foundation, can_place_on_tableau, fitting_run_start, is_valid_run};
pub use enumerator::legal_moves;
pub use executor::apply_move;
