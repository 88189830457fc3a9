//! Hints and foundation auto-play.
//!
//! Hints look one move ahead: each legal move is tried on a deep clone of
//! the state and the moves it would open up are recorded. The state passed
//! in is never touched.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameState};
use crate::rules::{apply_move, legal_moves};

/// A legal move and what would be playable after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub action: Action,
    pub follow_ups: Vec<Action>,
}

impl Hint {
    /// Whether the move leaves the player with something to do.
    #[must_use]
    pub fn opens_play(&self) -> bool {
        !self.follow_ups.is_empty()
    }
}

/// Every legal move in `state`, each with the legal moves of the state it
/// leads to.
#[must_use]
pub fn hints(state: &GameState) -> Vec<Hint> {
    legal_moves(state)
        .into_iter()
        .filter_map(|action| {
            let mut trial = state.clone();
            apply_move(&mut trial, action.from, action.to).ok()?;
            Some(Hint {
                follow_ups: legal_moves(&trial),
                action,
            })
        })
        .collect()
}

/// Keep moving cards onto foundations until none can go. Returns the moves
/// made, in order.
pub fn auto_play(state: &mut GameState) -> Vec<Action> {
    let mut applied = Vec::new();
    loop {
        let next = legal_moves(state).into_iter().find(|a| a.to.is_foundation());
        let Some(action) = next else {
            break;
        };
        match apply_move(state, action.from, action.to) {
            Ok(done) => applied.push(done),
            Err(_) => break,
        }
    }
    if !applied.is_empty() {
        debug!("auto-played {} cards to foundations", applied.len());
    }
    applied
}
