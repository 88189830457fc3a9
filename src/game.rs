//! A Klondike session: configuration, RNG and the live state together.
//!
//! The free functions in `dealer`, `rules` and `hint` work on any
//! `GameState`; `Klondike` is the convenience owner a front end holds on to
//! between inputs.

use log::debug;

use crate::core::{Action, GameRng, GameState, KlondikeConfig, Pile, Result, Snapshot};
use crate::dealer::{deal_with_rng, draw_step, DrawOutcome};
use crate::hint::{self, Hint};
use crate::rules;

/// One game of Klondike and the means to start another.
///
/// ```
/// use klondike_core::{Klondike, KlondikeConfig};
///
/// let mut game = Klondike::new(KlondikeConfig::default().with_seed(42));
/// assert_eq!(game.snapshot().columns.len(), 7);
///
/// for action in game.legal_moves() {
///     println!("{action}");
/// }
/// game.draw();
/// assert!(!game.is_won());
/// ```
#[derive(Clone, Debug)]
pub struct Klondike {
    config: KlondikeConfig,
    rng: GameRng,
    state: GameState,
}

impl Klondike {
    /// Deal a new game.
    ///
    /// The first deal uses the configured seed directly, so it matches
    /// `new_game_with` for the same config. Later deals come from forks.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = deal_with_rng(&config, &mut GameRng::new(rng.seed()));
        debug!("new game with seed {}", rng.seed());
        Self { config, rng, state }
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// The live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Throw the current game away and deal the next one from this
    /// session's RNG.
    pub fn reset(&mut self) {
        self.state = deal_with_rng(&self.config, &mut self.rng.fork());
        debug!("game reset");
    }

    /// Draw from the stock, recycling the waste as needed.
    pub fn draw(&mut self) -> DrawOutcome {
        draw_step(&mut self.state, self.config.effective_draw_count())
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Action> {
        rules::legal_moves(&self.state)
    }

    /// Move cards between piles. The state is unchanged on error.
    pub fn apply_move(&mut self, from: Pile, to: Pile) -> Result<Action> {
        rules::apply_move(&mut self.state, from, to)
    }

    #[must_use]
    pub fn hints(&self) -> Vec<Hint> {
        hint::hints(&self.state)
    }

    pub fn auto_play(&mut self) -> Vec<Action> {
        hint::auto_play(&mut self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }
}
