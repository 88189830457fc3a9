//! Game configuration.

use serde::{Deserialize, Serialize};

/// Klondike configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards turned from the stock per draw (classic Klondike: 3).
    /// Values below 1 are treated as 1.
    pub draw_count: usize,

    /// Shuffle seed. `None` picks a random seed per game.
    pub seed: Option<u64>,

    /// Draw once from the stock straight after dealing, so the game opens
    /// with a playable waste card.
    pub opening_draw: bool,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            draw_count: 3,
            seed: None,
            opening_draw: true,
        }
    }
}

impl KlondikeConfig {
    /// Set the number of cards per draw.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the opening draw.
    #[must_use]
    pub fn with_opening_draw(mut self, enabled: bool) -> Self {
        self.opening_draw = enabled;
        self
    }

    /// Draw count clamped to at least one card.
    #[must_use]
    pub fn effective_draw_count(&self) -> usize {
        self.draw_count.max(1)
    }
}
