//! Card pool configuration.
//!
//! Games configure a pool at construction by providing a `DeckConfig`:
//! - `seed`: Root seed for the black and white selection streams
//! - `draw_order`: How a card is picked out of an undrawn pool

use serde::{Deserialize, Serialize};

/// How cards are picked from an undrawn pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOrder {
    /// Uniformly random pick from the remaining cards (seeded).
    #[default]
    Random,
    /// Cards come out in the order they were supplied at construction.
    ///
    /// Useful for scripted games and fixed test decks.
    Sequential,
}

/// Configuration for a `CardPool`.
///
/// ```
/// use cardczar::core::{DeckConfig, DrawOrder};
///
/// let config = DeckConfig::new(7).sequential();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.draw_order, DrawOrder::Sequential);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Root RNG seed.
    pub seed: u64,

    /// Selection strategy for draws and new black cards.
    pub draw_order: DrawOrder,
}

impl DeckConfig {
    /// Create a configuration with random draw order and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draw_order: DrawOrder::Random,
        }
    }

    /// Draw cards in construction order instead of at random.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.draw_order = DrawOrder::Sequential;
        self
    }

    /// Set the draw order.
    #[must_use]
    pub fn with_draw_order(mut self, order: DrawOrder) -> Self {
        self.draw_order = order;
        self
    }
}
