//! Undrawn card storage.
//!
//! An `UndrawnPool` holds the cards of one color that have not been brought
//! into play. It is index-addressable so a pick can be made uniformly at
//! random from a seeded RNG, and it is backed by `im::Vector` so refilling
//! it from the master list on reshuffle is O(1).

use im::Vector;

use super::PlaySet;

use crate::cards::Card;
use crate::core::{DrawOrder, GameRng};

/// Cards of one color not yet drawn this game.
///
/// ## Usage
///
/// ```
/// use cardczar::core::{DrawOrder, GameRng};
/// use cardczar::deck::UndrawnPool;
///
/// let mut pool = UndrawnPool::new(["A1", "A2", "A3"].into_iter().collect());
/// let mut rng = GameRng::new(1);
///
/// assert_eq!(pool.take(DrawOrder::Sequential, &mut rng), Some("A1"));
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UndrawnPool<T: Clone> {
    cards: Vector<T>,
}

impl<T: Card> UndrawnPool<T> {
    /// Create a pool holding `cards`, which must already be free of duplicates.
    #[must_use]
    pub fn new(cards: Vector<T>) -> Self {
        Self { cards }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card is still undrawn. Linear in the pool size.
    #[must_use]
    pub fn contains(&self, card: &T) -> bool {
        self.cards.contains(card)
    }

    /// Iterate over the remaining cards.
    ///
    /// Order is the construction order minus drawn cards, not draw order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cards.iter()
    }

    /// Remaining cards as a set.
    #[must_use]
    pub fn to_set(&self) -> PlaySet<T> {
        self.cards.iter().cloned().collect()
    }

    /// Remove and return one card.
    ///
    /// Returns `None` when the pool is empty.
    pub fn take(&mut self, order: DrawOrder, rng: &mut GameRng) -> Option<T> {
        if self.cards.is_empty() {
            return None;
        }

        match order {
            DrawOrder::Sequential => self.cards.pop_front(),
            DrawOrder::Random => {
                let index = rng.gen_range_usize(0..self.cards.len());
                Some(self.cards.remove(index))
            }
        }
    }
}
