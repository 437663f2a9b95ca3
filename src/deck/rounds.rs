//! Round iteration over a card pool.

use std::iter::FusedIterator;

use super::card_pool::CardPool;
use crate::cards::Card;

/// Iterator over rounds, created by `CardPool::rounds`.
///
/// Each step advances the pool to a new black card and yields it. Ends
/// once the undrawn black pool is empty; the last card stays current.
///
/// The iterator holds the pool mutably, so a game loop that deals cards
/// between rounds reaches it through `pool_mut`:
///
/// ```
/// use cardczar::core::DeckConfig;
/// use cardczar::deck::CardPool;
///
/// let mut pool = CardPool::with_config(["Q1", "Q2"], ["A1", "A2", "A3", "A4"], DeckConfig::new(3));
/// let mut rounds = pool.rounds();
///
/// while let Some(_prompt) = rounds.next() {
///     let hand = rounds.pool_mut().draw_white(2).unwrap();
///     let played: Vec<_> = hand.into_iter().collect();
///     rounds.pool_mut().discard(&played).unwrap();
/// }
///
/// assert_eq!(pool.discarded().len(), 4);
/// ```
#[derive(Debug)]
pub struct Rounds<'a, B: Card, W: Card> {
    pool: &'a mut CardPool<B, W>,
}

impl<'a, B: Card, W: Card> Rounds<'a, B, W> {
    pub(crate) fn new(pool: &'a mut CardPool<B, W>) -> Self {
        Self { pool }
    }

    /// The pool being iterated.
    #[must_use]
    pub fn pool(&self) -> &CardPool<B, W> {
        &*self.pool
    }

    /// Mutable access to the pool between rounds.
    pub fn pool_mut(&mut self) -> &mut CardPool<B, W> {
        &mut *self.pool
    }
}

impl<B: Card, W: Card> Iterator for Rounds<'_, B, W> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.pool.next_round()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pool.undrawn_black().len();
        (remaining, Some(remaining))
    }
}

impl<B: Card, W: Card> ExactSizeIterator for Rounds<'_, B, W> {}

impl<B: Card, W: Card> FusedIterator for Rounds<'_, B, W> {}
