//! Error types.
//!
//! Both pool errors are caller misuse or exhaustion signals, never
//! transient. The pool returns them immediately without recovery.

use thiserror::Error;

use crate::cards::CardColor;

/// Errors raised by `CardPool` operations.
///
/// Generic over the white card type so `CardNotInPlay` can hand the
/// offending card back to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError<W> {
    /// A draw or advance asked for more cards than remain undrawn.
    #[error("cannot take {requested} {pool} card(s): only {available} undrawn")]
    EmptyPool {
        pool: CardColor,
        requested: usize,
        available: usize,
    },
    /// `discard` named a white card that is not currently in play.
    #[error("{0:?} not found in play")]
    CardNotInPlay(W),
}

impl<W> PoolError<W> {
    /// True for exhaustion of either undrawn pool.
    #[must_use]
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, PoolError::EmptyPool { .. })
    }
}

/// Errors raised while loading a `CardSet`.
#[derive(Debug, Error)]
pub enum CardSetError {
    #[error("malformed card set: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{color} card #{index} has no text")]
    BlankCard { color: CardColor, index: usize },
}
