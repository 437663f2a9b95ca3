//! Card bound and card colors.
//!
//! Cards are opaque values to the pool. Anything that can live in a
//! hash set and be printed for diagnostics is a card.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Bound for values the pool can track.
///
/// Blanket-implemented, so `&'static str`, `String`, integer IDs and the
/// crate's own `Prompt`/`Answer` all work out of the box.
pub trait Card: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Card for T {}

/// The two disjoint card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    /// Prompt cards, one judged per round.
    Black,
    /// Answer cards, dealt to players and submitted.
    White,
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardColor::Black => f.write_str("black"),
            CardColor::White => f.write_str("white"),
        }
    }
}
