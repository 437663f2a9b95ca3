//! Serializable view of a card pool's derived state.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::PlaySet;
use crate::cards::Card;

/// Every derived set of a `CardPool`, captured at one point in time.
///
/// Undrawn pools are stored as sets so two pools holding the same cards
/// compare equal regardless of internal order. RNG position is not part of
/// the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Serialize, W: Serialize",
    deserialize = "B: Deserialize<'de>, W: Deserialize<'de>"
))]
pub struct PoolSnapshot<B: Card, W: Card> {
    /// Black cards not yet brought into play.
    pub undrawn_black: PlaySet<B>,
    /// Black card awaiting a ruling.
    pub current: Option<B>,
    /// Judged black cards, oldest first.
    pub resolved: Vector<B>,
    /// White cards not yet dealt.
    pub undrawn_white: PlaySet<W>,
    /// Dealt white cards not yet discarded.
    pub in_play: PlaySet<W>,
    /// White cards removed from play.
    pub discarded: PlaySet<W>,
    /// Black cards advanced this game.
    pub round: u32,
}

impl<B: Card, W: Card> PoolSnapshot<B, W> {
    /// All black cards across undrawn, current and resolved.
    #[must_use]
    pub fn all_black(&self) -> PlaySet<B> {
        let mut all = self.undrawn_black.clone();
        for card in self.current.iter().chain(self.resolved.iter()) {
            all.insert(card.clone());
        }
        all
    }

    /// All white cards across undrawn, in play and discarded.
    #[must_use]
    pub fn all_white(&self) -> PlaySet<W> {
        self.undrawn_white
            .clone()
            .union(self.in_play.clone())
            .union(self.discarded.clone())
    }

    /// Total number of black card slots, counting duplicates across states.
    ///
    /// Equals `all_black().len()` exactly when the black states are disjoint.
    #[must_use]
    pub fn black_count(&self) -> usize {
        self.undrawn_black.len() + usize::from(self.current.is_some()) + self.resolved.len()
    }

    /// Total number of white card slots, counting duplicates across states.
    #[must_use]
    pub fn white_count(&self) -> usize {
        self.undrawn_white.len() + self.in_play.len() + self.discarded.len()
    }
}
