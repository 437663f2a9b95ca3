//! The card pool: every black and white card, and where each one is.
//!
//! Black cards move `undrawn -> current -> resolved`; white cards move
//! `undrawn -> in play -> discarded`. The pool exposes only those
//! transitions, so after every operation:
//!
//! - undrawn black, current and resolved partition the master black cards
//! - undrawn white, in play and discarded partition the master white cards
//!
//! ## Game States
//!
//! - `Fresh`: no current black card (after construction or reshuffle)
//! - `RoundActive`: a black card is awaiting a ruling, more remain
//! - `Exhausted`: the current black card is the last one
//!
//! `reshuffle` returns the pool to `Fresh` from any state.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::pool::UndrawnPool;
use super::PlaySet;
use super::rounds::Rounds;
use super::snapshot::PoolSnapshot;
use crate::cards::text::shorten;
use crate::cards::{Answer, Card, CardColor, CardSet, Prompt};
use crate::core::{DeckConfig, GameRng, GameRngState};
use crate::error::PoolError;

/// Where a game stands, derived from the black card states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolState {
    /// No black card has been drawn this game.
    Fresh,
    /// A black card is current and more remain undrawn.
    RoundActive,
    /// The current black card is the last one.
    Exhausted,
}

/// Card pool for one game session.
///
/// Generic over the black card type `B` and white card type `W`. Masters
/// are captured once at construction and never change; all other state is
/// derived from them and reset by `reshuffle`.
///
/// ## Usage
///
/// ```
/// use cardczar::deck::CardPool;
///
/// let mut pool = CardPool::new(["Q1", "Q2"], ["A1", "A2", "A3"]);
///
/// let prompt = pool.advance_black().unwrap();
/// assert!(prompt == "Q1" || prompt == "Q2");
///
/// let hand = pool.draw_white(2).unwrap();
/// assert_eq!(hand.len(), 2);
/// assert_eq!(pool.in_play().len(), 2);
///
/// let played: Vec<_> = hand.iter().take(1).copied().collect();
/// pool.discard(&played).unwrap();
/// assert_eq!(pool.discarded().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardPool<B: Card, W: Card> {
    config: DeckConfig,

    // === Masters (immutable after construction) ===
    master_black: Vector<B>,
    master_white: Vector<W>,

    // === Black ===
    black: UndrawnPool<B>,
    current: Option<B>,
    resolved: Vector<B>,

    // === White ===
    white: UndrawnPool<W>,
    in_play: PlaySet<W>,
    discarded: PlaySet<W>,

    // === Selection ===
    black_rng: GameRng,
    white_rng: GameRng,

    /// Black cards advanced this game.
    round: u32,
}

impl<B: Card, W: Card> CardPool<B, W> {
    /// Create a pool with the default configuration.
    ///
    /// Duplicate cards are dropped, keeping the first occurrence.
    pub fn new(
        black: impl IntoIterator<Item = B>,
        white: impl IntoIterator<Item = W>,
    ) -> Self {
        Self::with_config(black, white, DeckConfig::default())
    }

    /// Create a pool with an explicit configuration.
    pub fn with_config(
        black: impl IntoIterator<Item = B>,
        white: impl IntoIterator<Item = W>,
        config: DeckConfig,
    ) -> Self {
        let master_black = dedup(black);
        let master_white = dedup(white);

        let root = GameRng::new(config.seed);
        let black_rng = root.for_context("black");
        let white_rng = root.for_context("white");

        let mut pool = Self {
            config,
            black: UndrawnPool::new(Vector::new()),
            current: None,
            resolved: Vector::new(),
            white: UndrawnPool::new(Vector::new()),
            in_play: PlaySet::default(),
            discarded: PlaySet::default(),
            master_black,
            master_white,
            black_rng,
            white_rng,
            round: 0,
        };
        pool.reshuffle();
        pool
    }

    /// Start a new game with the same cards.
    ///
    /// Refills both undrawn pools from the masters and clears the current
    /// card, resolved, in-play and discarded sets. The RNG streams keep
    /// their position, so consecutive games draw in different orders.
    pub fn reshuffle(&mut self) {
        self.black = UndrawnPool::new(self.master_black.clone());
        self.white = UndrawnPool::new(self.master_white.clone());

        self.current = None;
        self.resolved = Vector::new();
        self.in_play = PlaySet::default();
        self.discarded = PlaySet::default();
        self.round = 0;

        debug!(
            black = self.master_black.len(),
            white = self.master_white.len(),
            "reshuffled card pool"
        );
    }

    /// Deal `n` white cards into play.
    ///
    /// Returns exactly `n` distinct cards in draw order, all taken from the
    /// undrawn pool. Fails without changing anything if fewer than `n`
    /// remain. `n == 0` is a no-op returning an empty hand.
    pub fn draw_white(&mut self, n: usize) -> Result<Vector<W>, PoolError<W>> {
        let available = self.white.len();
        if n > available {
            return Err(PoolError::EmptyPool {
                pool: CardColor::White,
                requested: n,
                available,
            });
        }

        let mut drawn = Vector::new();
        for _ in 0..n {
            if let Some(card) = self.white.take(self.config.draw_order, &mut self.white_rng) {
                self.in_play.insert(card.clone());
                drawn.push_back(card);
            }
        }

        trace!(count = n, remaining = self.white.len(), "drew white cards");
        Ok(drawn)
    }

    /// Move white cards from play to the discard set.
    ///
    /// All-or-nothing: every card is checked first. The first card that is
    /// not in play, or is repeated within `cards`, is returned as
    /// `CardNotInPlay` and no card is moved.
    pub fn discard(&mut self, cards: &[W]) -> Result<(), PoolError<W>> {
        let mut seen = FxHashSet::default();
        for card in cards {
            if !self.in_play.contains(card) || !seen.insert(card) {
                return Err(PoolError::CardNotInPlay(card.clone()));
            }
        }

        for card in cards {
            self.in_play.remove(card);
            self.discarded.insert(card.clone());
        }

        trace!(
            count = cards.len(),
            in_play = self.in_play.len(),
            "discarded white cards"
        );
        Ok(())
    }

    /// Start a new round: retire the current black card and draw the next.
    ///
    /// Fails with `EmptyPool` when no black cards remain; the current card
    /// then stays current.
    pub fn advance_black(&mut self) -> Result<B, PoolError<W>> {
        let Some(next) = self.black.take(self.config.draw_order, &mut self.black_rng) else {
            return Err(PoolError::EmptyPool {
                pool: CardColor::Black,
                requested: 1,
                available: 0,
            });
        };

        if let Some(previous) = self.current.replace(next.clone()) {
            self.resolved.push_back(previous);
        }
        self.round += 1;

        debug!(round = self.round, card = ?next, remaining = self.black.len(), "new black card");
        Ok(next)
    }

    /// Advance to the next black card, or `None` once none remain.
    ///
    /// Non-failing form of `advance_black` for `while let` game loops.
    pub fn next_round(&mut self) -> Option<B> {
        if self.black.is_empty() {
            return None;
        }
        self.advance_black().ok()
    }

    /// Iterate over rounds, yielding each new current black card.
    ///
    /// Single-pass: once the black pool is empty the iterator ends, and
    /// only `reshuffle` refills it.
    pub fn rounds(&mut self) -> Rounds<'_, B, W> {
        Rounds::new(self)
    }

    /// Is there anything left to advance or resolve?
    ///
    /// True while black cards remain undrawn, or while a black card is
    /// current and white cards are still in play.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.black.is_empty() || (self.current.is_some() && !self.in_play.is_empty())
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> PoolState {
        match (&self.current, self.black.is_empty()) {
            (None, _) => PoolState::Fresh,
            (Some(_), false) => PoolState::RoundActive,
            (Some(_), true) => PoolState::Exhausted,
        }
    }

    // === Accessors ===

    /// Configuration this pool was built with.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Every black card, in construction order.
    #[must_use]
    pub fn master_black(&self) -> &Vector<B> {
        &self.master_black
    }

    /// Every white card, in construction order.
    #[must_use]
    pub fn master_white(&self) -> &Vector<W> {
        &self.master_white
    }

    /// Black cards not yet brought into play.
    #[must_use]
    pub fn undrawn_black(&self) -> &UndrawnPool<B> {
        &self.black
    }

    /// White cards not yet dealt.
    #[must_use]
    pub fn undrawn_white(&self) -> &UndrawnPool<W> {
        &self.white
    }

    /// Black card awaiting a ruling.
    #[must_use]
    pub fn current(&self) -> Option<&B> {
        self.current.as_ref()
    }

    /// Judged black cards, oldest first.
    #[must_use]
    pub fn resolved(&self) -> &Vector<B> {
        &self.resolved
    }

    /// White cards dealt and not yet discarded.
    #[must_use]
    pub fn in_play(&self) -> &PlaySet<W> {
        &self.in_play
    }

    /// White cards removed from play.
    #[must_use]
    pub fn discarded(&self) -> &PlaySet<W> {
        &self.discarded
    }

    /// Black cards advanced since the last reshuffle.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Position of the black and white selection streams.
    #[must_use]
    pub fn rng_state(&self) -> (GameRngState, GameRngState) {
        (self.black_rng.state(), self.white_rng.state())
    }

    /// Capture all derived card state.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot<B, W> {
        PoolSnapshot {
            undrawn_black: self.black.to_set(),
            current: self.current.clone(),
            resolved: self.resolved.clone(),
            undrawn_white: self.white.to_set(),
            in_play: self.in_play.clone(),
            discarded: self.discarded.clone(),
            round: self.round,
        }
    }
}

impl CardPool<Prompt, Answer> {
    /// Build a pool from a loaded card set.
    pub fn from_card_set(set: CardSet, config: DeckConfig) -> Self {
        Self::with_config(set.black, set.white, config)
    }
}

impl<B: Card, W: Card> std::fmt::Display for CardPool<B, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let black = format!("{:?}", self.black.iter().collect::<Vec<_>>());
        let white = format!("{:?}", self.white.iter().collect::<Vec<_>>());

        write!(
            f,
            "CardPool(black={}, white={}, in_play={}, discarded={}, resolved={})",
            shorten(&black, 60, " [...]"),
            shorten(&white, 60, " [...]"),
            self.in_play.len(),
            self.discarded.len(),
            self.resolved.len(),
        )
    }
}

/// Collect distinct cards, keeping first-seen order.
fn dedup<T: Card>(cards: impl IntoIterator<Item = T>) -> Vector<T> {
    let mut seen = FxHashSet::default();
    cards
        .into_iter()
        .filter(|card| seen.insert(card.clone()))
        .collect()
}
