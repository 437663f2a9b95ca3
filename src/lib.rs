//! # cardczar
//!
//! Card pool state for fill-in-the-blank party card games, where one
//! player (the Card Czar) judges answers to a prompt each round.
//!
//! ## Design Principles
//!
//! 1. **Partitioned State**: Every black card is undrawn, current or
//!    resolved; every white card is undrawn, in play or discarded. The pool
//!    exposes only the transitions that preserve this.
//!
//! 2. **Deterministic Selection**: "Arbitrary" picks come from a seeded
//!    ChaCha stream, so games replay exactly and tests are stable.
//!
//! 3. **Policies Are Pluggable**: Czar selection is a trait the game loop
//!    owns; the pool knows nothing about players.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration
//! - `cards`: Card bound, text cards, JSON card sets
//! - `deck`: The card pool, round iteration, snapshots
//! - `rules`: Czar selection policies
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DrawOrder, GameRng, GameRngState, PlayerId};

pub use crate::cards::{Answer, Card, CardColor, CardSet, Prompt};

pub use crate::deck::{CardPool, PoolSnapshot, PoolState, Rounds, UndrawnPool};

pub use crate::rules::{CzarPolicy, RandomCzar, RotatingCzar, WinnerCzar};

pub use crate::error::{CardSetError, PoolError};
