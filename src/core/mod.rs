//! Core types: players, RNG, configuration.
//!
//! These are the building blocks shared by the card pool and the
//! czar policies. None of them know about cards.

pub mod player;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use config::{DeckConfig, DrawOrder};
