//! Card pool: undrawn, in-play, discarded and resolved card tracking.
//!
//! ## Key Types
//!
//! - `CardPool`: All card states for one game, and the legal transitions
//! - `UndrawnPool`: Index-addressable undrawn cards of one color
//! - `Rounds`: Iterator advancing the pool one black card at a time
//! - `PoolSnapshot`: Serializable view of the derived state

pub mod card_pool;
pub mod pool;
pub mod rounds;
pub mod snapshot;

pub use card_pool::{CardPool, PoolState};
pub use pool::UndrawnPool;
pub use rounds::Rounds;
pub use snapshot::PoolSnapshot;

use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

/// Persistent card set with a fixed hasher.
///
/// Iteration order depends only on contents and insertion history, so a
/// seeded game iterates its sets identically on every run.
pub type PlaySet<T> = im::HashSet<T, BuildHasherDefault<FxHasher>>;
