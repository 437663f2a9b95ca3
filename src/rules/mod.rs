//! Round rules that live outside the card pool.
//!
//! Games pick a `CzarPolicy` to decide who judges each round:
//! - `RotatingCzar`: Seats take turns in order
//! - `RandomCzar`: Seeded uniform pick
//! - `WinnerCzar`: Last round's winner judges next
//!
//! The card pool never calls into this module.

pub mod czar;

pub use czar::{CzarPolicy, RandomCzar, RotatingCzar, WinnerCzar};
