//! Card values: the `Card` bound, colors, text cards and card sets.
//!
//! ## Key Types
//!
//! - `Card`: Bound for anything the pool can hold
//! - `CardColor`: Black (prompt) or white (answer)
//! - `Prompt` / `Answer`: Text black and white cards
//! - `CardSet`: Prompts and answers loaded from JSON

pub mod card;
pub mod set;
pub mod text;

pub use card::{Card, CardColor};
pub use set::CardSet;
pub use text::{Answer, Prompt};
