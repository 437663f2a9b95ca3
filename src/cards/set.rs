//! Card sets loaded from JSON.
//!
//! A card set is the raw material for a `CardPool`:
//!
//! ```json
//! { "black": ["Why am I sticky?", "I drink to forget ____."],
//!   "white": ["Bees?", "A windmill full of corpses."] }
//! ```

use serde::{Deserialize, Serialize};

use super::card::CardColor;
use super::text::{Answer, Prompt};
use crate::error::CardSetError;

/// Black and white cards for one game, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    #[serde(default)]
    pub black: Vec<Prompt>,
    #[serde(default)]
    pub white: Vec<Answer>,
}

impl CardSet {
    /// Create a card set from prompts and answers.
    pub fn new(
        black: impl IntoIterator<Item = Prompt>,
        white: impl IntoIterator<Item = Answer>,
    ) -> Self {
        Self {
            black: black.into_iter().collect(),
            white: white.into_iter().collect(),
        }
    }

    /// Parse and validate a JSON card set.
    ///
    /// Card text is trimmed; blank cards are rejected.
    pub fn from_json(json: &str) -> Result<Self, CardSetError> {
        let mut set: CardSet = serde_json::from_str(json)?;

        for prompt in &mut set.black {
            prompt.0 = prompt.0.trim().to_string();
        }
        for answer in &mut set.white {
            answer.0 = answer.0.trim().to_string();
        }

        set.validate()?;
        Ok(set)
    }

    /// Check that no card is blank.
    pub fn validate(&self) -> Result<(), CardSetError> {
        if let Some(index) = self.black.iter().position(|p| p.text().trim().is_empty()) {
            return Err(CardSetError::BlankCard {
                color: CardColor::Black,
                index,
            });
        }
        if let Some(index) = self.white.iter().position(|a| a.text().trim().is_empty()) {
            return Err(CardSetError::BlankCard {
                color: CardColor::White,
                index,
            });
        }
        Ok(())
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String, CardSetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Largest number of answers any prompt in the set asks for.
    #[must_use]
    pub fn max_blanks(&self) -> usize {
        self.black.iter().map(Prompt::blanks).max().unwrap_or(0)
    }
}
