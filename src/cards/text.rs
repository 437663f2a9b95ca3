//! Text cards.
//!
//! `Prompt` is a black card ("Why can't I sleep at night? ____."),
//! `Answer` is a white card ("A disappointing birthday party.").

use serde::{Deserialize, Serialize};

/// A black (prompt) card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(pub String);

impl Prompt {
    /// Create a prompt from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The card text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of white cards a player submits for this prompt.
    ///
    /// Counts runs of underscores; a prompt without blanks is a question
    /// and takes one answer.
    ///
    /// ```
    /// use cardczar::cards::Prompt;
    ///
    /// assert_eq!(Prompt::new("What's that smell?").blanks(), 1);
    /// assert_eq!(Prompt::new("____ + ____ = ____.").blanks(), 3);
    /// ```
    #[must_use]
    pub fn blanks(&self) -> usize {
        let mut runs = 0;
        let mut in_blank = false;
        for ch in self.0.chars() {
            if ch == '_' {
                if !in_blank {
                    runs += 1;
                }
                in_blank = true;
            } else {
                in_blank = false;
            }
        }
        runs.max(1)
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// A white (answer) card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(pub String);

impl Answer {
    /// Create an answer from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The card text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Collapse whitespace and cut `text` to at most `width` characters.
///
/// Cuts on a word boundary and appends `placeholder` when anything was
/// dropped. Returns just the placeholder if not even one word fits.
pub(crate) fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut out = String::new();
    for word in words {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + word.chars().count() > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    if out.is_empty() {
        placeholder.trim_start().to_string()
    } else {
        out + placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blanks() {
        assert_eq!(Prompt::new("Why am I sticky?").blanks(), 1);
        assert_eq!(Prompt::new("I drink to forget ____.").blanks(), 1);
        assert_eq!(Prompt::new("____ is a slippery slope that leads to ____.").blanks(), 2);
        assert_eq!(Prompt::new("_").blanks(), 1);
        assert_eq!(Prompt::new("a_b_c").blanks(), 2);
    }

    #[test]
    fn test_display_and_from() {
        let prompt: Prompt = "Q1".into();
        let answer: Answer = String::from("A1").into();

        assert_eq!(prompt.to_string(), "Q1");
        assert_eq!(answer.text(), "A1");
    }

    #[test]
    fn test_serde_transparent() {
        let answer = Answer::new("Bees?");
        assert_eq!(serde_json::to_string(&answer).unwrap(), "\"Bees?\"");

        let prompt: Prompt = serde_json::from_str("\"Q\"").unwrap();
        assert_eq!(prompt, Prompt::new("Q"));
    }

    #[test]
    fn test_shorten_fits() {
        assert_eq!(shorten("a   b\nc", 10, " [...]"), "a b c");
    }

    #[test]
    fn test_shorten_cuts_on_words() {
        let text = "alpha beta gamma delta epsilon";
        let short = shorten(text, 20, " [...]");
        assert_eq!(short, "alpha beta [...]");
        assert!(short.chars().count() <= 20);
    }

    #[test]
    fn test_shorten_nothing_fits() {
        assert_eq!(shorten("supercalifragilistic", 8, " [...]"), "[...]");
    }
}
