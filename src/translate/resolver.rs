//! Tiered translation resolution
//!
//! Turns free-form English input into a best-effort Igbo rendering using
//! four tiers applied in strict order, first success wins:
//!
//! 1. exact match of the normalized input
//! 2. substring match over dictionary entries in insertion order, first
//!    match wins: the input may appear inside a key (typing `good` hits
//!    `good morning`), or a multi-word phrase key may appear inside the
//!    input. Single-word keys inside longer input are left to tier 3,
//!    which can substitute them in place instead of collapsing the whole
//!    input to one value.
//! 3. word-by-word substitution of known tokens
//! 4. passthrough with a "translation not found" marker
//!
//! Overlapping keys (`goodbye` vs `good morning`) resolve by table order;
//! order dependence is intentional here.
//!
//! Every input has a defined output; nothing here errors or panics.

use crate::{Dictionary, normalize};
use regex::Regex;
use std::sync::Arc;

/// Marker appended to input the resolver could not translate at all.
pub const NOT_FOUND_MARKER: &str = "(translation not found)";

/// Outcome of a resolution. `found` is false only for empty input and the
/// terminal passthrough tier; a partial word-by-word substitution still
/// counts as found — best effort is the policy, not all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub found: bool,
}

impl Resolution {
    fn found(text: String) -> Self {
        Resolution { text, found: true }
    }

    fn not_found(text: String) -> Self {
        Resolution { text, found: false }
    }
}

/// Pure text-to-text resolver over an injected dictionary.
pub struct Resolver {
    dictionary: Arc<Dictionary>,
    word_chars: Regex,
}

impl Resolver {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Resolver {
            dictionary,
            // Matches everything that is not a word character; stripped
            // from tokens before the word-by-word lookup
            word_chars: Regex::new(r"\W").expect("static pattern"),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Resolve `input` through the tiers. Idempotent: same input and
    /// dictionary always yield the same resolution.
    pub fn resolve(&self, input: &str) -> Resolution {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Resolution::not_found(String::new());
        }

        // Tier 1: exact match
        if let Some(igbo) = self.dictionary.lookup(&normalized) {
            return Resolution::found(igbo.to_string());
        }

        // Tier 2: substring match, insertion order, first match wins.
        // Phrase keys may match inside the input; single-word keys there
        // are handled by tier 3 instead.
        for (english, igbo) in self.dictionary.iter() {
            let phrase_in_input =
                english.contains(char::is_whitespace) && normalized.contains(english);
            if phrase_in_input || english.contains(&normalized) {
                return Resolution::found(igbo.to_string());
            }
        }

        // Tier 3: word-by-word substitution of known tokens
        let mut substituted = false;
        let translated: Vec<&str> = normalized
            .split_whitespace()
            .map(|token| {
                let cleaned = self.word_chars.replace_all(token, "");
                match self.dictionary.lookup(&cleaned) {
                    Some(igbo) => {
                        substituted = true;
                        igbo
                    }
                    None => token,
                }
            })
            .collect();

        // Tier 4: nothing was substituted, pass the input through annotated
        if !substituted {
            return Resolution::not_found(format!("{} {}", input, NOT_FOUND_MARKER));
        }

        Resolution::found(translated.join(" "))
    }
}
