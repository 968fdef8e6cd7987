use std::collections::HashMap;

pub mod app;
pub mod gateway;
pub mod loader;
pub mod session;
pub mod storage;
pub mod translate;

// Re-export the main types for convenient access
pub use app::TranslatorApp;
pub use gateway::{
    GatewayError, GatewayResult, MockMode, MockProvider, RemoteGateway, TranslationProvider,
};
pub use session::{SessionError, SessionStore, User, UserRole};
pub use storage::{
    FavoriteItem, FavoritesSet, FileStore, HistoryItem, HistoryLedger, MemoryStore, Storage,
    VideoItem, VideoLibrary,
};
pub use translate::{
    Resolution, Resolver, Suggester, Translation, TranslationService, TranslationSource,
};

/// Immutable English→Igbo phrase table.
///
/// Keys are normalized (trimmed, lower-cased) and unique. Entries keep their
/// insertion order because the resolver's substring tier and the suggester
/// both iterate the table in its defined order.
pub struct Dictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Built-in seed table covering the most common phrases.
    pub fn seed() -> Self {
        let mut dictionary = Dictionary::new();
        dictionary
            .with_entry("hello", "ndewo")
            .with_entry("thank you", "dalu")
            .with_entry("good morning", "ụtụtụ ọma")
            .with_entry("how are you", "kedu ka ị mere")
            .with_entry("goodbye", "ka ọ dị")
            .with_entry("please", "biko")
            .with_entry("yes", "ee")
            .with_entry("no", "mba")
            .with_entry("water", "mmiri")
            .with_entry("food", "nri")
            .with_entry("family", "ezinụlọ")
            .with_entry("love", "ịhụnanya");
        dictionary
    }

    /// Add an entry. The key is normalized; re-inserting an existing key
    /// replaces its value but keeps its original position.
    pub fn with_entry(&mut self, english: &str, igbo: &str) -> &mut Self {
        let key = normalize(english);
        if key.is_empty() {
            return self;
        }
        match self.index.get(&key) {
            Some(&pos) => {
                self.entries[pos].1 = igbo.to_owned();
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, igbo.to_owned()));
            }
        }
        self
    }

    /// Exact lookup of a normalized key. Absence is a normal outcome, not an
    /// error; the resolver tries its next tier on `None`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.index
            .get(&normalize(key))
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}

/// Normalize free-form input the way dictionary keys are stored.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Phrases surfaced by the UI as quick-pick shortcuts. Every entry is a seed
/// dictionary key.
pub fn popular_phrases() -> &'static [&'static str] {
    &[
        "hello",
        "thank you",
        "good morning",
        "how are you",
        "goodbye",
        "please",
        "yes",
        "no",
        "water",
        "food",
        "family",
        "love",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lookup() {
        let dictionary = Dictionary::seed();
        assert_eq!(dictionary.lookup("hello"), Some("ndewo"));
        assert_eq!(dictionary.lookup("thank you"), Some("dalu"));
        assert_eq!(dictionary.lookup("water"), Some("mmiri"));
        assert_eq!(dictionary.lookup("xyz"), None);
    }

    #[test]
    fn test_lookup_normalizes_probe() {
        let dictionary = Dictionary::seed();
        assert_eq!(dictionary.lookup("  Hello  "), Some("ndewo"));
        assert_eq!(dictionary.lookup("THANK YOU"), Some("dalu"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut dictionary = Dictionary::new();
        dictionary
            .with_entry("good morning", "ụtụtụ ọma")
            .with_entry("goodbye", "ka ọ dị")
            .with_entry("good", "ọma");

        let keys: Vec<&str> = dictionary.keys().collect();
        assert_eq!(keys, vec!["good morning", "goodbye", "good"]);
    }

    #[test]
    fn test_reinsert_replaces_value_keeps_position() {
        let mut dictionary = Dictionary::new();
        dictionary
            .with_entry("hello", "ndewo")
            .with_entry("water", "mmiri")
            .with_entry("Hello", "ndeewo");

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("hello"), Some("ndeewo"));
        let keys: Vec<&str> = dictionary.keys().collect();
        assert_eq!(keys, vec!["hello", "water"]);
    }

    #[test]
    fn test_blank_key_ignored() {
        let mut dictionary = Dictionary::new();
        dictionary.with_entry("   ", "nothing");
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_popular_phrases_are_seed_keys() {
        let dictionary = Dictionary::seed();
        for phrase in popular_phrases() {
            assert!(dictionary.lookup(phrase).is_some(), "missing: {}", phrase);
        }
    }
}
