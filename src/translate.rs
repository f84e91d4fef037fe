//! Locale hook for color names and tooltips.
//!
//! Localization wiring belongs to the host application; widgets only ever see
//! this trait.

use std::collections::HashMap;

pub trait Translate {
    /// Translate a color or palette key for display.
    fn translate(&self, key: &str) -> String;

    /// Language tag of the active locale.
    fn language(&self) -> &str;
}

/// Identity translator used when the host has no locale layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslate;

impl Translate for NoTranslate {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }

    fn language(&self) -> &str {
        "en"
    }
}

/// Map-backed translator for hosts that carry their own string tables.
/// Unknown keys fall back to themselves.
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: String,
    strings: HashMap<String, String>,
}

impl Lexicon {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            strings: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in entries {
            self.strings.insert(k.into(), v.into());
        }
    }
}

impl Translate for Lexicon {
    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_translate_is_identity() {
        assert_eq!(NoTranslate.translate("red"), "red");
        assert_eq!(NoTranslate.language(), "en");
    }

    #[test]
    fn test_lexicon_lookup_and_fallback() {
        let fr = Lexicon::new("fr").with("red", "rouge").with("none", "aucune");
        assert_eq!(fr.language(), "fr");
        assert_eq!(fr.translate("red"), "rouge");
        assert_eq!(fr.translate("teal"), "teal");
    }

    #[test]
    fn test_lexicon_extend() {
        let mut de = Lexicon::new("de");
        de.extend([("red", "Rot"), ("blue", "Blau")]);
        assert_eq!(de.translate("blue"), "Blau");
    }
}
