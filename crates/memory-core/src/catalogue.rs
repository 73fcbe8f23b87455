//! Symbol catalogue: the pool of matchable symbols a board is dealt from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_FACE_PREFIX: &str = "/images";

const DEFAULT_SYMBOLS: [&str; 8] = [
    "cat", "dog", "fox", "owl", "bear", "frog", "lion", "panda",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalogue {
    symbols: Vec<String>,
    face_prefix: String,
}

impl SymbolCatalogue {
    /// Build a catalogue from distinct symbol ids.
    pub fn new<I, S>(symbols: I, face_prefix: impl Into<String>) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if symbol.trim().is_empty() {
                return Err(GameError::Configuration(
                    "symbol ids must not be empty".into(),
                ));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(GameError::Configuration(format!(
                    "duplicate symbol '{symbol}' in catalogue"
                )));
            }
        }

        Ok(Self {
            symbols,
            face_prefix: face_prefix.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Face reference for a symbol, e.g. `/images/cat.png`.
    pub fn face_for(&self, symbol_id: &str) -> String {
        format!("{}/{}.png", self.face_prefix, symbol_id)
    }
}

impl Default for SymbolCatalogue {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            face_prefix: DEFAULT_FACE_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_symbols() {
        let err = SymbolCatalogue::new(["cat", "dog", "cat"], "/img").unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn test_face_is_derived_from_symbol() {
        let catalogue = SymbolCatalogue::new(["cat"], "https://cdn.example/faces/").unwrap();
        assert_eq!(catalogue.face_for("cat"), "https://cdn.example/faces/cat.png");
        assert_eq!(catalogue.face_for("cat"), catalogue.face_for("cat"));
    }

    #[test]
    fn test_default_has_eight_symbols() {
        assert_eq!(SymbolCatalogue::default().len(), 8);
    }
}
