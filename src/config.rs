//! Runtime configuration, read from a JSON file.
//!
//! ```
//! use wordplay::config::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "word_list": "words.txt",
//!     "min_word_length": 2,
//!     "disallowed": ["1", "-"],
//!     "sort": { "order": "descending", "key": "by_size" }
//! }"#).unwrap();
//!
//! assert_eq!(config.min_word_length, 2);
//! assert!(!config.alphabet().is_allowed('-'));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::lexicon::{Alphabet, Dictionary, SortOptions};
use crate::store;

fn default_min_word_length() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Word list to load. The bundled sample list is used when absent
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    /// Words shorter than this are dropped while loading
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Characters rejected in any query input
    #[serde(default)]
    pub disallowed: Vec<char>,

    /// Ordering for pool, substring and anagram results
    #[serde(default)]
    pub sort: SortOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: None,
            min_word_length: default_min_word_length(),
            disallowed: Vec::new(),
            sort: SortOptions::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, StoreError> {
        let config: Self = serde_json::from_str(s)?;
        if config.min_word_length == 0 {
            return Err(StoreError::Invalid(
                "min_word_length must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// A fresh character policy holding the configured disallowed set
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::with_disallowed(self.disallowed.iter().copied())
    }

    /// Builds the dictionary this configuration describes
    pub fn load_dictionary(&self) -> Result<Dictionary, StoreError> {
        let alphabet = self.alphabet();
        match &self.word_list {
            Some(path) => {
                let words = store::load_corpus(path, self.min_word_length)?;
                Ok(Dictionary::new(words, alphabet))
            }
            None => Ok(Dictionary::with_sample_words(alphabet)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{SortKey, SortOrder};

    #[test]
    fn test_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.min_word_length, 1);
        assert!(config.alphabet().disallowed().is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json_str(
            r#"{"word_list": "w.fst", "disallowed": ["x"], "sort": {"key": "by_size"}}"#,
        )
        .unwrap();
        assert_eq!(config.word_list, Some(PathBuf::from("w.fst")));
        assert_eq!(config.sort, SortOptions::new(SortOrder::Ascending, SortKey::BySize));
        assert!(!config.alphabet().is_allowed('x'));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_json_str(r#"{"min_word_length": 0}"#),
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"disallowed": ["ab"]}"#),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_load_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("words.txt");
        std::fs::write(&list, "stop pots\ntops o\n").unwrap();

        let config = Config {
            word_list: Some(list),
            min_word_length: 2,
            ..Config::default()
        };
        let dict = config.load_dictionary().unwrap();
        assert_eq!(dict.len(), 3);

        let sample = Config::default().load_dictionary().unwrap();
        assert!(sample.contains("corrugates"));
    }
}
