//! Word searching over a fixed word list: build up criteria on an unknown
//! word (prefix, suffix, required fragments, letters at positions, exact
//! length) and find every word satisfying them, or search for words that
//! can be spelled from a pool of letters, words hidden inside another word,
//! and anagrams.
//!
//! ```
//! use wordplay::lexicon::{Alphabet, Criteria, Dictionary, SortOptions};
//!
//! let dict = Dictionary::with_sample_words(Alphabet::new());
//!
//! let mut criteria = Criteria::new(dict.alphabet().clone());
//! criteria.set_prefix("c")?.set_suffix("s")?.set_length(&10)?;
//! assert!(dict.filter(&criteria).contains(&"corrugates"));
//!
//! let anagrams = dict.anagrams("opts", SortOptions::default())?;
//! assert_eq!(anagrams, ["post", "pots", "spot", "stop", "tops"]);
//! # Ok::<(), wordplay::error::WordError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod store;
mod utils;
