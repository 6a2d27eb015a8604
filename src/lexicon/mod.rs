pub mod alphabet;
pub mod criteria;
pub mod dictionary;
pub mod letters;
pub mod pool;
pub mod sort;

/// Small bundled word list, one lowercase word per line
pub const SAMPLE_WORDS: &str = include_str!("../../data/sample_words.txt");

pub use self::alphabet::Alphabet;
pub use self::criteria::Criteria;
pub use self::dictionary::Dictionary;
pub use self::sort::{SortKey, SortOptions, SortOrder};
