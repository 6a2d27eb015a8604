use std::collections::HashSet;

use tracing::{debug, info};

use super::alphabet::Alphabet;
use super::criteria::Criteria;
use super::letters::normalize;
use super::pool::LetterPool;
use super::sort::SortOptions;
use super::SAMPLE_WORDS;
use crate::error::{WordError, INVALID_ARG, LEN_GREATER_THAN_POOL};

/// Word list that answers criteria, letter pool, substring and anagram
/// queries. Every query is a linear scan over the words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    // Lowercase words, no duplicates
    words: HashSet<String>,
    alphabet: Alphabet,
}

impl Dictionary {
    pub fn new(words: HashSet<String>, alphabet: Alphabet) -> Self {
        Self { words, alphabet }
    }

    /// Dictionary over the bundled sample word list
    pub fn with_sample_words(alphabet: Alphabet) -> Self {
        let words = SAMPLE_WORDS
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        Self::new(words, alphabet)
    }

    /// Replaces the whole word list
    pub fn set_corpus(&mut self, words: HashSet<String>) {
        info!(words = words.len(), "replacing corpus");
        self.words = words;
    }

    pub fn corpus(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words satisfying every constraint in `criteria`, in no particular order
    pub fn filter(&self, criteria: &Criteria) -> Vec<&str> {
        let result: Vec<&str> = self.iter().filter(|w| criteria.matches(w)).collect();
        debug!(
            corpus = self.words.len(),
            found = result.len(),
            "filtered by criteria"
        );
        result
    }

    /// Validates a query word and an optional exact length, returning the
    /// lowercased word
    fn query_word(&self, word: &str, length: Option<usize>) -> Result<String, WordError> {
        let letters = self.alphabet.validate(word)?;
        if let Some(length) = length {
            if length == 0 {
                return Err(WordError::invalid(INVALID_ARG));
            }
            if length > letters.len() {
                return Err(WordError::invalid(LEN_GREATER_THAN_POOL));
            }
        }
        Ok(normalize(&letters))
    }

    /// Words that can be spelled with letters from `pool`, each letter used
    /// at most as many times as the pool holds it
    pub fn words_with_any_letters(
        &self,
        pool: &str,
        length: Option<usize>,
        sort: SortOptions,
    ) -> Result<Vec<&str>, WordError> {
        let pool = self.query_word(pool, length)?;
        let letters: LetterPool = pool.chars().collect();

        let mut result: Vec<&str> = self
            .iter()
            .filter(|w| length.map_or(true, |n| w.chars().count() == n))
            .filter(|w| letters.can_spell(w))
            .collect();
        sort.apply(&mut result);

        debug!(%pool, ?length, found = result.len(), "pool search");
        Ok(result)
    }

    /// Words that occur as a contiguous substring of `word`
    pub fn words_within(
        &self,
        word: &str,
        length: Option<usize>,
        sort: SortOptions,
    ) -> Result<Vec<&str>, WordError> {
        let word = self.query_word(word, length)?;

        let mut seen = HashSet::new();
        let mut result: Vec<&str> = substrings(&word)
            .filter(|s| length.map_or(true, |n| s.chars().count() == n))
            .filter(|s| seen.insert(*s))
            .filter_map(|s| self.words.get(s).map(String::as_str))
            .collect();
        sort.apply(&mut result);

        debug!(%word, ?length, found = result.len(), "substring search");
        Ok(result)
    }

    /// Words using exactly the letters of `word`, excluding `word` itself
    pub fn anagrams(&self, word: &str, sort: SortOptions) -> Result<Vec<&str>, WordError> {
        let length = word.chars().count();
        let mut result = self.words_with_any_letters(word, Some(length), sort)?;
        let word = word.to_lowercase();
        if let Some(idx) = result.iter().position(|w| *w == word) {
            result.remove(idx);
        }
        Ok(result)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::collections::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Every contiguous, non-empty substring of `word`, by start then end
fn substrings(word: &str) -> impl Iterator<Item = &str> {
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let n = bounds.len() - 1;
    (0..n).flat_map(move |i| {
        let bounds = bounds.clone();
        (i + 1..=n).map(move |j| &word[bounds[i]..bounds[j]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::sort::{SortKey, SortOrder};

    fn sample() -> Dictionary {
        Dictionary::with_sample_words(Alphabet::new())
    }

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_unstable();
        words
    }

    #[test]
    fn test_filter() {
        let dict = sample();
        let mut criteria = Criteria::new(dict.alphabet().clone());
        criteria
            .set_prefix("c")
            .unwrap()
            .set_suffix("s")
            .unwrap()
            .add_fragments(["or"])
            .unwrap()
            .set_positional([('o', 2), ('r', 4)])
            .unwrap()
            .set_length(&10)
            .unwrap();

        assert_eq!(
            sorted(dict.filter(&criteria)),
            ["correlates", "corrosives", "corrugates"]
        );
    }

    #[test]
    fn test_filter_without_criteria_returns_everything() {
        let dict = sample();
        let criteria = Criteria::new(Alphabet::new());
        assert_eq!(dict.filter(&criteria).len(), dict.len());
    }

    #[test]
    fn test_words_with_any_letters() {
        let dict = sample();
        let found = dict
            .words_with_any_letters("diction", Some(6), SortOptions::default())
            .unwrap();
        assert_eq!(
            found,
            ["diotic", "dition", "indico", "indict", "nidiot", "odinic"]
        );

        let found = dict
            .words_with_any_letters("pox", None, SortOptions::default())
            .unwrap();
        assert_eq!(found, ["o", "op", "ox", "p", "po", "pox", "x"]);

        let found = dict
            .words_with_any_letters(
                "POX",
                None,
                SortOptions::new(SortOrder::Descending, SortKey::BySize),
            )
            .unwrap();
        assert_eq!(found, ["x", "p", "o", "po", "ox", "op", "pox"]);
    }

    #[test]
    fn test_pool_validation() {
        let dict = Dictionary::with_sample_words(Alphabet::with_disallowed(['1']));
        let options = SortOptions::default();
        assert!(matches!(
            dict.words_with_any_letters("po1", None, options),
            Err(WordError::InvalidArgument(_))
        ));
        assert_eq!(
            dict.words_with_any_letters("pox", Some(4), options),
            Err(WordError::invalid(LEN_GREATER_THAN_POOL))
        );
        assert!(dict.words_with_any_letters("pox", Some(0), options).is_err());
        assert!(dict.anagrams("", options).is_err());
    }

    #[test]
    fn test_words_within() {
        let dict = sample();
        let found = dict
            .words_within("hole", None, SortOptions::default())
            .unwrap();
        assert_eq!(
            found,
            ["e", "h", "ho", "hol", "hole", "l", "le", "o", "ol", "ole"]
        );

        let found = dict
            .words_within("hole", Some(3), SortOptions::default())
            .unwrap();
        assert_eq!(found, ["hol", "ole"]);

        assert!(dict
            .words_within("hole", Some(5), SortOptions::default())
            .is_err());
    }

    #[test]
    fn test_words_within_deduplicates() {
        let words = ["o", "oo"].iter().map(|w| w.to_string()).collect();
        let dict = Dictionary::new(words, Alphabet::new());
        let found = dict
            .words_within("ooo", None, SortOptions::default())
            .unwrap();
        assert_eq!(found, ["o", "oo"]);
    }

    #[test]
    fn test_get_anagrams() {
        let dict = sample();
        let found = dict.anagrams("opts", SortOptions::default()).unwrap();
        assert_eq!(found, ["post", "pots", "spot", "stop", "tops"]);

        let found = dict.anagrams("aekst", SortOptions::default()).unwrap();
        assert_eq!(
            found,
            ["keats", "skate", "skeat", "stake", "steak", "takes", "teaks"]
        );
    }

    #[test]
    fn test_disallowed_chars_fail_every_query() {
        let alphabet = Alphabet::new();
        let dict = Dictionary::with_sample_words(alphabet.clone());
        alphabet.disallow('o');
        let options = SortOptions::default();
        assert!(dict.words_with_any_letters("pox", None, options).is_err());
        assert!(dict.words_within("hole", None, options).is_err());
        assert!(dict.anagrams("opts", options).is_err());
    }

    #[test]
    fn test_set_corpus() {
        let mut dict = sample();
        let words: HashSet<String> = ["stop", "pots"].iter().map(|w| w.to_string()).collect();
        dict.set_corpus(words.clone());
        assert_eq!(dict.corpus(), &words);
        assert_eq!(
            dict.anagrams("tops", SortOptions::default()).unwrap(),
            ["pots", "stop"]
        );
        assert_eq!((&dict).into_iter().count(), 2);
    }

    #[test]
    fn test_substrings() {
        let all: Vec<&str> = substrings("abc").collect();
        assert_eq!(all, ["a", "ab", "abc", "b", "bc", "c"]);
        assert_eq!(substrings("").count(), 0);
        assert_eq!(substrings("né").collect::<Vec<_>>(), ["n", "né", "é"]);
    }
}
