use std::collections::HashMap;

/// Multiset of letters, used to decide whether a word can be spelled from a
/// pool of letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    /// Histogram count of each letter in the pool
    counts: HashMap<char, usize>,
    /// Total number of letters in the pool
    n_total: usize,
}

impl LetterPool {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Adds an additional letter in-place
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.n_total += 1;
    }

    /// True if every letter of `other` occurs here at least as many times
    pub fn contains(&self, other: &LetterPool) -> bool {
        other.n_total <= self.n_total
            && other
                .counts
                .iter()
                .all(|(&letter, &n)| n <= self.count(letter))
    }

    /// True if `word` can be spelled using letters from this pool, each used
    /// no more often than the pool provides
    pub fn can_spell(&self, word: &str) -> bool {
        // Cheap length cutoff before building the word's histogram
        word.chars().count() <= self.n_total && self.contains(&word.chars().collect())
    }
}

impl std::iter::FromIterator<char> for LetterPool {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut pool = Self::empty();
        iter.into_iter().for_each(|x| pool.add(x));
        pool
    }
}
