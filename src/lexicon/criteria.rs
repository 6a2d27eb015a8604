use std::collections::BTreeMap;

use tracing::trace;

use super::alphabet::Alphabet;
use super::letters::{lower, normalize, Letters, PositiveInt};
use super::pool::LetterPool;
use crate::error::{WordError, INVALID_ARG, NONEXISTENT_REMOVAL, TOO_MANY_REMOVALS};

/// Search parameters for an unknown word. Every input is checked against the
/// alphabet before anything is changed, so a failed call leaves the criteria
/// exactly as it was.
///
/// Cloning gives an independent copy of the constraints; the alphabet handle
/// itself stays shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    alphabet: Alphabet,
    /// What the word must begin with
    prefix: String,
    /// What the word must end with
    suffix: String,
    /// Required substrings. A fragment listed n times must occur exactly n
    /// times in a matching word
    fragments: Vec<String>,
    /// 1-based position -> required letter
    positional: BTreeMap<usize, char>,
    /// Exact word length
    length: Option<usize>,
}

impl Criteria {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            prefix: String::new(),
            suffix: String::new(),
            fragments: Vec::new(),
            positional: BTreeMap::new(),
            length: None,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn positional(&self) -> &BTreeMap<usize, char> {
        &self.positional
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// True when no constraint is active, in which case every word matches
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.fragments.is_empty()
            && self.positional.is_empty()
            && self.length.is_none()
    }

    fn normalized<L: Letters + ?Sized>(&self, value: &L) -> Result<String, WordError> {
        Ok(normalize(&self.alphabet.validate(value)?))
    }

    /// Sets the letters the word should begin with
    pub fn set_prefix<L: Letters + ?Sized>(&mut self, value: &L) -> Result<&mut Self, WordError> {
        self.prefix = self.normalized(value)?;
        trace!(prefix = %self.prefix, "set prefix");
        Ok(self)
    }

    pub fn clear_prefix(&mut self) -> &mut Self {
        self.prefix.clear();
        self
    }

    /// Removes the first occurrence of `fragment` from the prefix
    pub fn remove_from_prefix<L: Letters + ?Sized>(
        &mut self,
        fragment: &L,
    ) -> Result<&mut Self, WordError> {
        let fragment = self.normalized(fragment)?;
        self.prefix = remove_first(&self.prefix, &fragment)?;
        trace!(prefix = %self.prefix, "trimmed prefix");
        Ok(self)
    }

    /// Sets the letters the word should end with
    pub fn set_suffix<L: Letters + ?Sized>(&mut self, value: &L) -> Result<&mut Self, WordError> {
        self.suffix = self.normalized(value)?;
        trace!(suffix = %self.suffix, "set suffix");
        Ok(self)
    }

    pub fn clear_suffix(&mut self) -> &mut Self {
        self.suffix.clear();
        self
    }

    /// Removes the first occurrence of `fragment` from the suffix
    pub fn remove_from_suffix<L: Letters + ?Sized>(
        &mut self,
        fragment: &L,
    ) -> Result<&mut Self, WordError> {
        let fragment = self.normalized(fragment)?;
        self.suffix = remove_first(&self.suffix, &fragment)?;
        trace!(suffix = %self.suffix, "trimmed suffix");
        Ok(self)
    }

    /// Adds substrings the word should contain. Adding the same fragment
    /// twice requires it to occur twice.
    pub fn add_fragments<I>(&mut self, values: I) -> Result<&mut Self, WordError>
    where
        I: IntoIterator,
        I::Item: Letters,
    {
        let added = values
            .into_iter()
            .map(|v| self.normalized(&v))
            .collect::<Result<Vec<_>, _>>()?;
        // An empty fragment occurs everywhere and would never count right
        if added.iter().any(String::is_empty) {
            return Err(WordError::invalid(INVALID_ARG));
        }
        trace!(?added, "add fragments");
        self.fragments.extend(added);
        Ok(self)
    }

    /// Removes one occurrence of each given fragment. Passing nothing clears
    /// every fragment.
    pub fn remove_fragments<I>(&mut self, values: I) -> Result<&mut Self, WordError>
    where
        I: IntoIterator,
        I::Item: Letters,
    {
        let values: Vec<I::Item> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(self.clear_fragments());
        }
        if values.len() > self.fragments.len() {
            return Err(WordError::violation(TOO_MANY_REMOVALS));
        }

        let mut remaining = self.fragments.clone();
        for value in values.iter() {
            let fragment = self.normalized(value)?;
            match remaining.iter().position(|f| *f == fragment) {
                Some(idx) => {
                    remaining.remove(idx);
                }
                None => return Err(WordError::violation(NONEXISTENT_REMOVAL)),
            }
        }
        self.fragments = remaining;
        Ok(self)
    }

    pub fn clear_fragments(&mut self) -> &mut Self {
        self.fragments.clear();
        self
    }

    fn checked_pair<C, P>(&self, letter: &C, pos: &P) -> Result<(char, usize), WordError>
    where
        C: Letters + ?Sized,
        P: PositiveInt + ?Sized,
    {
        let letter = self.alphabet.validate_char(letter)?;
        let pos = pos
            .positive()
            .ok_or_else(|| WordError::invalid(INVALID_ARG))?;
        Ok((lower(letter), pos))
    }

    /// Requires `letter` at 1-based position `pos` for each pair, replacing
    /// whatever was required there before
    pub fn set_positional<I, C, P>(&mut self, pairs: I) -> Result<&mut Self, WordError>
    where
        I: IntoIterator<Item = (C, P)>,
        C: Letters,
        P: PositiveInt,
    {
        let checked = pairs
            .into_iter()
            .map(|(c, p)| self.checked_pair(&c, &p))
            .collect::<Result<Vec<_>, _>>()?;
        for (letter, pos) in checked {
            trace!(pos, %letter, "set positional");
            self.positional.insert(pos, letter);
        }
        Ok(self)
    }

    /// Drops the requirement at each pair's position. Only the position has
    /// to match; passing nothing clears every positional requirement.
    pub fn remove_positional<I, C, P>(&mut self, pairs: I) -> Result<&mut Self, WordError>
    where
        I: IntoIterator<Item = (C, P)>,
        C: Letters,
        P: PositiveInt,
    {
        let pairs: Vec<(C, P)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Ok(self.clear_positional());
        }
        if pairs.len() > self.positional.len() {
            return Err(WordError::invalid(TOO_MANY_REMOVALS));
        }

        let checked = pairs
            .iter()
            .map(|(c, p)| self.checked_pair(c, p))
            .collect::<Result<Vec<_>, _>>()?;
        let mut remaining = self.positional.clone();
        for (_, pos) in checked {
            if remaining.remove(&pos).is_none() {
                return Err(WordError::violation(NONEXISTENT_REMOVAL));
            }
        }
        self.positional = remaining;
        Ok(self)
    }

    pub fn clear_positional(&mut self) -> &mut Self {
        self.positional.clear();
        self
    }

    pub fn set_length<P: PositiveInt + ?Sized>(&mut self, n: &P) -> Result<&mut Self, WordError> {
        self.length = Some(n.require_positive()?);
        Ok(self)
    }

    pub fn clear_length(&mut self) -> &mut Self {
        self.length = None;
        self
    }

    /// Checks a single word against every active constraint
    pub fn matches(&self, word: &str) -> bool {
        if let Some(length) = self.length {
            if word.chars().count() != length {
                return false;
            }
        }

        if !word.starts_with(self.prefix.as_str()) || !word.ends_with(self.suffix.as_str()) {
            return false;
        }

        // A fragment required n times must occur exactly n times
        for (i, fragment) in self.fragments.iter().enumerate() {
            if self.fragments[..i].contains(fragment) {
                continue;
            }
            let required = self.fragments.iter().filter(|f| *f == fragment).count();
            if word.matches(fragment.as_str()).count() != required {
                return false;
            }
        }

        if !self.positional.is_empty() {
            let chars: Vec<char> = word.chars().collect();
            for (&pos, &letter) in self.positional.iter() {
                if chars.get(pos - 1) != Some(&letter) {
                    return false;
                }
            }
        }

        true
    }
}

/// Deletes the first contiguous occurrence of `fragment` from `source`.
/// Fails when `source` does not hold enough of each letter of `fragment`.
fn remove_first(source: &str, fragment: &str) -> Result<String, WordError> {
    let have: LetterPool = source.chars().collect();
    if !have.can_spell(fragment) {
        return Err(WordError::violation(NONEXISTENT_REMOVAL));
    }
    Ok(source.replacen(fragment, "", 1))
}
