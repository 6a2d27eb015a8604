use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use super::letters::Letters;
use crate::error::{WordError, INVALID_ARG, NONEXISTENT_REMOVAL};

/// Character policy shared by every criteria and dictionary that holds a
/// handle to it. Clones share the same disallowed set, so a change made
/// through one handle is seen by all of them on their next validation.
#[derive(Clone, Default)]
pub struct Alphabet {
    // characters rejected by validation
    disallowed: Arc<RwLock<BTreeSet<char>>>,
}

impl Alphabet {
    /// A policy that allows every character
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disallowed(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            disallowed: Arc::new(RwLock::new(chars.into_iter().collect())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<char>> {
        self.disallowed.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<char>> {
        self.disallowed.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_allowed(&self, c: char) -> bool {
        !self.read().contains(&c)
    }

    /// Checks every letter of the value against the policy, returning the
    /// letters when all of them are allowed
    pub fn validate<L: Letters + ?Sized>(&self, value: &L) -> Result<Vec<char>, WordError> {
        let letters = value.letters()?;
        let banned = self.read();
        if letters.iter().any(|c| banned.contains(c)) {
            return Err(WordError::invalid(INVALID_ARG));
        }
        Ok(letters)
    }

    /// Validates a value that must be exactly one allowed character
    pub fn validate_char<L: Letters + ?Sized>(&self, value: &L) -> Result<char, WordError> {
        match self.validate(value)?.as_slice() {
            &[c] => Ok(c),
            _ => Err(WordError::invalid(INVALID_ARG)),
        }
    }

    /// Makes a previously disallowed character valid again
    pub fn allow(&self, c: char) -> Result<(), WordError> {
        if self.write().remove(&c) {
            Ok(())
        } else {
            Err(WordError::invalid(NONEXISTENT_REMOVAL))
        }
    }

    pub fn disallow(&self, c: char) {
        self.write().insert(c);
    }

    /// Replaces the whole disallowed set
    pub fn set_disallowed(&self, chars: impl IntoIterator<Item = char>) {
        let chars: BTreeSet<char> = chars.into_iter().collect();
        info!(count = chars.len(), "replacing disallowed characters");
        *self.write() = chars;
    }

    /// Snapshot of the characters currently disallowed
    pub fn disallowed(&self) -> BTreeSet<char> {
        self.read().clone()
    }
}

/// Two handles are equal when they share the same policy
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.disallowed, &other.disallowed)
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Alphabet[^")?;
        for c in self.read().iter() {
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args() {
        let alphabet = Alphabet::with_disallowed(['1', '2', '-']);

        assert!(alphabet.validate("aAa").is_ok());
        assert!(alphabet.validate(&['a', 'b', 'C']).is_ok());
        assert!(alphabet.validate(&vec!["a", "B", "c"]).is_ok());

        assert!(alphabet.validate("a12").is_err());
        assert!(alphabet.validate(&vec!["aa", "1", "c"]).is_err());
        assert!(alphabet.validate(&['a', '-', 'c']).is_err());
    }

    #[test]
    fn test_is_allowed_char() {
        let alphabet = Alphabet::with_disallowed(['1']);
        assert!(alphabet.is_allowed('a'));
        assert!(alphabet.is_allowed('A'));
        assert!(!alphabet.is_allowed('1'));
        assert!(alphabet.validate_char("a1").is_err());
    }

    #[test]
    fn test_changes_visible_through_clones() {
        let alphabet = Alphabet::new();
        let shared = alphabet.clone();
        shared.disallow('z');
        assert!(!alphabet.is_allowed('z'));

        alphabet.allow('z').unwrap();
        assert!(shared.is_allowed('z'));
        assert!(shared.allow('z').is_err());

        shared.set_disallowed(['x', 'y']);
        assert_eq!(alphabet.disallowed(), ['x', 'y'].into_iter().collect());
        assert_eq!(alphabet, shared);
        assert_ne!(alphabet, Alphabet::new());
    }
}
