use crate::error::{WordError, NOT_A_LETTER, NOT_POSITIVE};

/// Anything that can be read as a run of letters: a string, one character,
/// or a sequence of single characters. Sequences of `&str` must hold exactly
/// one character per element.
pub trait Letters {
    fn letters(&self) -> Result<Vec<char>, WordError>;
}

fn single(s: &str) -> Result<char, WordError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(WordError::invalid(NOT_A_LETTER)),
    }
}

impl Letters for str {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        Ok(self.chars().collect())
    }
}

impl Letters for String {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.as_str().letters()
    }
}

impl Letters for char {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        Ok(vec![*self])
    }
}

impl Letters for [char] {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        Ok(self.to_vec())
    }
}

impl Letters for Vec<char> {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        Ok(self.clone())
    }
}

impl<const N: usize> Letters for [char; N] {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        Ok(self.to_vec())
    }
}

impl<'a> Letters for [&'a str] {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.iter().map(|s| single(s)).collect()
    }
}

impl<'a> Letters for Vec<&'a str> {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.as_slice().letters()
    }
}

impl<'a, const N: usize> Letters for [&'a str; N] {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.as_slice().letters()
    }
}

impl Letters for [String] {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.iter().map(|s| single(s)).collect()
    }
}

impl Letters for Vec<String> {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        self.as_slice().letters()
    }
}

impl<T: Letters + ?Sized> Letters for &T {
    fn letters(&self) -> Result<Vec<char>, WordError> {
        (**self).letters()
    }
}

/// Integers and string-encoded integers usable as lengths and positions
pub trait PositiveInt {
    /// Returns the value if it is an integer greater than zero
    fn positive(&self) -> Option<usize>;

    fn require_positive(&self) -> Result<usize, WordError> {
        self.positive().ok_or_else(|| WordError::invalid(NOT_POSITIVE))
    }
}

macro_rules! positive_int {
    ($($t:ty),*) => {
        $(
            impl PositiveInt for $t {
                fn positive(&self) -> Option<usize> {
                    usize::try_from(*self).ok().filter(|&n| n > 0)
                }
            }
        )*
    };
}

positive_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl PositiveInt for str {
    fn positive(&self) -> Option<usize> {
        // "+3" and " 3" parse, "3.0" and "-1" do not
        self.trim().parse::<i128>().ok().and_then(|n| {
            if n > 0 {
                usize::try_from(n).ok()
            } else {
                None
            }
        })
    }
}

impl PositiveInt for String {
    fn positive(&self) -> Option<usize> {
        self.as_str().positive()
    }
}

impl<T: PositiveInt + ?Sized> PositiveInt for &T {
    fn positive(&self) -> Option<usize> {
        (**self).positive()
    }
}

/// Lowercases a single character, keeping it as is when the lowercase form
/// is not exactly one character
pub fn lower(c: char) -> char {
    let mut lowered = c.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Lowercases letters into a string
pub fn normalize(letters: &[char]) -> String {
    letters.iter().flat_map(|c| c.to_lowercase()).collect()
}
