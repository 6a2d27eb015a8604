//! Line commands understood by the interactive binary.

use crate::error::{WordError, NONEXISTENT_REMOVAL};
use crate::lexicon::letters::PositiveInt;
use crate::lexicon::{Criteria, Dictionary, SortKey, SortOptions, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(Vec<FilterArg>),
    Pool { letters: String, length: Option<String> },
    Within { word: String, length: Option<String> },
    Anagrams(String),
    Sort(SortOptions),
    Disallow(String),
    Allow(String),
    Help,
    Quit,
}

/// One `key=value` argument of a filter command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterArg {
    Prefix(String),
    Suffix(String),
    Contains(String),
    At(String, String),
    Length(String),
}

pub const HELP: &str = "\
commands:
  filter prefix=<s> suffix=<s> contains=<s>... at=<c>:<pos>... len=<n>
  pool <letters> [len]
  within <word> [len]
  anagrams <word>
  sort <asc|desc> <alpha|size>
  disallow <chars>
  allow <chars>
  help
  quit";

impl Command {
    /// Parses one input line. Errors carry a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = parts.collect();

        let cmd = match (name, args.as_slice()) {
            ("filter", args) => Command::Filter(
                args.iter()
                    .map(|a| FilterArg::parse(a))
                    .collect::<Result<_, _>>()?,
            ),
            ("pool", [letters]) => Command::Pool {
                letters: letters.to_string(),
                length: None,
            },
            ("pool", [letters, length]) => Command::Pool {
                letters: letters.to_string(),
                length: Some(length.to_string()),
            },
            ("within", [word]) => Command::Within {
                word: word.to_string(),
                length: None,
            },
            ("within", [word, length]) => Command::Within {
                word: word.to_string(),
                length: Some(length.to_string()),
            },
            ("anagrams", [word]) => Command::Anagrams(word.to_string()),
            ("sort", [order, key]) => Command::Sort(SortOptions::new(
                match *order {
                    "asc" => SortOrder::Ascending,
                    "desc" => SortOrder::Descending,
                    other => return Err(format!("unknown sort order '{}'", other)),
                },
                match *key {
                    "alpha" => SortKey::Alphabetical,
                    "size" => SortKey::BySize,
                    other => return Err(format!("unknown sort key '{}'", other)),
                },
            )),
            ("disallow", [chars]) => Command::Disallow(chars.to_string()),
            ("allow", [chars]) => Command::Allow(chars.to_string()),
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (name, _) => return Err(format!("bad command '{}', try 'help'", name)),
        };
        Ok(cmd)
    }
}

impl FilterArg {
    fn parse(arg: &str) -> Result<Self, String> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", arg))?;
        let value = value.to_string();
        match key {
            "prefix" => Ok(FilterArg::Prefix(value)),
            "suffix" => Ok(FilterArg::Suffix(value)),
            "contains" => Ok(FilterArg::Contains(value)),
            "len" => Ok(FilterArg::Length(value)),
            "at" => {
                let (letter, pos) = value
                    .split_once(':')
                    .ok_or_else(|| format!("expected at=<letter>:<pos>, got '{}'", arg))?;
                Ok(FilterArg::At(letter.to_string(), pos.to_string()))
            }
            other => Err(format!("unknown filter key '{}'", other)),
        }
    }
}

/// Builds the criteria described by a filter command
pub fn build_criteria(dict: &Dictionary, args: &[FilterArg]) -> Result<Criteria, WordError> {
    let mut criteria = Criteria::new(dict.alphabet().clone());
    for arg in args {
        match arg {
            FilterArg::Prefix(s) => criteria.set_prefix(s)?,
            FilterArg::Suffix(s) => criteria.set_suffix(s)?,
            FilterArg::Contains(s) => criteria.add_fragments([s])?,
            FilterArg::At(letter, pos) => criteria.set_positional([(letter, pos)])?,
            FilterArg::Length(n) => criteria.set_length(n)?,
        };
    }
    Ok(criteria)
}

fn parse_length(length: &Option<String>) -> Result<Option<usize>, WordError> {
    length.as_ref().map(|n| n.require_positive()).transpose()
}

/// Runs a query command, returning the matching words. `Sort`, `Help` and
/// `Quit` are handled by the caller.
pub fn run_query(
    dict: &Dictionary,
    cmd: &Command,
    sort: SortOptions,
) -> Result<Vec<String>, WordError> {
    let words = match cmd {
        Command::Filter(args) => {
            let criteria = build_criteria(dict, args)?;
            let mut words = dict.filter(&criteria);
            sort.apply(&mut words);
            words
        }
        Command::Pool { letters, length } => {
            dict.words_with_any_letters(letters, parse_length(length)?, sort)?
        }
        Command::Within { word, length } => {
            dict.words_within(word, parse_length(length)?, sort)?
        }
        Command::Anagrams(word) => dict.anagrams(word, sort)?,
        Command::Disallow(chars) => {
            chars.chars().for_each(|c| dict.alphabet().disallow(c));
            Vec::new()
        }
        Command::Allow(chars) => {
            // Every character must be disallowed before any is re-allowed
            let banned = dict.alphabet().disallowed();
            if !chars.chars().all(|c| banned.contains(&c)) {
                return Err(WordError::invalid(NONEXISTENT_REMOVAL));
            }
            for c in chars.chars() {
                dict.alphabet().allow(c)?;
            }
            Vec::new()
        }
        Command::Sort(_) | Command::Help | Command::Quit => Vec::new(),
    };
    Ok(words.into_iter().map(str::to_string).collect())
}
