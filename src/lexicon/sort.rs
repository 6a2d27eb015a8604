use serde::{Deserialize, Serialize};

/// Direction of the alphabetical pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// a-z, 0-9
    #[default]
    Ascending,
    /// z-a, 9-0
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Alphabetical,
    /// Shortest words first, ties keep their alphabetical order
    BySize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOptions {
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub key: SortKey,
}

impl SortOptions {
    pub fn new(order: SortOrder, key: SortKey) -> Self {
        Self { order, key }
    }

    /// Sorts alphabetically in the requested order, then, for `BySize`,
    /// stably by length so equal lengths stay alphabetical
    pub fn apply<S: AsRef<str>>(&self, words: &mut [S]) {
        match self.order {
            SortOrder::Ascending => words.sort_by(|a, b| a.as_ref().cmp(b.as_ref())),
            SortOrder::Descending => words.sort_by(|a, b| b.as_ref().cmp(a.as_ref())),
        }
        if self.key == SortKey::BySize {
            words.sort_by_key(|w| w.as_ref().chars().count());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(order: SortOrder, key: SortKey) -> Vec<&'static str> {
        let mut words = vec!["po", "x", "pox", "o", "op", "p", "ox"];
        SortOptions::new(order, key).apply(&mut words);
        words
    }

    #[test]
    fn test_sort_combinations() {
        assert_eq!(
            sorted(SortOrder::Ascending, SortKey::Alphabetical),
            ["o", "op", "ox", "p", "po", "pox", "x"]
        );
        assert_eq!(
            sorted(SortOrder::Descending, SortKey::Alphabetical),
            ["x", "pox", "po", "p", "ox", "op", "o"]
        );
        assert_eq!(
            sorted(SortOrder::Ascending, SortKey::BySize),
            ["o", "p", "x", "op", "ox", "po", "pox"]
        );
        assert_eq!(
            sorted(SortOrder::Descending, SortKey::BySize),
            ["x", "p", "o", "po", "ox", "op", "pox"]
        );
    }

    #[test]
    fn test_default_is_ascending_alphabetical() {
        let options: SortOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SortOptions::default());
        let options: SortOptions =
            serde_json::from_str(r#"{"order": "descending", "key": "by_size"}"#).unwrap();
        assert_eq!(options, SortOptions::new(SortOrder::Descending, SortKey::BySize));
    }

    proptest! {
        #[test]
        fn prop_by_size_keeps_alphabetical_ties(words in proptest::collection::vec("[a-c]{1,4}", 0..20)) {
            let mut words = words;
            SortOptions::new(SortOrder::Ascending, SortKey::BySize).apply(&mut words);
            for pair in words.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.len() < b.len() || (a.len() == b.len() && a <= b));
            }
        }
    }
}
