//! In-memory word list backed by a character trie

use super::{Candidate, DictionaryConfig, DictionaryMatcher};
use crate::error::DictionaryError;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    cost: Option<u32>,
}

/// A dictionary of words with fixed costs.
///
/// Candidates come out in ascending length order, so a single-character word,
/// when present, is always the first candidate.
#[derive(Debug)]
pub struct WordListDictionary {
    name: String,
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for WordListDictionary {
    fn default() -> Self {
        Self::new("unnamed")
    }
}

impl WordListDictionary {
    /// Create an empty dictionary
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Build from `(word, cost)` pairs
    pub fn from_entries<I, S>(name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(name);
        for (word, cost) in entries {
            dictionary.insert(word.as_ref(), cost);
        }
        dictionary
    }

    /// Build from a validated configuration document
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        config.validate()?;
        Ok(Self::from_entries(
            &config.metadata.name,
            config.words.iter().map(|w| (w.text.as_str(), w.cost)),
        ))
    }

    /// Add a word; a duplicate keeps the lower cost. Empty words are ignored.
    ///
    /// Words are stored in NFKC, the form text is matched in, so `ｶﾒﾗ` and
    /// `カメラ` are the same entry.
    pub fn insert(&mut self, word: &str, cost: u32) {
        if word.is_empty() {
            return;
        }

        let mut node = 0;
        for ch in word.nfkc() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, next);
                    next
                }
            };
        }

        match self.nodes[node].cost {
            Some(existing) => self.nodes[node].cost = Some(existing.min(cost)),
            None => {
                self.nodes[node].cost = Some(cost);
                self.len += 1;
            }
        }
    }

    /// Cost of an exact word, compared in NFKC
    pub fn lookup(&self, word: &str) -> Option<u32> {
        let mut node = 0;
        for ch in word.nfkc() {
            node = *self.nodes[node].children.get(&ch)?;
        }
        self.nodes[node].cost
    }

    /// Dictionary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no word has been added
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl DictionaryMatcher for WordListDictionary {
    fn matches(
        &self,
        text: &[char],
        max_length: usize,
        limit: usize,
        candidates: &mut Vec<Candidate>,
    ) {
        if limit == 0 {
            return;
        }

        let mut node = 0;
        let mut found = 0;
        for (i, ch) in text.iter().take(max_length).enumerate() {
            match self.nodes[node].children.get(ch) {
                Some(&next) => node = next,
                None => break,
            }
            if let Some(cost) = self.nodes[node].cost {
                candidates.push(Candidate::new(i + 1, cost));
                found += 1;
                if found == limit {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sample() -> WordListDictionary {
        WordListDictionary::from_entries(
            "sample",
            [("東", 150), ("東京", 80), ("東京都", 100), ("京都", 90)],
        )
    }

    #[test]
    fn test_prefix_matches_in_length_order() {
        let dict = sample();
        let text = chars("東京都庁");
        let mut out = Vec::new();
        dict.matches(&text, 4, 4, &mut out);
        assert_eq!(
            out,
            vec![
                Candidate::new(1, 150),
                Candidate::new(2, 80),
                Candidate::new(3, 100)
            ]
        );
    }

    #[test]
    fn test_max_length_and_limit() {
        let dict = sample();
        let text = chars("東京都");
        let mut out = Vec::new();
        dict.matches(&text, 2, 10, &mut out);
        assert_eq!(out.len(), 2);

        out.clear();
        dict.matches(&text, 3, 1, &mut out);
        assert_eq!(out, vec![Candidate::new(1, 150)]);

        out.clear();
        dict.matches(&text, 3, 0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_match() {
        let dict = sample();
        let mut out = Vec::new();
        dict.matches(&chars("大阪"), 2, 2, &mut out);
        assert!(out.is_empty());
        dict.matches(&[], 0, 0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_duplicate_keeps_lowest_cost() {
        let mut dict = sample();
        assert_eq!(dict.len(), 4);
        dict.insert("東京", 200);
        dict.insert("東京", 10);
        dict.insert("", 1);
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.lookup("東京"), Some(10));
        assert_eq!(dict.lookup("京"), None);
    }

    #[test]
    fn test_half_width_entries_match_normalized_text() {
        let mut dict = WordListDictionary::new("width");
        dict.insert("\u{FF76}\u{FF92}\u{FF97}", 40);
        dict.insert("カメラ", 90);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("カメラ"), Some(40));
        assert_eq!(dict.lookup("\u{FF76}\u{FF92}\u{FF97}"), Some(40));

        let mut out = Vec::new();
        dict.matches(&chars("カメラマン"), 5, 5, &mut out);
        assert_eq!(out, vec![Candidate::new(3, 40)]);
    }

    #[test]
    fn test_expanding_entry_is_stored_expanded() {
        // ㍻ is one character written but two once normalized
        let dict = WordListDictionary::from_entries("era", [("㍻", 50)]);
        let mut out = Vec::new();
        dict.matches(&chars("平成元年"), 4, 4, &mut out);
        assert_eq!(out, vec![Candidate::new(2, 50)]);
    }

    #[test]
    fn test_from_config_validates() {
        let config = DictionaryConfig::from_toml_str("[metadata]\nname = \"none\"\n").unwrap();
        assert!(WordListDictionary::from_config(&config).is_err());

        let config = DictionaryConfig::from_toml_str(
            "[metadata]\nname = \"one\"\n[[words]]\ntext = \"猫\"\ncost = 12\n",
        )
        .unwrap();
        let dict = WordListDictionary::from_config(&config).unwrap();
        assert_eq!(dict.name(), "one");
        assert_eq!(dict.lookup("猫"), Some(12));
    }
}
