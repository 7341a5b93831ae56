//! Dictionary matching
//!
//! The segmenter only sees the [`DictionaryMatcher`] capability, so any
//! backend that can list word candidates at a position can drive it.

pub mod config;
pub mod loader;
pub mod word_list;

pub use config::{DictionaryConfig, DictionaryMetadata, WordEntry};
pub use loader::DictionarySource;
pub use word_list::WordListDictionary;

/// A dictionary word starting at the queried position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Length of the word in normalized characters
    pub length: usize,
    /// Cost of the word; lower is more likely
    pub cost: u32,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(length: usize, cost: u32) -> Self {
        Self { length, cost }
    }
}

/// Lists the dictionary words that begin at the start of a character slice.
///
/// Implementations must be safe for concurrent read-only use: one matcher is
/// shared by every engine built from it.
pub trait DictionaryMatcher: Send + Sync {
    /// Append to `candidates` the words that are prefixes of `text`, no longer
    /// than `max_length` characters, at most `limit` of them.
    ///
    /// Candidates are consumed in the order they are appended. The caller
    /// clears `candidates` beforehand.
    fn matches(
        &self,
        text: &[char],
        max_length: usize,
        limit: usize,
        candidates: &mut Vec<Candidate>,
    );
}
