//! Dictionary-based word boundary detection for Chinese, Japanese and Korean
//!
//! Text in these scripts does not separate words with spaces. Given a span of
//! such text, [`CjkBreakEngine`] finds the cheapest segmentation into
//! dictionary words, groups Katakana runs the dictionary rarely covers, and
//! reports the resulting word boundaries as byte offsets.
//!
//! # Architecture
//!
//! - **Word-sets** ([`word_set`]): static code point tables selecting the
//!   characters an engine serves
//! - **Normalization** ([`normalize`]): NFKC with a map back to raw offsets
//! - **Segmentation** ([`segmenter`]): minimum-cost dynamic programming over
//!   dictionary candidates
//! - **Merging** ([`merger`]): pushing offsets onto the caller's boundary stack
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::{BreakKind, CjkBreakEngine, TextCursor, WordListDictionary};
//! use std::sync::Arc;
//!
//! let dictionary = WordListDictionary::from_entries(
//!     "demo",
//!     [("私", 60), ("は", 30), ("学生", 80), ("です", 40)],
//! );
//! let engine = CjkBreakEngine::with_matcher(false, Arc::new(dictionary));
//!
//! let text = "私は学生です";
//! let mut cursor = TextCursor::new(text);
//! let mut boundaries = Vec::new();
//! engine.find_breaks(&mut cursor, 0, text.len(), false, BreakKind::Word, &mut boundaries);
//!
//! // 私 | は | 学生 | です
//! assert_eq!(boundaries, vec![3, 6, 12]);
//! ```

pub mod breaker;
pub mod cursor;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod merger;
pub mod normalize;
pub mod segmenter;
pub mod word_set;

pub use breaker::{Word, WordBreaker};
pub use cursor::TextCursor;
pub use dictionary::{
    Candidate, DictionaryConfig, DictionaryMatcher, DictionarySource, WordListDictionary,
};
pub use engine::{BreakKind, CjkBreakEngine};
pub use error::{DictionaryError, EngineError, Result};
pub use segmenter::{BestPath, Segmenter, MAX_SNLP, MAX_WORD_SIZE};
pub use word_set::ScriptVariant;
