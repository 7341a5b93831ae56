//! Word break engine for Chinese, Japanese and Korean runs

use crate::cursor::TextCursor;
use crate::dictionary::{DictionaryMatcher, DictionarySource};
use crate::error::Result;
use crate::merger::merge_boundaries;
use crate::normalize::NormalizedSpan;
use crate::segmenter::Segmenter;
use crate::word_set::ScriptVariant;
use std::sync::Arc;
use tracing::debug;

/// Kind of text unit a break request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// Grapheme clusters
    Character,
    /// Words
    Word,
    /// Line-wrap opportunities
    Line,
    /// Sentences
    Sentence,
    /// Title-casing units
    Title,
}

/// Dictionary-driven word segmentation for one family of scripts.
///
/// The engine holds no per-call state: the script tables are static and the
/// dictionary is shared read-only, so one instance can serve many threads.
#[derive(Clone)]
pub struct CjkBreakEngine {
    variant: ScriptVariant,
    dictionary: Arc<dyn DictionaryMatcher>,
}

impl std::fmt::Debug for CjkBreakEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CjkBreakEngine")
            .field("variant", &self.variant)
            .field("dictionary", &"<DictionaryMatcher>")
            .finish()
    }
}

impl CjkBreakEngine {
    /// Create an engine serving Hangul when `korean` is set, otherwise Han,
    /// Katakana and Hiragana.
    ///
    /// Fails with [`EngineError::DictionaryLoad`](crate::EngineError::DictionaryLoad)
    /// when the dictionary cannot be obtained.
    pub fn new(korean: bool, source: &DictionarySource) -> Result<Self> {
        let dictionary = source.load()?;
        debug!(
            "created {:?} break engine with {} dictionary",
            ScriptVariant::from_korean(korean),
            source.display_name()
        );
        Ok(Self::with_matcher(korean, dictionary))
    }

    /// Create an engine around an already loaded matcher
    pub fn with_matcher(korean: bool, dictionary: Arc<dyn DictionaryMatcher>) -> Self {
        Self {
            variant: ScriptVariant::from_korean(korean),
            dictionary,
        }
    }

    /// The script family this engine serves
    pub fn variant(&self) -> ScriptVariant {
        self.variant
    }

    /// True for word-break requests on characters of the served scripts
    pub fn handles(&self, ch: char, kind: BreakKind) -> bool {
        kind == BreakKind::Word && self.variant.contains(ch)
    }

    /// Find the word boundaries inside `[start, end)` of the cursor's buffer
    /// and push them onto `found`.
    ///
    /// `found` is an ordered stack of byte offsets that may already hold
    /// earlier boundaries. New offsets are pushed in ascending order; `start`
    /// itself and offsets already present are never pushed, and a boundary at
    /// `end` is dropped. Afterwards the cursor sits on the top of `found`.
    ///
    /// `reverse` is accepted for interface compatibility and has no effect.
    /// `kind` is expected to be [`BreakKind::Word`]; callers check
    /// [`handles`](Self::handles) first. The return value is always `0`.
    ///
    /// # Panics
    ///
    /// If `start` or `end` is not a character boundary of the buffer.
    pub fn find_breaks(
        &self,
        cursor: &mut TextCursor<'_>,
        start: usize,
        end: usize,
        reverse: bool,
        kind: BreakKind,
        found: &mut Vec<usize>,
    ) -> usize {
        if start >= end {
            return 0;
        }

        cursor.set_index(start);
        let raw = cursor.drain_to(end);
        let span = NormalizedSpan::from_raw(&raw);
        debug!(
            start,
            end,
            chars = span.len(),
            rewritten = span.was_rewritten(),
            reverse,
            ?kind,
            "finding breaks"
        );

        let path = Segmenter::new(self.dictionary.as_ref()).segment(span.chars());
        merge_boundaries(&path.boundaries, &span, start, end, found);

        if let Some(&top) = found.last() {
            cursor.set_index(top);
        }
        0
    }
}
