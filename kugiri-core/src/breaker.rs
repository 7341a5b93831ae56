//! Whole-text driver
//!
//! Finds the runs of text an engine handles and lets the engine break each
//! of them. Text outside those runs is passed through as single segments.

use crate::cursor::TextCursor;
use crate::engine::{BreakKind, CjkBreakEngine};
use serde::Serialize;

/// A segment of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word<'a> {
    /// The segment text
    pub text: &'a str,
    /// Byte offset of the segment in the input
    pub offset: usize,
}

/// Breaks whole strings using a [`CjkBreakEngine`] for the runs it handles
#[derive(Debug, Clone)]
pub struct WordBreaker {
    engine: CjkBreakEngine,
}

impl WordBreaker {
    /// Wrap an engine
    pub fn new(engine: CjkBreakEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    pub fn engine(&self) -> &CjkBreakEngine {
        &self.engine
    }

    /// Byte offsets of all segment boundaries, including `0` and
    /// `text.len()`. Empty text has no boundaries.
    pub fn boundaries(&self, text: &str) -> Vec<usize> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut found = vec![0];
        let mut cursor = TextCursor::new(text);
        for (start, end) in self.handled_runs(text) {
            push_unique(&mut found, start);
            self.engine.find_breaks(
                &mut cursor,
                start,
                end,
                false,
                BreakKind::Word,
                &mut found,
            );
            push_unique(&mut found, end);
        }
        push_unique(&mut found, text.len());
        found
    }

    /// Split `text` into segments
    pub fn words<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        self.boundaries(text)
            .windows(2)
            .map(|w| Word {
                text: &text[w[0]..w[1]],
                offset: w[0],
            })
            .collect()
    }

    /// Maximal byte ranges whose characters the engine handles
    fn handled_runs(&self, text: &str) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut run_start = None;
        for (offset, ch) in text.char_indices() {
            let handled = self.engine.handles(ch, BreakKind::Word);
            match (handled, run_start) {
                (true, None) => run_start = Some(offset),
                (false, Some(start)) => {
                    runs.push((start, offset));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((start, text.len()));
        }
        runs
    }
}

fn push_unique(found: &mut Vec<usize>, offset: usize) {
    if found.last() != Some(&offset) {
        found.push(offset);
    }
}
