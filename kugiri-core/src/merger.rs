//! Boundary merger
//!
//! Maps normalized boundary positions back to buffer offsets and pushes them
//! onto the caller's boundary stack.

use crate::normalize::NormalizedSpan;

/// Merge `path` (ascending normalized positions) into `found`.
///
/// `found` is a stack of buffer offsets in ascending order. Offsets already
/// present or equal to `start` are skipped, and a trailing `end` is dropped
/// because the caller already tracks the end of the span.
pub fn merge_boundaries(
    path: &[usize],
    span: &NormalizedSpan,
    start: usize,
    end: usize,
    found: &mut Vec<usize>,
) {
    let marks_start = found.last().is_some_and(|&top| top >= start);
    let leading = if marks_start { None } else { Some(0) };

    for pos in leading.into_iter().chain(path.iter().copied()) {
        let offset = span.offset_of(pos) + start;
        if offset != start && found.binary_search(&offset).is_err() {
            found.push(offset);
        }
    }

    if found.last() == Some(&end) {
        found.pop();
    }
}
