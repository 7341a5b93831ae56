//! Normalization adapter
//!
//! Turns a raw span into an NFKC character stream plus an index map from
//! every normalized character boundary back to a byte offset of the raw span.

use tracing::warn;
use unicode_normalization::char::{canonical_combining_class, decompose_compatible};
use unicode_normalization::{is_nfkc, is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Normalized characters of one span with their offsets into the raw span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSpan {
    chars: Vec<char>,
    /// `index_map[i]` is the raw byte offset of the boundary before `chars[i]`;
    /// the final entry is the raw span length.
    index_map: Vec<usize>,
    rewritten: bool,
}

impl NormalizedSpan {
    /// Normalize `raw`, reusing it verbatim when it is already in NFKC.
    pub fn from_raw(raw: &str) -> Self {
        if is_already_nfkc(raw) {
            Self::identity(raw)
        } else {
            Self::normalize(raw)
        }
    }

    fn identity(raw: &str) -> Self {
        let mut chars = Vec::with_capacity(raw.len());
        let mut index_map = Vec::with_capacity(raw.len() + 1);
        index_map.push(0);
        for (offset, ch) in raw.char_indices() {
            chars.push(ch);
            index_map.push(offset + ch.len_utf8());
        }
        Self {
            chars,
            index_map,
            rewritten: false,
        }
    }

    /// Normalize chunk by chunk so every output character can be traced to
    /// the raw chunk that produced it. Characters of a chunk that expands to
    /// several outputs map to the chunk start, except the last which maps to
    /// the chunk end.
    fn normalize(raw: &str) -> Self {
        let mut cuts: Vec<usize> = raw
            .char_indices()
            .filter(|&(offset, ch)| offset > 0 && has_boundary_before(ch))
            .map(|(offset, _)| offset)
            .collect();
        cuts.insert(0, 0);
        cuts.push(raw.len());

        let mut chars = Vec::with_capacity(raw.len());
        let mut index_map = vec![0];
        for window in cuts.windows(2) {
            let (start, end) = (window[0], window[1]);
            let before = chars.len();
            chars.extend(raw[start..end].nfkc());
            let produced = chars.len() - before;
            for k in 0..produced {
                index_map.push(if k + 1 == produced { end } else { start });
            }
        }

        let whole: Vec<char> = raw.nfkc().collect();
        if whole != chars {
            warn!(
                "chunked normalization diverged for a {}-byte span; mapping it as one chunk",
                raw.len()
            );
            let count = whole.len();
            index_map = std::iter::once(0)
                .chain((1..=count).map(|k| if k == count { raw.len() } else { 0 }))
                .collect();
            chars = whole;
        }

        Self {
            chars,
            index_map,
            rewritten: true,
        }
    }

    /// The normalized characters
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Offsets of each normalized boundary in the raw span (`len() + 1` entries)
    pub fn index_map(&self) -> &[usize] {
        &self.index_map
    }

    /// Raw byte offset of normalized boundary `pos`
    pub fn offset_of(&self, pos: usize) -> usize {
        self.index_map[pos]
    }

    /// Number of normalized characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the span holds no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when normalization changed the text
    pub fn was_rewritten(&self) -> bool {
        self.rewritten
    }
}

fn is_already_nfkc(raw: &str) -> bool {
    match is_nfkc_quick(raw.chars()) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => is_nfkc(raw),
    }
}

/// Whether NFKC can never merge `ch` with anything before it
fn has_boundary_before(ch: char) -> bool {
    let mut first = None;
    decompose_compatible(ch, |d| {
        if first.is_none() {
            first = Some(d);
        }
    });
    let first = first.unwrap_or(ch);
    canonical_combining_class(first) == 0 && !is_conjoining_vowel_or_trail(first)
}

fn is_conjoining_vowel_or_trail(ch: char) -> bool {
    matches!(ch as u32, 0x1161..=0x1175 | 0x11A8..=0x11C2)
}
