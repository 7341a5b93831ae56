//! Script word-sets
//!
//! Frozen code point tables deciding which characters an engine instance
//! serves. The tables are `static` range lists, so they are immutable and
//! shared by every engine without synchronization.

/// An immutable set of code points stored as sorted, disjoint inclusive ranges
#[derive(Debug)]
pub struct WordSet {
    name: &'static str,
    ranges: &'static [(u32, u32)],
}

impl WordSet {
    /// Create a set from sorted, non-overlapping inclusive ranges
    pub const fn new(name: &'static str, ranges: &'static [(u32, u32)]) -> Self {
        Self { name, ranges }
    }

    /// Human readable name of the set
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check membership with a binary search over the range table
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < cp {
                    std::cmp::Ordering::Less
                } else if lo > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

/// Precomposed Hangul syllables
pub static HANGUL: WordSet = WordSet::new("Hangul", &[(0xAC00, 0xD7A3)]);

/// Characters of the Han script
pub static HAN: WordSet = WordSet::new(
    "Han",
    &[
        (0x2E80, 0x2E99),
        (0x2E9B, 0x2EF3),
        (0x2F00, 0x2FD5),
        (0x3005, 0x3005),
        (0x3007, 0x3007),
        (0x3021, 0x3029),
        (0x3038, 0x303B),
        (0x3400, 0x4DBF),
        (0x4E00, 0x9FFF),
        (0xF900, 0xFA6D),
        (0xFA70, 0xFAD9),
        (0x16FE2, 0x16FE3),
        (0x16FF0, 0x16FF1),
        (0x20000, 0x2A6DF),
        (0x2A700, 0x2B739),
        (0x2B740, 0x2B81D),
        (0x2B820, 0x2CEA1),
        (0x2CEB0, 0x2EBE0),
        (0x2F800, 0x2FA1D),
        (0x30000, 0x3134A),
        (0x31350, 0x323AF),
    ],
);

/// Characters of the Katakana script plus the half-width voiced sound marks
pub static KATAKANA: WordSet = WordSet::new(
    "Katakana",
    &[
        (0x30A1, 0x30FA),
        (0x30FD, 0x30FF),
        (0x31F0, 0x31FF),
        (0x32D0, 0x32FE),
        (0x3300, 0x3357),
        (0xFF66, 0xFF6F),
        // U+FF9E and U+FF9F are Common script but belong with Katakana here
        (0xFF71, 0xFF9F),
        (0x1AFF0, 0x1AFF3),
        (0x1AFF5, 0x1AFFB),
        (0x1AFFD, 0x1AFFE),
        (0x1B000, 0x1B000),
        (0x1B120, 0x1B122),
        (0x1B155, 0x1B155),
        (0x1B164, 0x1B167),
    ],
);

/// Characters of the Hiragana script
pub static HIRAGANA: WordSet = WordSet::new(
    "Hiragana",
    &[
        (0x3041, 0x3096),
        (0x309D, 0x309F),
        (0x1B001, 0x1B11F),
        (0x1B132, 0x1B132),
        (0x1B150, 0x1B152),
        (0x1F200, 0x1F200),
    ],
);

/// Full-width and half-width prolonged sound marks
pub static PROLONGED_SOUND_MARKS: WordSet =
    WordSet::new("ProlongedSoundMark", &[(0x30FC, 0x30FC), (0xFF70, 0xFF70)]);

static KOREAN_SETS: [&WordSet; 1] = [&HANGUL];

static CHINESE_JAPANESE_SETS: [&WordSet; 4] =
    [&HAN, &KATAKANA, &HIRAGANA, &PROLONGED_SOUND_MARKS];

/// Which family of scripts an engine instance serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVariant {
    /// Hangul syllables only
    Korean,
    /// Han, Katakana and Hiragana, plus the prolonged sound marks
    ChineseJapanese,
}

impl ScriptVariant {
    /// Select the variant from the constructor flag
    pub fn from_korean(korean: bool) -> Self {
        if korean {
            ScriptVariant::Korean
        } else {
            ScriptVariant::ChineseJapanese
        }
    }

    /// The sets whose union this variant serves
    pub fn word_sets(self) -> &'static [&'static WordSet] {
        match self {
            ScriptVariant::Korean => &KOREAN_SETS,
            ScriptVariant::ChineseJapanese => &CHINESE_JAPANESE_SETS,
        }
    }

    /// Check whether the variant serves this character
    #[inline]
    pub fn contains(self, ch: char) -> bool {
        self.word_sets().iter().any(|set| set.contains(ch))
    }
}

/// Katakana test used by the run-grouping heuristic.
///
/// Narrower than [`KATAKANA`]: full-width U+30A1..U+30FE without the middle
/// dot U+30FB, and half-width U+FF66..U+FF9F.
#[inline]
pub fn is_katakana(ch: char) -> bool {
    let cp = ch as u32;
    ((0x30A1..=0x30FE).contains(&cp) && cp != 0x30FB) || (0xFF66..=0xFF9F).contains(&cp)
}
