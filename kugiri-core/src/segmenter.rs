//! Minimum-cost segmentation of a normalized character stream
//!
//! A single forward pass relaxes edges from every reachable position: one edge
//! per dictionary candidate, a costly single-character escape when the
//! dictionary has no one-character word, and one edge covering a whole
//! Katakana run. The cheapest path is then read back from the end.

use crate::dictionary::{Candidate, DictionaryMatcher};
use crate::word_set::{is_katakana, HANGUL};
use tracing::trace;

/// Longest dictionary lookahead, in characters
pub const MAX_WORD_SIZE: usize = 20;

/// Cost of a character the dictionary does not know as a word on its own
pub const MAX_SNLP: u32 = 255;

/// Longest Katakana run with its own entry in the cost table
pub const MAX_KATAKANA_LENGTH: usize = 8;

/// Runs this long or longer are not grouped
pub const MAX_KATAKANA_GROUP_LENGTH: usize = 20;

const KATAKANA_COSTS: [u32; MAX_KATAKANA_LENGTH + 1] =
    [8192, 984, 408, 240, 204, 252, 300, 372, 480];

/// Cost of treating a Katakana run of `length` characters as one word
pub fn katakana_cost(length: usize) -> u32 {
    if length > MAX_KATAKANA_LENGTH {
        KATAKANA_COSTS[0]
    } else {
        KATAKANA_COSTS[length]
    }
}

/// Best known way to reach one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// The start of the span
    Origin,
    /// No path found yet
    Unreached,
    /// Cheapest path so far arrives from `prev`
    Via { cost: u32, prev: usize },
}

impl Reach {
    fn cost(self) -> Option<u32> {
        match self {
            Reach::Origin => Some(0),
            Reach::Unreached => None,
            Reach::Via { cost, .. } => Some(cost),
        }
    }
}

/// Cost and predecessor of every position, kept together so they cannot
/// disagree.
#[derive(Debug)]
struct BestPathTable {
    nodes: Vec<Reach>,
}

impl BestPathTable {
    fn new(num_chars: usize) -> Self {
        let mut nodes = vec![Reach::Unreached; num_chars + 1];
        nodes[0] = Reach::Origin;
        Self { nodes }
    }

    fn cost(&self, pos: usize) -> Option<u32> {
        self.nodes[pos].cost()
    }

    /// Offer the edge `from -> to`. Strictly cheaper paths win, so among equal
    /// costs the first one offered stays.
    fn relax(&mut self, from: usize, to: usize, edge_cost: u32) -> bool {
        let Some(base) = self.cost(from) else {
            return false;
        };
        let cost = base.saturating_add(edge_cost);
        let improves = match self.cost(to) {
            Some(current) => cost < current,
            None => true,
        };
        if improves {
            self.nodes[to] = Reach::Via { cost, prev: from };
        }
        improves
    }

    /// Positions on the best path, ascending, ending at the last position and
    /// excluding the origin.
    ///
    /// # Panics
    ///
    /// If the predecessor chain does not lead back to position 0.
    fn backtrack(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut pos = self.nodes.len() - 1;
        while pos > 0 {
            path.push(pos);
            pos = match self.nodes[pos] {
                Reach::Via { prev, .. } if prev < pos => prev,
                other => panic!("best path chain broken at position {pos}: {other:?}"),
            };
        }
        path.reverse();
        path
    }
}

/// Result of segmenting one normalized span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPath {
    /// Normalized positions where words end, ascending; the last one is the
    /// span length. Empty for an empty span.
    pub boundaries: Vec<usize>,
    /// Total cost of the chosen segmentation, `None` if the end was not
    /// reachable and the span is kept whole
    pub cost: Option<u32>,
}

/// Dynamic-programming segmenter over a dictionary
pub struct Segmenter<'d> {
    dictionary: &'d dyn DictionaryMatcher,
}

impl<'d> Segmenter<'d> {
    /// Create a segmenter reading candidates from `dictionary`
    pub fn new(dictionary: &'d dyn DictionaryMatcher) -> Self {
        Self { dictionary }
    }

    /// Find the cheapest segmentation of `chars`
    pub fn segment(&self, chars: &[char]) -> BestPath {
        let num_chars = chars.len();
        if num_chars == 0 {
            return BestPath {
                boundaries: Vec::new(),
                cost: Some(0),
            };
        }

        let mut table = BestPathTable::new(num_chars);
        let mut candidates: Vec<Candidate> = Vec::with_capacity(MAX_WORD_SIZE + 1);

        for i in 0..num_chars {
            if table.cost(i).is_none() {
                continue;
            }

            let max_length = MAX_WORD_SIZE.min(num_chars - i);
            candidates.clear();
            self.dictionary
                .matches(&chars[i..], max_length, max_length, &mut candidates);

            // Only the first candidate is inspected; Hangul is left to the
            // dictionary alone.
            let first_is_single = candidates.first().is_some_and(|c| c.length == 1);
            if !first_is_single && !HANGUL.contains(chars[i]) {
                candidates.push(Candidate::new(1, MAX_SNLP));
            }

            for candidate in &candidates {
                debug_assert!(
                    (1..=max_length).contains(&candidate.length),
                    "matcher returned length {} with max {max_length}",
                    candidate.length
                );
                if candidate.length == 0 || candidate.length > max_length {
                    continue;
                }
                table.relax(i, i + candidate.length, candidate.cost);
            }

            if is_katakana(chars[i]) && (i == 0 || !is_katakana(chars[i - 1])) {
                let run = katakana_run_length(&chars[i..]);
                if run < MAX_KATAKANA_GROUP_LENGTH && table.relax(i, i + run, katakana_cost(run)) {
                    trace!("grouped katakana run at {i} of length {run}");
                }
            }
        }

        match table.cost(num_chars) {
            Some(cost) => BestPath {
                boundaries: table.backtrack(),
                cost: Some(cost),
            },
            None => BestPath {
                boundaries: vec![num_chars],
                cost: None,
            },
        }
    }
}

/// Length of the Katakana run starting at `chars[0]`, capped at
/// [`MAX_KATAKANA_GROUP_LENGTH`].
fn katakana_run_length(chars: &[char]) -> usize {
    let mut length = 1;
    while length < chars.len()
        && length < MAX_KATAKANA_GROUP_LENGTH
        && is_katakana(chars[length])
    {
        length += 1;
    }
    length
}
