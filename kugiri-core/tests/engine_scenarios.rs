//! Engine scenarios driven by scripted dictionaries
//!
//! Each test feeds the engine a matcher whose answers are fixed per leading
//! character, so the expected segmentation can be worked out by hand.

use kugiri_core::segmenter::katakana_cost;
use kugiri_core::{
    BreakKind, Candidate, CjkBreakEngine, DictionaryMatcher, DictionarySource, Segmenter,
    TextCursor, WordBreaker, WordListDictionary, MAX_SNLP,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Answers with a fixed candidate list keyed by the first character
#[derive(Default)]
struct ScriptedMatcher {
    answers: HashMap<char, Vec<Candidate>>,
    queries: Mutex<Vec<(char, usize)>>,
}

impl ScriptedMatcher {
    fn with(mut self, ch: char, candidates: &[(usize, u32)]) -> Self {
        self.answers.insert(
            ch,
            candidates
                .iter()
                .map(|&(length, cost)| Candidate::new(length, cost))
                .collect(),
        );
        self
    }
}

impl DictionaryMatcher for ScriptedMatcher {
    fn matches(
        &self,
        text: &[char],
        max_length: usize,
        limit: usize,
        candidates: &mut Vec<Candidate>,
    ) {
        let Some(&first) = text.first() else {
            return;
        };
        self.queries.lock().unwrap().push((first, max_length));
        if let Some(answer) = self.answers.get(&first) {
            candidates.extend(
                answer
                    .iter()
                    .filter(|c| c.length <= max_length)
                    .take(limit)
                    .copied(),
            );
        }
    }
}

fn run(engine: &CjkBreakEngine, text: &str, start: usize, end: usize, found: &mut Vec<usize>) {
    let mut cursor = TextCursor::new(text);
    engine.find_breaks(&mut cursor, start, end, false, BreakKind::Word, found);
}

fn engine_with(matcher: ScriptedMatcher) -> CjkBreakEngine {
    CjkBreakEngine::with_matcher(false, Arc::new(matcher))
}

#[test]
fn test_no_candidates_splits_every_character() {
    let engine = engine_with(ScriptedMatcher::default());
    let text = "xx漢字仮名交yy";
    let start = 2;
    let end = text.len() - 2;

    let mut found = Vec::new();
    run(&engine, text, start, end, &mut found);

    let expected: Vec<usize> = (1..5).map(|k| start + 3 * k).collect();
    assert_eq!(found, expected);
    assert!(!found.contains(&start));
    assert!(!found.contains(&end));
}

#[test]
fn test_katakana_run_beats_single_character_fallback() {
    let engine = engine_with(ScriptedMatcher::default());
    let text = "カメラマン";

    let chars: Vec<char> = text.chars().collect();
    let matcher = ScriptedMatcher::default();
    let path = Segmenter::new(&matcher).segment(&chars);
    assert_eq!(path.boundaries, vec![5]);
    assert_eq!(path.cost, Some(katakana_cost(5)));
    assert!(katakana_cost(5) < 5 * MAX_SNLP);

    let mut found = Vec::new();
    run(&engine, text, 0, text.len(), &mut found);
    assert!(found.is_empty(), "one word spanning the whole run: {found:?}");
}

#[test]
fn test_katakana_run_inside_mixed_span() {
    let matcher = ScriptedMatcher::default()
        .with('は', &[(1, 30)])
        .with('を', &[(1, 30)]);
    let engine = engine_with(matcher);
    // は | テレビ | を
    let text = "はテレビを";
    let mut found = Vec::new();
    run(&engine, text, 0, text.len(), &mut found);
    assert_eq!(found, vec![3, 12]);
}

#[test]
fn test_equal_cost_paths_keep_first_discovered() {
    // 0 -> 2 -> 5 and 0 -> 3 -> 5 both cost 150; position 2 is expanded
    // before position 3, so its path to the end is found first and kept.
    for order in [[(2, 100), (3, 100)], [(3, 100), (2, 100)]] {
        let matcher = ScriptedMatcher::default()
            .with('一', &order)
            .with('三', &[(3, 50)])
            .with('四', &[(2, 50)]);
        let chars: Vec<char> = "一二三四五".chars().collect();
        let path = Segmenter::new(&matcher).segment(&chars);
        assert_eq!(path.boundaries, vec![2, 5]);
        assert_eq!(path.cost, Some(150));
    }
}

#[test]
fn test_first_candidate_decides_single_character_escape() {
    // A one-character word listed first suppresses the escape edge
    let listed_first = ScriptedMatcher::default().with('語', &[(1, 400), (2, 900)]);
    let chars: Vec<char> = "語彙".chars().collect();
    let path = Segmenter::new(&listed_first).segment(&chars);
    assert_eq!(path.cost, Some(400 + MAX_SNLP));

    // Listed second, the escape edge is added and undercuts it
    let listed_second = ScriptedMatcher::default().with('語', &[(2, 900), (1, 400)]);
    let path = Segmenter::new(&listed_second).segment(&chars);
    assert_eq!(path.cost, Some(2 * MAX_SNLP));
}

#[test]
fn test_lookahead_is_capped() {
    let matcher = Arc::new(ScriptedMatcher::default());
    let engine = CjkBreakEngine::with_matcher(false, matcher.clone());
    let text: String = "漢".repeat(25);
    let mut found = Vec::new();
    run(&engine, &text, 0, text.len(), &mut found);

    let queries = matcher.queries.lock().unwrap();
    assert_eq!(queries.len(), 25);
    assert_eq!(queries[0].1, 20);
    assert_eq!(queries[5].1, 20);
    assert_eq!(queries[6].1, 19);
    assert_eq!(queries[24].1, 1);
}

#[test]
fn test_unreachable_hangul_span_stays_whole() {
    let engine = CjkBreakEngine::with_matcher(true, Arc::new(ScriptedMatcher::default()));
    let text = "한국어";
    let mut found = Vec::new();
    run(&engine, text, 0, text.len(), &mut found);
    assert!(found.is_empty());
}

#[test]
fn test_start_is_never_pushed() {
    let matcher = ScriptedMatcher::default().with('東', &[(2, 10)]);
    let engine = engine_with(matcher);
    let text = "ab東京";

    // Nothing marks the start yet
    let mut found = Vec::new();
    run(&engine, text, 2, text.len(), &mut found);
    assert!(found.is_empty());

    // A boundary before the span is kept and the start is still not added
    let mut found = vec![1];
    run(&engine, text, 2, text.len(), &mut found);
    assert_eq!(found, vec![1]);
}

#[test]
fn test_merges_into_existing_boundaries() {
    let engine = engine_with(ScriptedMatcher::default());
    let text = "abc漢字";
    let mut found = vec![0, 3];
    run(&engine, text, 3, text.len(), &mut found);
    assert_eq!(found, vec![0, 3, 6]);
}

#[test]
fn test_cursor_left_on_top_boundary() {
    let engine = engine_with(ScriptedMatcher::default());
    let text = "漢字仮名";
    let mut cursor = TextCursor::new(text);
    let mut found = Vec::new();
    engine.find_breaks(&mut cursor, 0, text.len(), true, BreakKind::Word, &mut found);
    assert_eq!(found, vec![3, 6, 9]);
    assert_eq!(cursor.index(), 9);
}

#[test]
fn test_half_width_input_maps_to_raw_offsets() {
    // ｶﾞｸｾｲ normalizes to ガクセイ; a dictionary word covers all four
    let matcher = ScriptedMatcher::default()
        .with('ガ', &[(4, 10)])
        .with('は', &[(1, 10)]);
    let engine = engine_with(matcher);
    let text = "\u{FF76}\u{FF9E}\u{FF78}\u{FF7E}\u{FF72}は";
    let mut found = Vec::new();
    run(&engine, text, 0, text.len(), &mut found);
    assert_eq!(found, vec![15]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = CjkBreakEngine::new(false, &DictionarySource::Embedded).unwrap();
    let text = "私は東京に住んでいます";
    let mut first = Vec::new();
    let mut second = Vec::new();
    run(&engine, text, 0, text.len(), &mut first);
    run(&engine, text, 0, text.len(), &mut second);
    assert_eq!(first, second);
}

#[test]
fn test_embedded_dictionary_sentences() {
    let engine = CjkBreakEngine::new(false, &DictionarySource::Embedded).unwrap();
    let breaker = WordBreaker::new(engine);

    let words: Vec<&str> = breaker
        .words("私は東京に住んでいます")
        .into_iter()
        .map(|w| w.text)
        .collect();
    assert_eq!(words, vec!["私", "は", "東京", "に", "住んで", "います"]);

    let words: Vec<&str> = breaker
        .words("我是学生")
        .into_iter()
        .map(|w| w.text)
        .collect();
    assert_eq!(words, vec!["我", "是", "学生"]);
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = Arc::new(engine_with(ScriptedMatcher::default()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let text = "漢字仮名";
                let mut found = Vec::new();
                run(&engine, text, 0, text.len(), &mut found);
                found
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![3, 6, 9]);
    }
}

#[test]
fn test_long_text_scales_linearly() {
    let empty = Arc::new(WordListDictionary::new("empty"));
    let breaker = WordBreaker::new(CjkBreakEngine::with_matcher(false, empty));

    let time = |chars: usize| {
        let text = "漢字".repeat(chars / 2);
        let started = Instant::now();
        let boundaries = breaker.boundaries(&text);
        assert_eq!(boundaries.len(), chars + 1);
        started.elapsed()
    };

    let small = time(25_000);
    let large = time(100_000);
    assert!(large < Duration::from_secs(10), "100k characters took {large:?}");
    // Four times the input; a quadratic merge would take about sixteen times longer
    assert!(
        large < small * 10 + Duration::from_millis(200),
        "25k: {small:?}, 100k: {large:?}"
    );
}

#[test]
#[should_panic(expected = "not a character boundary")]
fn test_end_inside_character_panics() {
    let engine = engine_with(ScriptedMatcher::default());
    let mut found = Vec::new();
    run(&engine, "漢字仮名", 0, 4, &mut found);
}
