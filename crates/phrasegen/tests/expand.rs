//! Tests for recursive placeholder expansion.

use std::collections::HashSet;

use phrasegen::{AssetStore, Expander, expand};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn nested_store() -> AssetStore {
    AssetStore::from_iter([("a", vec!["[b] end"]), ("b", vec!["X", "Y"])])
}

// =========================================================================
// Literal pass-through
// =========================================================================

#[test]
fn literal_template_is_unchanged() {
    let store = nested_store();
    let out = expand("no brackets here", &store, &mut rng()).unwrap();
    assert_eq!(out, "no brackets here");
}

#[test]
fn literal_template_ignores_empty_store() {
    let out = expand("just text", &AssetStore::new(), &mut rng()).unwrap();
    assert_eq!(out, "just text");
}

#[test]
fn empty_template_is_unchanged() {
    let out = expand("", &AssetStore::new(), &mut rng()).unwrap();
    assert_eq!(out, "");
}

#[test]
fn unclosed_marker_passes_through() {
    let store = AssetStore::from_iter([("a", vec!["1"])]);
    let out = expand("[a] and [a", &store, &mut rng()).unwrap();
    assert_eq!(out, "1 and [a");
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn single_marker_resolves_to_a_candidate() {
    let store = AssetStore::from_iter([("color", vec!["red", "green", "blue"])]);
    let mut rng = rng();
    for _ in 0..50 {
        let out = expand("[color]", &store, &mut rng).unwrap();
        assert!(["red", "green", "blue"].contains(&out.as_str()), "got {out}");
    }
}

#[test]
fn nested_marker_resolves_fully() {
    let store = nested_store();
    let mut rng = rng();
    for _ in 0..50 {
        let out = expand("[a]", &store, &mut rng).unwrap();
        assert!(out == "X end" || out == "Y end", "got {out}");
        assert!(!out.contains('[') && !out.contains(']'));
    }
}

#[test]
fn transitive_nesting() {
    let store = AssetStore::from_iter([
        ("title", vec!["[who] and the [what]"]),
        ("who", vec!["[adj] [name]"]),
        ("adj", vec!["brave"]),
        ("name", vec!["Tim"]),
        ("what", vec!["ghost"]),
    ]);
    let out = expand("Episode: [title]!", &store, &mut rng()).unwrap();
    assert_eq!(out, "Episode: brave Tim and the ghost!");
}

#[test]
fn repeated_markers_draw_independently() {
    let store = AssetStore::from_iter([("a", vec!["1", "2"])]);
    let mut rng = rng();
    let mut seen = HashSet::new();
    for _ in 0..400 {
        seen.insert(expand("[a]-[a]", &store, &mut rng).unwrap());
    }
    let expected: HashSet<String> = ["1-1", "1-2", "2-1", "2-2"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn every_candidate_is_reachable() {
    let store = AssetStore::from_iter([("n", vec!["a", "b", "c", "d"])]);
    let mut rng = rng();
    let seen: HashSet<String> = (0..400)
        .map(|_| expand("[n]", &store, &mut rng).unwrap())
        .collect();
    assert_eq!(seen.len(), 4);
}

#[test]
fn substituted_text_is_not_rescanned() {
    // "[open]b]" becomes "[" + "b]"; the "[b]" that appears is not a marker.
    let store = AssetStore::from_iter([("open", vec!["["]), ("b", vec!["WRONG"])]);
    let out = expand("[open]b]", &store, &mut rng()).unwrap();
    assert_eq!(out, "[b]");
}

#[test]
fn adjacent_substitutions_do_not_form_markers() {
    let store = AssetStore::from_iter([
        ("l", vec!["["]),
        ("r", vec!["]"]),
        ("x", vec!["x"]),
    ]);
    let out = expand("[l]x[r]", &store, &mut rng()).unwrap();
    assert_eq!(out, "[x]");
}

#[test]
fn candidate_with_brackets_but_no_marker_is_kept() {
    let store = AssetStore::from_iter([("odd", vec!["]odd["])]);
    let out = expand("<[odd]>", &store, &mut rng()).unwrap();
    assert_eq!(out, "<]odd[>");
}

#[test]
fn candidate_is_expanded_on_its_own() {
    // The unclosed bracket in the candidate stays literal.
    let store = AssetStore::from_iter([("a", vec!["[b] [c"]), ("b", vec!["B"])]);
    let out = expand("[a]", &store, &mut rng()).unwrap();
    assert_eq!(out, "B [c");
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn same_seed_same_output() {
    let store = AssetStore::from_iter([
        ("s", vec!["[a] [b] [c]"]),
        ("a", vec!["1", "2", "3", "4"]),
        ("b", vec!["5", "6", "7", "8"]),
        ("c", vec!["[a][b]", "9"]),
    ]);
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| expand("[s]", &store, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn works_with_dyn_rng() {
    let store = AssetStore::from_iter([("a", vec!["only"])]);
    let mut concrete = rng();
    let rng: &mut dyn rand::RngCore = &mut concrete;
    assert_eq!(expand("[a]", &store, rng).unwrap(), "only");
}

// =========================================================================
// Optional markers
// =========================================================================

#[test]
fn optional_markers_off_by_default() {
    let store = AssetStore::from_iter([("hat?", vec!["literal key"])]);
    let out = expand("[hat?]", &store, &mut rng()).unwrap();
    assert_eq!(out, "literal key");
}

#[test]
fn optional_zero_percent_is_always_dropped() {
    let store = AssetStore::from_iter([("hat", vec!["a hat"])]);
    let expander = Expander::builder().optional_markers(true).build();
    let mut rng = rng();
    for _ in 0..50 {
        assert_eq!(expander.expand("x[hat?0]y", &store, &mut rng).unwrap(), "xy");
    }
}

#[test]
fn optional_hundred_percent_is_always_kept() {
    let store = AssetStore::from_iter([("hat", vec!["a hat"])]);
    let expander = Expander::builder().optional_markers(true).build();
    let mut rng = rng();
    for _ in 0..50 {
        assert_eq!(expander.expand("[hat?100]", &store, &mut rng).unwrap(), "a hat");
    }
}

#[test]
fn optional_default_chance_sometimes_keeps() {
    let store = AssetStore::from_iter([("hat", vec!["H"])]);
    let expander = Expander::builder().optional_markers(true).build();
    let mut rng = rng();
    let seen: HashSet<String> = (0..200)
        .map(|_| expander.expand("[hat?]", &store, &mut rng).unwrap())
        .collect();
    assert!(seen.contains("H"));
    assert!(seen.contains(""));
}

#[test]
fn plain_markers_unaffected_by_optional_mode() {
    let store = AssetStore::from_iter([("hat", vec!["H"])]);
    let expander = Expander::builder().optional_markers(true).build();
    assert_eq!(expander.expand("[hat]", &store, &mut rng()).unwrap(), "H");
}

// =========================================================================
// Search preference
// =========================================================================

#[test]
fn search_prefers_matching_candidates() {
    let store = AssetStore::from_iter([("place", vec!["im Moor", "in der Stadt", "am See"])]);
    let expander = Expander::builder().search("moor").build();
    let mut rng = rng();
    for _ in 0..50 {
        assert_eq!(expander.expand("[place]", &store, &mut rng).unwrap(), "im Moor");
    }
}

#[test]
fn search_falls_back_when_nothing_matches() {
    let store = AssetStore::from_iter([("n", vec!["a", "b"])]);
    let expander = Expander::builder().search("zzz").build();
    let mut rng = rng();
    let seen: HashSet<String> = (0..200)
        .map(|_| expander.expand("[n]", &store, &mut rng).unwrap())
        .collect();
    assert_eq!(seen.len(), 2);
}

#[test]
fn blank_search_is_ignored() {
    let expander = Expander::builder().search("   ").build();
    assert_eq!(expander.search(), None);
}

#[test]
fn builder_defaults() {
    let expander = Expander::new();
    assert_eq!(expander.max_depth(), phrasegen::DEFAULT_MAX_DEPTH);
    assert!(!expander.optional_markers());
    assert_eq!(expander.search(), None);
}
