//! Tests for template selection and batch generation.

use std::collections::HashSet;

use phrasegen::{AssetStore, Dataset, ExpandError, Expander, Generator, collapse_spaces};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(3)
}

fn dataset() -> Dataset {
    Dataset::new(
        vec!["[who] [verb]".to_string(), "The [thing]".to_string()],
        AssetStore::from_iter([
            ("who", vec!["Tim", "Karl"]),
            ("verb", vec!["runs", "hides"]),
            ("thing", vec!["clock", "mill"]),
        ]),
    )
}

#[test]
fn generate_uses_every_template() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let mut rng = rng();
    let starts: HashSet<bool> = (0..100)
        .map(|_| generator.generate(&mut rng).unwrap().starts_with("The "))
        .collect();
    assert_eq!(starts.len(), 2);
}

#[test]
fn generate_many_returns_requested_count() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let phrases = generator.generate_many(7, &mut rng()).unwrap();
    assert_eq!(phrases.len(), 7);
    assert!(phrases.iter().all(|p| !p.contains('[')));
}

#[test]
fn generate_many_zero_is_empty() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    assert!(generator.generate_many(0, &mut rng()).unwrap().is_empty());
}

#[test]
fn generate_indexed_forces_template() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let mut rng = rng();
    for phrase in generator.generate_many_indexed(1, 20, &mut rng).unwrap() {
        assert!(phrase == "The clock" || phrase == "The mill", "got {phrase}");
    }
}

#[test]
fn generate_indexed_out_of_range() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let err = generator.generate_indexed(9, &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        ExpandError::TemplateIndexOutOfRange { index: 9, count: 2 }
    ));
}

#[test]
fn generate_without_templates_fails() {
    let dataset = Dataset::new(Vec::new(), AssetStore::from_iter([("a", vec!["x"])]));
    let generator = Generator::new(&dataset);
    let err = generator.generate(&mut rng()).unwrap_err();
    assert!(matches!(err, ExpandError::NoTemplates));
}

#[test]
fn generate_from_uses_dataset_assets() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let out = generator.generate_from("[thing]!", &mut rng()).unwrap();
    assert!(out == "clock!" || out == "mill!");
}

#[test]
fn generator_passes_expander_settings() {
    let dataset = dataset();
    let generator = Generator::builder()
        .dataset(&dataset)
        .expander(Expander::builder().search("karl").build())
        .build();
    let mut rng = rng();
    for _ in 0..20 {
        let out = generator.generate_from("[who]", &mut rng).unwrap();
        assert_eq!(out, "Karl");
    }
}

#[test]
fn collapse_spaces_option() {
    let dataset = Dataset::new(
        vec!["a [gap] b".to_string()],
        AssetStore::from_iter([("gap", vec![""])]),
    );
    let plain = Generator::new(&dataset);
    assert_eq!(plain.generate(&mut rng()).unwrap(), "a  b");

    let collapsing = Generator::builder()
        .dataset(&dataset)
        .collapse_spaces(true)
        .build();
    assert_eq!(collapsing.generate(&mut rng()).unwrap(), "a b");
}

#[test]
fn collapse_spaces_keeps_other_whitespace() {
    assert_eq!(collapse_spaces("a   b    c"), "a b c");
    assert_eq!(collapse_spaces(" lead"), " lead");
    assert_eq!(collapse_spaces("tab\t\tstays"), "tab\t\tstays");
    assert_eq!(collapse_spaces("line\n\nbreak"), "line\n\nbreak");
}

#[test]
fn same_seed_same_batch() {
    let dataset = dataset();
    let generator = Generator::new(&dataset);
    let a = generator
        .generate_many(10, &mut StdRng::seed_from_u64(99))
        .unwrap();
    let b = generator
        .generate_many(10, &mut StdRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(a, b);
}
