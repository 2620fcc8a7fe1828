//! Integration tests for trigger_augment

use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use trigger_augment::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = "The cat slept by the window. A dog barked at the cat, \
and the cat ignored the dog. Later the category of the show changed.";

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_identity_for_empty_lists() {
    let aug = Augmenter::new();
    let no_triggers = Preset::new(Vec::<String>::new(), ["quietly"]);
    let no_enhancements = Preset::new(["cat"], Vec::<String>::new());

    assert_eq!(aug.augment(SAMPLE_TEXT, &no_triggers, &mut rng(1)), SAMPLE_TEXT);
    assert_eq!(aug.augment(SAMPLE_TEXT, &no_enhancements, &mut rng(1)), SAMPLE_TEXT);
}

#[test]
fn test_boundary_safety() {
    let preset = Preset::new(["cat"], ["X"]);
    let out = Augmenter::new().augment("category and cat", &preset, &mut rng(1));
    assert_eq!(out, "category and cat X");
}

#[test]
fn test_case_insensitivity() {
    let preset = Preset::new(["Hello"], ["X"]);
    let out = augment("hello there", &preset);
    assert_eq!(out, "Hello X there");
}

#[test]
fn test_no_repeats_within_one_call() {
    let preset = Preset::new(["go"], ["A", "B"]);
    for seed in 0..50 {
        let out = Augmenter::new().augment("go go go", &preset, &mut rng(seed));
        let words: Vec<&str> = out.split_whitespace().collect();
        assert!(words.iter().filter(|w| **w == "A").count() <= 1, "{out}");
        assert!(words.iter().filter(|w| **w == "B").count() <= 1, "{out}");
        assert_eq!(words.iter().filter(|w| **w == "go").count(), 3);
        // The pool holds two phrases, so at least the last occurrence is bare.
        assert!(out.ends_with("go"), "{out}");
    }
}

#[test]
fn test_longest_first() {
    let preset = Preset::new(["York", "New York"], ["X"]);
    let out = Augmenter::new().augment("I live in New York City", &preset, &mut rng(1));
    assert_eq!(out, "I live in New York X City");
}

#[test]
fn test_pipeline_abort_preserves_partial_work() {
    let valid = PresetRecord::from_json(
        r#"{"name": "animals", "triggers": ["cat", "dog"], "enhancements": ["softly", "loudly", "again"]}"#,
    )
    .unwrap();
    let malformed = PresetRecord::from_json(r#"{"name": "broken", "triggers": ["cat"]}"#).unwrap();

    let pipeline = Pipeline::new();
    let outcome = pipeline.run(
        SAMPLE_TEXT,
        &[valid.clone(), malformed],
        &mut rng(5),
        &mut NoopObserver,
    );

    let preset = valid.validate(0).unwrap();
    let expected = Augmenter::new().augment(SAMPLE_TEXT, &preset, &mut rng(5));

    assert_eq!(outcome.text, expected);
    assert_eq!(outcome.applied_count, 1);
    assert_eq!(outcome.status, PipelineStatus::Aborted);
    let error = outcome.error.unwrap();
    assert_eq!(error.preset_index, 1);
    assert_eq!(error.preset_name, "broken");
}

#[test]
fn test_selection_bound() {
    let preset = Preset::new(["cat"], ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    for seed in 0..100 {
        let out = Augmenter::new().augment("cat", &preset, &mut rng(seed));
        let appended = out.split_whitespace().count() - 1;
        assert!((1..=3).contains(&appended), "{out}");
    }
}

#[test]
fn test_try_augment_input_errors() {
    let preset = Preset::new(["cat"], ["X"]);
    let err = try_augment("   ", &preset).unwrap_err();
    assert!(err.is_input_error());

    let err = try_augment("cat", &Preset::new(Vec::<String>::new(), ["X"])).unwrap_err();
    assert!(matches!(err, AugmentError::EmptyInput { .. }));
}

#[test]
fn test_pipeline_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = Preset::new(["cat"], ["purrs"]).with_name("01 cats");
    let second = Preset::new(["purrs"], ["softly"]).with_name("02 sounds");
    preset::save_preset(dir.path(), &first).unwrap();
    preset::save_preset(dir.path(), &second).unwrap();

    let files = preset::list_preset_files(dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let mut obs = StageTimingObserver::new();
    let outcome = Pipeline::new().run("my cat", &files, &mut rng(3), &mut obs);

    assert!(outcome.is_completed());
    assert_eq!(outcome.text, "my cat purrs softly");
    assert_eq!(outcome.applied_count, 2);

    let names: Vec<&str> = obs.reports().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["01 cats", "02 sounds"]);
    assert_eq!(obs.reports()[0].1.matches(), 1);
}

#[test]
fn test_pipeline_unreadable_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let good = preset::save_preset(dir.path(), &Preset::new(["cat"], ["X"]).with_name("good"))
        .unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "not json at all").unwrap();

    let outcome = Pipeline::new().run("cat", &[good, bad], &mut rng(1), &mut NoopObserver);
    assert_eq!(outcome.text, "cat X");
    assert_eq!(outcome.applied_count, 1);
    let error = outcome.error.unwrap();
    assert_eq!(error.code, ErrorCode::LoadFailed);
    assert_eq!(error.preset_name, "bad.json");
}

#[test]
fn test_editor_preset_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let preset = Preset::from_lines("cat\n  dog  \n\n", "fluffy\nsleepy\n").with_name("Pets");
    let path = preset::save_preset(dir.path(), &preset).unwrap();

    let record = preset::read_record(&path).unwrap();
    let loaded = record.validate(0).unwrap();
    assert_eq!(loaded.triggers, vec!["cat", "dog"]);
    assert_eq!(loaded.enhancements, vec!["fluffy", "sleepy"]);
}

#[test]
fn test_progress_reports_every_stage() {
    let presets = vec![
        Preset::new(["cat"], ["X"]).with_name("one"),
        Preset::new(["dog"], ["Y"]).with_name("two"),
        Preset::new(["window"], ["Z"]).with_name("three"),
    ];
    let mut progress = Vec::new();
    let outcome = Pipeline::new().run(
        SAMPLE_TEXT,
        &presets,
        &mut rng(8),
        &mut ProgressFn(|index: usize, total: usize, name: &str| {
            progress.push(format!("{}/{} {}", index + 1, total, name))
        }),
    );
    assert!(outcome.is_completed());
    assert_eq!(progress, vec!["1/3 one", "2/3 two", "3/3 three"]);
}

#[test]
fn test_seeded_config_reproducible_batch() {
    let config = AugmentConfig::default().with_seed(11);
    let pipeline = Pipeline::with_config(config).unwrap();
    let presets = vec![Preset::new(["cat", "dog"], ["a", "b", "c", "d", "e", "f"])];
    let docs: Vec<String> = (0..8).map(|_| SAMPLE_TEXT.to_string()).collect();

    let first = pipeline.run_batch(&docs, &presets);
    let second = pipeline.run_batch(&docs, &presets);
    assert_eq!(first, second);
    assert!(first.iter().all(|o| o.applied_count == 1));
}

#[test]
fn test_category_never_augmented_in_sample() {
    let preset = Preset::new(["cat"], ["one", "two", "three", "four", "five", "six", "seven"]);
    let out = Augmenter::new().augment(SAMPLE_TEXT, &preset, &mut rng(4));
    assert!(out.contains(" category of the show"));
    assert!(out.starts_with("The cat "));
}
