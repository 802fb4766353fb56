// tests/lexicon_config.rs
use fomc_stance_classifier::lexicon::{LexiconSet, MatchMode, ENV_LEXICON_PATH};
use fomc_stance_classifier::{Classifier, Stance};
use std::{env, fs};

const CUSTOM_TOML: &str = r#"
match_mode = "whole_word"

[hawkish]
"rate" = 1
"higher for longer" = 3

[dovish]
"cut" = 2
"#;

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("lexicon.toml");
    fs::write(&p_toml, CUSTOM_TOML).unwrap();
    let set = LexiconSet::load_from(&p_toml).unwrap();
    assert_eq!(set.match_mode(), MatchMode::WholeWord);
    assert_eq!(set.hawkish().weight_of("higher for longer"), Some(3));
    assert_eq!(set.dovish().weight_of("cut"), Some(2));

    let p_json = dir.path().join("lexicon.json");
    fs::write(&p_json, r#"{"hawkish":{"hike":2},"dovish":{"cut":1,"pause":1}}"#).unwrap();
    let set = LexiconSet::load_from(&p_json).unwrap();
    assert_eq!(set.match_mode(), MatchMode::Substring);
    assert_eq!(set.dovish().len(), 2);
}

#[test]
fn invalid_configs_fail_loudly() {
    let dir = tempfile::tempdir().unwrap();

    let zero = dir.path().join("zero.toml");
    fs::write(&zero, "[hawkish]\ntighten = 0\n").unwrap();
    let err = LexiconSet::load_from(&zero).unwrap_err();
    assert!(format!("{err:#}").contains("weight 0"), "{err:#}");

    let bad_mode = dir.path().join("mode.toml");
    fs::write(&bad_mode, "match_mode = \"fuzzy\"\n[hawkish]\ntighten = 1\n").unwrap();
    assert!(LexiconSet::load_from(&bad_mode).is_err());

    let negative = dir.path().join("neg.json");
    fs::write(&negative, r#"{"dovish":{"cut":-1}}"#).unwrap();
    assert!(LexiconSet::load_from(&negative).is_err());

    assert!(LexiconSet::load_from(&dir.path().join("missing.toml")).is_err());
}

#[test]
fn custom_lexicon_drives_classification() {
    let set = LexiconSet::from_toml_str(CUSTOM_TOML).unwrap();
    let c = Classifier::new(set);
    // whole-word: "accelerate" and "rates" do not count for "rate"
    let r = c.classify("Growth may accelerate and rates stay higher for longer; no cut.");
    assert_eq!(r.hawkish_score, 3);
    assert_eq!(r.dovish_score, 2);
    assert_eq!(r.label, Stance::Hawkish);
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not picked up
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();

    env::remove_var(ENV_LEXICON_PATH);

    // 1) Nothing on disk -> reference lexicon
    let set = LexiconSet::load_default().unwrap();
    assert_eq!(set.hawkish().len(), 7);
    assert_eq!(set.dovish().weight_of("economic cooling"), Some(2));

    // 2) JSON fallback in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("lexicon.json"), r#"{"hawkish":{"hike":1}}"#).unwrap();
    let set = LexiconSet::load_default().unwrap();
    assert_eq!(set.hawkish().weight_of("hike"), Some(1));

    // 3) TOML beats JSON
    fs::write(cfg_dir.join("lexicon.toml"), "[dovish]\ncut = 4\n").unwrap();
    let set = LexiconSet::load_default().unwrap();
    assert_eq!(set.dovish().weight_of("cut"), Some(4));
    assert!(set.hawkish().is_empty());

    // 4) ENV wins over ./config/
    let p_env = tmp.path().join("override.toml");
    fs::write(&p_env, CUSTOM_TOML).unwrap();
    env::set_var(ENV_LEXICON_PATH, p_env.display().to_string());
    let set = LexiconSet::load_default().unwrap();
    assert_eq!(set.match_mode(), MatchMode::WholeWord);

    // 5) ENV pointing nowhere is an error, not a silent fallback
    env::set_var(ENV_LEXICON_PATH, tmp.path().join("nope.toml").display().to_string());
    assert!(LexiconSet::load_default().is_err());
    env::remove_var(ENV_LEXICON_PATH);

    env::set_current_dir(&old).unwrap();
}
