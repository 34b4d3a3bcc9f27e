use vc_core::config::{Config, ConfigError};
use vc_core::health::HealthPolicy;
use vc_core::types::PipelineType;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.project_name, "velocity");
    assert_eq!(cfg.general.log_level, "info");
    assert_eq!(cfg.board.default_pipeline, PipelineType::Pitch);
    assert_eq!(cfg.health.stale_after_days, 3);
    assert_eq!(cfg.health.rotting_after_days, 7);
    assert_eq!(cfg.health.highlight_window_ms, 800);
    cfg.validate().expect("defaults validate");
}

#[test]
fn config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("velocity"));
    assert!(toml_str.contains("PITCH"));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.general.project_name, cfg.general.project_name);
    assert_eq!(
        parsed.health.rotting_after_days,
        cfg.health.rotting_after_days
    );
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[board]
default_pipeline = "PRODUCTION"

[health]
stale_after_days = 2
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert_eq!(cfg.board.default_pipeline, PipelineType::Production);
    assert_eq!(cfg.health.stale_after_days, 2);
    // defaults should fill in the rest
    assert_eq!(cfg.health.rotting_after_days, 7);
    assert_eq!(cfg.general.log_level, "info");
    cfg.validate().expect("config validates");
}

#[test]
fn stale_must_precede_rotting() {
    let mut cfg = Config::default();
    cfg.health.stale_after_days = 7;
    let err = cfg.validate().expect_err("validation should fail");
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("stale_after_days"));
}

#[test]
fn zero_highlight_window_is_rejected() {
    let mut cfg = Config::default();
    cfg.health.highlight_window_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nproject_name = \"roofing\"\n").unwrap();

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.general.project_name, "roofing");

    let err = Config::load_from(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let inverted = "[health]\nstale_after_days = 9\nrotting_after_days = 4\n";
    std::fs::write(&path, inverted).unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    std::fs::write(&path, "[board]\ndefault_pipeline = \"SIDEWAYS\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn health_policy_follows_config() {
    let mut cfg = Config::default();
    cfg.health.stale_after_days = 1;
    cfg.health.rotting_after_days = 2;
    let policy = HealthPolicy::from(&cfg.health);
    assert_eq!(policy.stale_after, chrono::Duration::days(1));
    assert_eq!(policy.rotting_after, chrono::Duration::days(2));
}
