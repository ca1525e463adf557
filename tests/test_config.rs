use std::time::Duration;

use space_shooter::config::{ConfigError, GameConfig};

#[test]
fn defaults_are_valid() {
    let c = GameConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!((c.width, c.height), (400, 600));
    assert_eq!(c.max_bullets, 3);
    assert_eq!((c.wave_step, c.wave_cap, c.speed_step), (2, 12, 1));
}

#[test]
fn border_sits_near_top_third() {
    assert_eq!(GameConfig::default().border_y(), 197);
}

#[test]
fn frame_duration_follows_fps() {
    let c = GameConfig { fps: 50, ..GameConfig::default() };
    assert_eq!(c.frame_duration(), Duration::from_millis(20));
}

#[test]
fn partial_ron_keeps_other_defaults() {
    let c = GameConfig::from_ron_str("(wave_cap: 8, speed_step: 2, sound: false)").unwrap();
    assert_eq!(c.wave_cap, 8);
    assert_eq!(c.speed_step, 2);
    assert!(!c.sound);
    assert_eq!(c.wave_step, 2);
    assert_eq!(c.width, 400);
}

#[test]
fn empty_ron_is_all_defaults() {
    let c = GameConfig::from_ron_str("()").unwrap();
    assert_eq!(c, GameConfig::default());
}

#[test]
fn malformed_ron_is_a_parse_error() {
    let err = GameConfig::from_ron_str("(wave_cap: )").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn cap_below_step_is_rejected() {
    let err = GameConfig::from_ron_str("(wave_step: 4, wave_cap: 2)").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn zero_bullet_cap_is_rejected() {
    let c = GameConfig { max_bullets: 0, ..GameConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn ship_start_above_border_is_rejected() {
    let c = GameConfig { ship_start_y: 100, ..GameConfig::default() };
    let err = c.validate().unwrap_err();
    assert_eq!(err.to_string(), "invalid config: ship_start_y must lie within 197..=560");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("space_shooter_no_such_config.ron");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn layout_columns_fit_the_field() {
    let c = GameConfig::default();
    assert_eq!(c.layout_columns(), 10);
    let narrow = GameConfig { width: 60, ..GameConfig::default() };
    assert_eq!(narrow.layout_columns(), 1);
}
