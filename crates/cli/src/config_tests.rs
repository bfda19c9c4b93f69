use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_partial_file_overrides_fields() {
    let config = GameConfig::from_toml(
        r#"
        time_limit_secs = 0.5
        human = "none"
        opponent = "random"
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(config.time_limit_secs, 0.5);
    assert_eq!(config.human, HumanSide::None);
    assert_eq!(config.opponent, Opponent::Random);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.max_depth, None);
}

#[test]
fn test_rejects_bad_values() {
    assert!(matches!(
        GameConfig::from_toml("human = \"purple\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        GameConfig::from_toml("time_limit_secs = -1.0"),
        Err(ConfigError::TimeLimit(_))
    ));
    assert!(matches!(
        GameConfig::from_toml("time_limit_secs = 1e20"),
        Err(ConfigError::TimeLimit(_))
    ));
    assert!(matches!(
        GameConfig::from_toml("time_limit_secs = inf"),
        Err(ConfigError::TimeLimit(_))
    ));
}

#[test]
fn test_search_limits_from_config() {
    let config = GameConfig {
        time_limit_secs: 1.5,
        max_depth: Some(6),
        ..Default::default()
    };
    let limits = config.search_limits();
    assert_eq!(limits.max_depth, 6);
    assert_eq!(limits.move_time, Some(Duration::from_millis(1500)));
}

#[test]
fn test_search_limits_without_depth_cap() {
    let limits = GameConfig::default().search_limits();
    assert_eq!(limits.max_depth, u8::MAX);
    assert_eq!(limits.move_time, Some(Duration::from_secs(4)));
}

#[test]
fn test_huge_time_limit_does_not_panic() {
    let config = GameConfig {
        time_limit_secs: 1e20,
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert_eq!(config.search_limits().move_time, Some(Duration::MAX));
}

#[test]
fn test_human_side() {
    assert!(HumanSide::Black.plays(Player::Black));
    assert!(!HumanSide::Black.plays(Player::White));
    assert!(!HumanSide::None.plays(Player::Black));
    assert!(!HumanSide::None.plays(Player::White));
}
