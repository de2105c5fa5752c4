//! Конфигурация игры: JSON со значениями по умолчанию и валидация.

use std::io::Write;

use basic_poker::domain::Chips;
use basic_poker::{ConfigError, GameConfig};

#[test]
fn defaults_match_standard_table() {
    let config = GameConfig::default();
    assert_eq!(config.human_players, 1);
    assert_eq!(config.ai_players, 3);
    assert_eq!(config.starting_chips, Chips(1000));
    assert_eq!(config.minimum_bet, Chips(10));
    assert_eq!(config.cards_per_player, 2);
    assert_eq!(config.seed, None);
    assert_eq!(config.total_players(), 4);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = GameConfig::from_json_str(r#"{ "ai_players": 5, "seed": 42 }"#).expect("valid json");
    assert_eq!(config.ai_players, 5);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.human_players, 1);
    assert_eq!(config.starting_chips, Chips(1000));

    let empty = GameConfig::from_json_str("{}").expect("valid json");
    assert_eq!(empty, GameConfig::default());
}

#[test]
fn malformed_json_is_reported() {
    let err = GameConfig::from_json_str("{ ai_players: }").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = GameConfig::load("/definitely/not/here/poker.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("basic_poker_config_{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("temp file");
        write!(file, r#"{{ "human_players": 0, "ai_players": 2, "minimum_bet": 25 }}"#).expect("write");
    }

    let config = GameConfig::load(&path).expect("config loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.total_players(), 2);
    assert_eq!(config.minimum_bet, Chips(25));
}

#[test]
fn validation_rejects_degenerate_tables() {
    let invalid = |config: GameConfig| matches!(config.validate(), Err(ConfigError::Invalid(_)));

    assert!(invalid(GameConfig { human_players: 1, ai_players: 0, ..GameConfig::default() }));
    assert!(invalid(GameConfig { minimum_bet: Chips::ZERO, ..GameConfig::default() }));
    assert!(invalid(GameConfig { starting_chips: Chips::ZERO, ..GameConfig::default() }));
    assert!(invalid(GameConfig { cards_per_player: 0, ..GameConfig::default() }));
    // 27 игроков по 2 карты = 54 > 52.
    assert!(invalid(GameConfig { human_players: 0, ai_players: 27, ..GameConfig::default() }));
    assert!(GameConfig { human_players: 0, ai_players: 26, ..GameConfig::default() }
        .validate()
        .is_ok());
}
