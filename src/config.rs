//! Настройки игры: сколько людей и ботов, стартовый стек, минимальная ставка.
//!
//! Читаются из JSON (незаданные поля берутся по умолчанию), флаги CLI
//! перекрывают значения из файла.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, DECK_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Недопустимый конфиг: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub human_players: usize,
    pub ai_players: usize,
    pub starting_chips: Chips,
    pub minimum_bet: Chips,
    pub cards_per_player: usize,
    /// Seed для воспроизводимой тасовки; None – системный RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_players: 1,
            ai_players: 3,
            starting_chips: Chips(1000),
            minimum_bet: Chips(10),
            cards_per_player: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn total_players(&self) -> usize {
        self.human_players + self.ai_players
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let players = self.total_players();
        if players < 2 {
            return Err(ConfigError::Invalid(format!(
                "нужно минимум 2 игрока, задано {players}"
            )));
        }
        if self.minimum_bet.is_zero() {
            return Err(ConfigError::Invalid("minimum_bet должен быть > 0".into()));
        }
        if self.starting_chips.is_zero() {
            return Err(ConfigError::Invalid("starting_chips должен быть > 0".into()));
        }
        if self.cards_per_player == 0 {
            return Err(ConfigError::Invalid("cards_per_player должен быть >= 1".into()));
        }
        let needed = players.saturating_mul(self.cards_per_player);
        if needed > DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "{players} игроков по {} карты = {needed} карт, в колоде только {DECK_SIZE}",
                self.cards_per_player
            )));
        }
        Ok(())
    }
}
