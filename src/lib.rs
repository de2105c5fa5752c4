//! Упрощённый покер за одним столом.
//!
//! Раздаём карты, проводим раунд ставок (raise / call / fold / all-in)
//! и отдаём банк на шоудауне по старшей карте.
//!
//! - `domain` – карты, колода, фишки, игроки;
//! - `engine` – политики решений, раунд ставок, шоудаун, оркестратор раздач;
//! - `infra` – RNG и консоль;
//! - `config` – настройки игры.

pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;

pub use config::{ConfigError, GameConfig};
