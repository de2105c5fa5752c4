//! Доменная модель: карты, колода, фишки, игроки.

pub mod card;
pub mod chips;
pub mod deck;
pub mod player;

pub type PlayerId = u64;

/// Индекс места за столом (позиция в ростере текущей раздачи).
pub type SeatIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use player::*;
