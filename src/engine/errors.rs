use thiserror::Error;

use crate::domain::{CardError, DeckError};

/// Ошибки движка покера. Любая из них прерывает текущую раздачу.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Ошибка карты: {0}")]
    Card(#[from] CardError),

    #[error("Ошибка колоды: {0}")]
    Deck(#[from] DeckError),
}
