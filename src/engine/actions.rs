use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Решение игрока на своём ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Fold,
    /// Уравнять: сколько добавить до текущей ставки стола. `Call(0)` = check.
    Call(Chips),
    /// Повышение: сколько всего игрок добавляет этим действием (call + повышение).
    Raise(Chips),
}

impl Decision {
    pub fn is_check(&self) -> bool {
        matches!(self, Decision::Call(amount) if amount.is_zero())
    }

    /// Сколько фишек просит решение (до обрезки по стеку).
    pub fn amount(&self) -> Chips {
        match self {
            Decision::Fold => Chips::ZERO,
            Decision::Call(amount) | Decision::Raise(amount) => *amount,
        }
    }

    /// Строка для стола о сделанном ходе.
    pub fn announce(&self, name: &str, committed: Chips, table_bet: Chips) -> String {
        match self {
            Decision::Fold => format!("{name} folds."),
            Decision::Call(_) if committed.is_zero() => format!("{name} checks."),
            Decision::Call(_) => format!("{name} calls with {committed} chips."),
            Decision::Raise(_) => format!("{name} raises! New bet: {table_bet}"),
        }
    }
}
