use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк раздачи. Сайд-потов нет: весь банк уходит одному победителю.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Забрать весь банк (при выплате победителю).
    pub fn take(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }
}
