use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::Decision;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_number: u64,
        dealer: SeatIndex,
        players: usize,
    },

    /// Игрок получил карты.
    CardsDealt {
        seat: SeatIndex,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        player_id: PlayerId,
        decision: Decision,
        /// Сколько реально ушло в банк (после обрезки по стеку).
        committed: Chips,
        chips_after: Chips,
        pot_after: Chips,
    },

    /// Все, кроме одного, сфолдили.
    FoldOut {
        winner: SeatIndex,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hand: Vec<Card>,
        high_card: Option<u8>,
    },

    /// Выплата банка.
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished {
        hand_number: u64,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Только действия игроков, в порядке хода.
    pub fn actions(&self) -> impl Iterator<Item = (SeatIndex, Decision)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            HandEventKind::PlayerActed { seat, decision, .. } => Some((seat, decision)),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
