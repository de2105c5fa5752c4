use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::policy::DecisionPolicy;

/// Статус игрока в контексте текущей раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче.
    Active,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
    /// Игрок в олл-ине – не может больше делать ставки.
    AllIn,
}

/// Игрок за столом: стек, карты, ставка в текущем раунде и политика решений.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Текущий стек.
    pub chips: Chips,
    /// Карты на руке в порядке раздачи.
    pub hand: Vec<Card>,
    /// Сколько игрок внёс в текущем раунде.
    pub current_bet: Chips,
    pub status: PlayerStatus,
    pub policy: DecisionPolicy,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: Chips, policy: DecisionPolicy) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            hand: Vec::new(),
            current_bet: Chips::ZERO,
            status: PlayerStatus::Active,
            policy,
        }
    }

    pub fn human(id: PlayerId, name: impl Into<String>, chips: Chips) -> Self {
        Self::new(id, name, chips, DecisionPolicy::Human)
    }

    pub fn automated(id: PlayerId, name: impl Into<String>, chips: Chips, aggression: f64) -> Self {
        Self::new(id, name, chips, DecisionPolicy::automated(aggression))
    }

    /// Поставить `amount`. Если фишек не хватает (или ровно хватает) –
    /// ставится весь стек и игрок уходит в олл-ин.
    /// Возвращает реально поставленную сумму.
    pub fn place_bet(&mut self, amount: Chips) -> Chips {
        let committed = if amount >= self.chips {
            let all = self.chips;
            self.chips = Chips::ZERO;
            self.status = PlayerStatus::AllIn;
            all
        } else {
            self.chips -= amount;
            amount
        };

        self.current_bet += committed;
        committed
    }

    /// Фолд необратим до конца раздачи.
    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    /// Может ли игрок ещё что-то делать в раунде.
    pub fn can_act(&self) -> bool {
        !self.chips.is_zero() && self.status == PlayerStatus::Active
    }

    pub fn has_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    /// Не сфолдил – претендует на банк.
    pub fn is_in_hand(&self) -> bool {
        !self.has_folded()
    }

    pub fn is_human(&self) -> bool {
        self.policy.is_human()
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.current_bet = Chips::ZERO;
        self.status = PlayerStatus::Active;
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Старшая карта на руке (None для пустой руки).
    pub fn max_card_value(&self) -> Option<u8> {
        self.hand.iter().map(Card::value).max()
    }

    pub fn hand_display(&self) -> String {
        if self.hand.is_empty() {
            return "No cards".to_string();
        }
        self.hand
            .iter()
            .map(Card::display_card)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} chips, bet: {}", self.name, self.chips, self.current_bet)?;
        match self.status {
            PlayerStatus::Active => Ok(()),
            PlayerStatus::Folded => write!(f, " (FOLDED)"),
            PlayerStatus::AllIn => write!(f, " (ALL-IN)"),
        }
    }
}
