//! Политики решений: человек за консолью или автоматический игрок.
//!
//! Автоматический игрок оценивает руку упрощённой эвристикой
//! (пара / старшая карта), а не полноценным 5-карточным эвалюатором.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Card, Chips, Player, RANK_COUNT};
use crate::engine::actions::Decision;
use crate::engine::human;
use crate::infra::console::Console;

/// Агрессивность автоматического игрока, всегда в [0, 1].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Aggression(f64);

impl Aggression {
    pub const DEFAULT: Aggression = Aggression(0.5);

    /// Значения вне [0, 1] обрезаются, NaN считается нулём.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Aggression(0.0);
        }
        Aggression(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Aggression {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Закрытый набор политик.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum DecisionPolicy {
    Human,
    Automated { aggression: Aggression },
}

impl DecisionPolicy {
    pub fn automated(aggression: f64) -> Self {
        DecisionPolicy::Automated {
            aggression: Aggression::new(aggression),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, DecisionPolicy::Human)
    }

    pub fn aggression(&self) -> Option<Aggression> {
        match self {
            DecisionPolicy::Human => None,
            DecisionPolicy::Automated { aggression } => Some(*aggression),
        }
    }

    /// Решение за `player` при ставке стола `table_bet`.
    /// Консоль и банк нужны только человеку.
    pub fn decide(
        &self,
        player: &Player,
        table_bet: Chips,
        minimum_bet: Chips,
        pot: Chips,
        console: &mut dyn Console,
    ) -> Decision {
        match self {
            DecisionPolicy::Human => human::decide(player, table_bet, minimum_bet, pot, console),
            DecisionPolicy::Automated { aggression } => {
                automated_decision(player, *aggression, table_bet, minimum_bet)
            }
        }
    }
}

/// Сколько игроку нужно добавить, чтобы уравнять ставку стола.
pub fn call_amount(player: &Player, table_bet: Chips) -> Chips {
    table_bet.saturating_sub(player.current_bet)
}

/// Сила руки в [0, 1]. Меньше двух карт → 0.5.
pub fn hand_strength(hand: &[Card]) -> f64 {
    if hand.len() < 2 {
        return 0.5;
    }

    let mut values: Vec<u8> = hand.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let top = f64::from(values[0]) / RANK_COUNT as f64;
    if values[0] == values[1] {
        0.7 + top * 0.3
    } else {
        0.3 + top * 0.4
    }
}

/// Решение автоматического игрока: чистая функция от состояния стола.
pub fn automated_decision(
    player: &Player,
    aggression: Aggression,
    table_bet: Chips,
    minimum_bet: Chips,
) -> Decision {
    let to_call = call_amount(player, table_bet);
    let strength = hand_strength(&player.hand);
    let aggression = aggression.value();

    let bet_ratio = to_call.0 as f64 / player.chips.0.max(1) as f64;
    let fold_threshold = 0.2 + bet_ratio * 0.3;
    let raise_threshold = 0.6 + (0.4 - aggression * 0.4);

    debug!(
        player = %player.name,
        strength,
        fold_threshold,
        raise_threshold,
        to_call = to_call.0,
        "оценка руки"
    );

    if strength < fold_threshold && !to_call.is_zero() {
        return Decision::Fold;
    }

    if strength > raise_threshold && player.chips.0 > to_call.0.saturating_add(minimum_bet.0) {
        let max_raise = player.chips.0 - to_call.0;
        let multiplier = aggression * strength;
        let sized = (minimum_bet.0 as f64 * (1.0 + multiplier * 3.0)).round() as u64;
        let raise = sized.clamp(minimum_bet.0, max_raise);
        return Decision::Raise(to_call + Chips(raise));
    }

    Decision::Call(to_call.min(player.chips))
}
