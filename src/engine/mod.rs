//! Покерный движок: решения игроков, раунд ставок, шоудаун.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `setup_hand` / `deal_cards` – подготовить раздачу
//!   - `betting_round` – провести раунд ставок
//!   - `determine_winner` – выплатить банк
//!   - `play_hand` – всё вместе, плюс сдвиг дилера

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod human;
pub mod policy;
pub mod pot;
pub mod showdown;
pub mod validation;

pub use actions::Decision;
pub use betting::{apply_decision, run_betting_round, BettingState, RoundOutcome};
pub use errors::EngineError;
pub use game_loop::{Game, HandReport, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use policy::{automated_decision, call_amount, hand_strength, Aggression, DecisionPolicy};
pub use pot::Pot;
pub use showdown::{award_pot, find_winner, PotAward};

use crate::domain::{Chips, Player, SeatIndex};
use crate::infra::console::Console;

/// RNG интерфейс для колоды.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Источник решений для раунда ставок.
pub trait Decider {
    /// `pot` – банк на момент хода, только для показа.
    fn decide(
        &mut self,
        seat: SeatIndex,
        player: &Player,
        table_bet: Chips,
        minimum_bet: Chips,
        pot: Chips,
    ) -> Decision;

    /// Карты розданы, торговля ещё не началась.
    fn round_started(&mut self, _game_state: &str) {}

    /// Решение уже применено: `committed` ушло в банк, ставка стола – `table_bet`.
    fn action_applied(&mut self, _player: &Player, _decision: Decision, _committed: Chips, _table_bet: Chips) {}
}

/// Решения по политике самого игрока; консоль нужна людям.
#[derive(Debug, Default)]
pub struct PolicyDecider<C: Console> {
    pub console: C,
}

impl<C: Console> PolicyDecider<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Decider for PolicyDecider<C> {
    fn decide(
        &mut self,
        _seat: SeatIndex,
        player: &Player,
        table_bet: Chips,
        minimum_bet: Chips,
        pot: Chips,
    ) -> Decision {
        player
            .policy
            .decide(player, table_bet, minimum_bet, pot, &mut self.console)
    }

    fn round_started(&mut self, game_state: &str) {
        self.console.show(game_state);
    }

    fn action_applied(&mut self, player: &Player, decision: Decision, committed: Chips, table_bet: Chips) {
        self.console
            .show(&decision.announce(&player.name, committed, table_bet));
    }
}
