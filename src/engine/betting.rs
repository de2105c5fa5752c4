//! Раунд ставок.
//!
//! Игроки ходят по порядку мест, проход за проходом, пока ставки не
//! уравняются. Рейз сбрасывает множество походивших, поэтому проходов
//! может быть несколько. Если остаётся один несфолдивший – раунд
//! обрывается сразу (fold-out).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::actions::Decision;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::Pot;
use crate::engine::Decider;

/// Состояние раунда ставок.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Ставка, до которой должен дотянуться каждый активный игрок.
    pub current_bet: Chips,
    /// Минимальный размер ставки/повышения (фиксирован на игру).
    pub minimum_bet: Chips,
    /// Место последнего повысившего.
    pub last_raiser: Option<SeatIndex>,
    /// Кто уже ходил после начала раунда или последнего рейза.
    pub acted: BTreeSet<SeatIndex>,
}

/// Чем закончился раунд ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Ставки уравнены (или действовать больше некому).
    Complete,
    /// Остался один несфолдивший игрок – он забирает банк без шоудауна.
    FoldOut { winner: SeatIndex },
}

impl BettingState {
    pub fn new(minimum_bet: Chips) -> Self {
        Self {
            current_bet: Chips::ZERO,
            minimum_bet,
            last_raiser: None,
            acted: BTreeSet::new(),
        }
    }

    /// Должен ли игрок на месте `seat` ходить сейчас.
    ///
    /// Ходит тот, кто ещё в игре (не фолд, не олл-ин) и при этом:
    /// (a) не уравнял ставку стола;
    /// (b) он последний повысивший, а кто-то из остальных ещё не уравнял;
    /// (c) ставка стола нулевая, а он ещё не ходил в этом раунде.
    pub fn must_act(&self, players: &[Player], seat: SeatIndex) -> bool {
        let Some(player) = players.get(seat) else {
            return false;
        };
        if !player.can_act() {
            return false;
        }

        let behind = player.current_bet < self.current_bet;
        let is_raiser = self.last_raiser == Some(seat);
        let opening = self.current_bet.is_zero() && !self.acted.contains(&seat);

        if !(behind || is_raiser || opening) {
            return false;
        }

        // Повысившему второй ход не нужен, если все остальные уже уравняли.
        if is_raiser && self.others_settled(players, seat) {
            return false;
        }

        true
    }

    /// Каждый игрок либо уже не может ходить (фолд, олл-ин, пустой стек),
    /// либо уравнял ставку стола.
    pub fn all_settled(&self, players: &[Player]) -> bool {
        players.iter().all(|p| self.is_settled(p))
    }

    fn others_settled(&self, players: &[Player], seat: SeatIndex) -> bool {
        players
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != seat)
            .all(|(_, p)| self.is_settled(p))
    }

    fn is_settled(&self, player: &Player) -> bool {
        !player.can_act() || player.current_bet == self.current_bet
    }

    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.acted.insert(seat);
    }

    /// После рейза: новая ставка стола, новый агрессор, очередь походивших
    /// начинается заново с него.
    ///
    /// Ставка стола не опускается: короткий олл-ин ниже текущей ставки
    /// считается рейзом, но `current_bet` остаётся прежним.
    pub fn on_raise(&mut self, seat: SeatIndex, new_bet: Chips) {
        self.current_bet = self.current_bet.max(new_bet);
        self.last_raiser = Some(seat);
        self.acted.clear();
        self.acted.insert(seat);
    }
}

/// Применить решение игрока к его стеку, банку и состоянию раунда.
/// Возвращает, сколько фишек реально ушло в банк.
pub fn apply_decision(
    players: &mut [Player],
    seat: SeatIndex,
    decision: Decision,
    betting: &mut BettingState,
    pot: &mut Pot,
) -> Chips {
    let Some(player) = players.get_mut(seat) else {
        return Chips::ZERO;
    };

    let committed = match decision {
        Decision::Fold => {
            player.fold();
            info!(player = %player.name, "fold");
            Chips::ZERO
        }
        Decision::Call(amount) if amount.is_zero() => {
            info!(player = %player.name, "check");
            Chips::ZERO
        }
        Decision::Call(amount) => {
            let paid = player.place_bet(amount);
            pot.add(paid);
            info!(player = %player.name, amount = paid.0, all_in = player.is_all_in(), "call");
            paid
        }
        Decision::Raise(amount) => {
            let paid = player.place_bet(amount);
            pot.add(paid);
            // Ставка игрока после рейза; ниже ставки стола бывает только у короткого олл-ина.
            let new_bet = player.current_bet;
            betting.on_raise(seat, new_bet);
            info!(
                player = %player.name,
                amount = paid.0,
                table_bet = betting.current_bet.0,
                all_in = player.is_all_in(),
                "raise"
            );
            paid
        }
    };

    betting.mark_acted(seat);
    committed
}

fn remaining_in_hand(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_in_hand()).count()
}

fn able_to_bet(players: &[Player]) -> usize {
    players.iter().filter(|p| p.can_act()).count()
}

/// Провести раунд ставок до уравнивания или до fold-out.
pub fn run_betting_round<D: Decider + ?Sized>(
    players: &mut [Player],
    betting: &mut BettingState,
    pot: &mut Pot,
    decider: &mut D,
    history: &mut HandHistory,
) -> RoundOutcome {
    if able_to_bet(players) <= 1 {
        debug!("ходить некому, раунд ставок пропущен");
        return RoundOutcome::Complete;
    }

    let mut sweep = 0u32;
    loop {
        sweep += 1;
        let mut had_action = false;

        for seat in 0..players.len() {
            if betting.must_act(players, seat) {
                let decision = decider.decide(
                    seat,
                    &players[seat],
                    betting.current_bet,
                    betting.minimum_bet,
                    pot.total,
                );
                had_action = true;

                let committed = apply_decision(players, seat, decision, betting, pot);
                let player = &players[seat];
                decider.action_applied(player, decision, committed, betting.current_bet);
                history.push(HandEventKind::PlayerActed {
                    seat,
                    player_id: player.id,
                    decision,
                    committed,
                    chips_after: player.chips,
                    pot_after: pot.total,
                });
            }

            if remaining_in_hand(players) <= 1 {
                let Some(winner) = players.iter().position(Player::is_in_hand) else {
                    return RoundOutcome::Complete;
                };
                info!(winner = %players[winner].name, pot = pot.total.0, "все остальные сфолдили");
                history.push(HandEventKind::FoldOut { winner });
                return RoundOutcome::FoldOut { winner };
            }
        }

        debug!(
            sweep,
            table_bet = betting.current_bet.0,
            acted = ?betting.acted,
            had_action,
            "проход по столу завершён"
        );

        if !had_action || betting.all_settled(players) {
            return RoundOutcome::Complete;
        }
    }
}
