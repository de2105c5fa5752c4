//! Шоудаун и выплата банка.
//!
//! Упрощённые правила: побеждает старшая одиночная карта на руке,
//! при равенстве – тот, кто сидит раньше. Банк не делится, сайд-потов нет.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::Pot;

/// Кому и сколько выплачено.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub amount: Chips,
    /// false – победитель остался один, карты не сравнивались.
    pub by_showdown: bool,
    /// Старшая карта победителя (только для шоудауна).
    pub high_card: Option<u8>,
}

/// Найти победителя среди несфолдивших игроков.
pub fn find_winner(players: &[Player]) -> Option<SeatIndex> {
    let mut contenders = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_in_hand());

    let (first_seat, first) = contenders.next()?;
    let mut best = (first_seat, first.max_card_value());

    for (seat, player) in contenders {
        let value = player.max_card_value();
        if value > best.1 {
            best = (seat, value);
        }
    }

    Some(best.0)
}

/// Отдать весь банк победителю. `None`, если претендентов нет.
pub fn award_pot(players: &mut [Player], pot: &mut Pot, history: &mut HandHistory) -> Option<PotAward> {
    let contenders = players.iter().filter(|p| p.is_in_hand()).count();
    let by_showdown = contenders > 1;

    if by_showdown {
        for (seat, p) in players.iter().enumerate().filter(|(_, p)| p.is_in_hand()) {
            info!(player = %p.name, hand = %p.hand_display(), "шоудаун");
            history.push(HandEventKind::ShowdownReveal {
                seat,
                player_id: p.id,
                hand: p.hand.clone(),
                high_card: p.max_card_value(),
            });
        }
    }

    let seat = find_winner(players)?;
    let amount = pot.take();
    let winner = &mut players[seat];
    winner.chips += amount;

    info!(
        winner = %winner.name,
        amount = amount.0,
        by_showdown,
        "банк выплачен"
    );
    history.push(HandEventKind::PotAwarded {
        seat,
        player_id: winner.id,
        amount,
    });

    Some(PotAward {
        seat,
        player_id: winner.id,
        amount,
        by_showdown,
        high_card: if by_showdown { winner.max_card_value() } else { None },
    })
}
