//! Оркестратор раздач: подготовка → раздача карт → ставки → выплата →
//! сдвиг дилера.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::betting::{run_betting_round, BettingState, RoundOutcome};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::Pot;
use crate::engine::showdown::{award_pot, PotAward};
use crate::engine::{Decider, RandomSource};

const AI_NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Eve"];

/// Итог сыгранной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandReport {
    pub hand_number: u64,
    pub outcome: RoundOutcome,
    pub award: Option<PotAward>,
    pub history: HandHistory,
}

/// Статус раздачи для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum HandStatus {
    /// Меньше двух игроков с фишками – раздачу начать нельзя.
    CannotProceed,
    Finished(HandReport),
}

/// Стол с ростером игроков, колодой и банком.
pub struct Game<R: RandomSource> {
    pub players: Vec<Player>,
    pub deck: Deck,
    pub pot: Pot,
    pub betting: BettingState,
    pub minimum_bet: Chips,
    pub cards_per_player: usize,
    pub dealer_position: SeatIndex,
    pub hands_played: u64,
    pub history: HandHistory,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Ростер по конфигу: сначала люди, затем боты с разной агрессией.
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let mut players = Vec::with_capacity(config.total_players());

        for i in 0..config.human_players {
            let name = if config.human_players > 1 {
                format!("Player {}", i + 1)
            } else {
                "You".to_string()
            };
            players.push(Player::human(players.len() as PlayerId, name, config.starting_chips));
        }

        for i in 0..config.ai_players {
            let aggression = 0.3 + (i as f64 * 0.2) % 0.7;
            players.push(Player::automated(
                players.len() as PlayerId,
                ai_name(i),
                config.starting_chips,
                aggression,
            ));
        }

        let mut game = Self::with_players(players, config.minimum_bet, rng);
        game.cards_per_player = config.cards_per_player;
        game
    }

    pub fn with_players(players: Vec<Player>, minimum_bet: Chips, rng: R) -> Self {
        Self {
            players,
            deck: Deck::new(),
            pot: Pot::new(),
            betting: BettingState::new(minimum_bet),
            minimum_bet,
            cards_per_player: 2,
            dealer_position: 0,
            hands_played: 0,
            history: HandHistory::new(),
            rng,
        }
    }

    /// Ставка стола в текущем раунде.
    pub fn current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    /// Подготовить новую раздачу. `false` – играть некому (меньше двух
    /// игроков с фишками).
    pub fn setup_hand(&mut self) -> bool {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.pot.reset();
        self.betting = BettingState::new(self.minimum_bet);
        self.history.clear();

        for player in self.players.iter_mut() {
            player.reset_for_new_hand();
        }

        let (staying, busted): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| !p.chips.is_zero());
        for p in &busted {
            info!(player = %p.name, "выбыл без фишек");
        }
        self.players = staying;

        if self.players.len() < 2 {
            return false;
        }

        self.dealer_position %= self.players.len();
        self.hands_played += 1;
        info!(hand = self.hands_played, players = self.players.len(), "новая раздача");
        self.history.push(HandEventKind::HandStarted {
            hand_number: self.hands_played,
            dealer: self.dealer_position,
            players: self.players.len(),
        });
        true
    }

    /// Раздать по `per_player` карт каждому, по кругу.
    pub fn deal_cards(&mut self, per_player: usize) -> Result<(), EngineError> {
        for _ in 0..per_player {
            for player in self.players.iter_mut() {
                let card = self.deck.draw()?;
                player.add_card(card);
            }
        }

        for (seat, player) in self.players.iter().enumerate() {
            self.history.push(HandEventKind::CardsDealt {
                seat,
                cards: player.hand.clone(),
            });
        }
        Ok(())
    }

    pub fn betting_round<D: Decider + ?Sized>(&mut self, decider: &mut D) -> RoundOutcome {
        run_betting_round(
            &mut self.players,
            &mut self.betting,
            &mut self.pot,
            decider,
            &mut self.history,
        )
    }

    /// Выплатить банк: единственному оставшемуся или по шоудауну.
    pub fn determine_winner(&mut self) -> Option<PotAward> {
        award_pot(&mut self.players, &mut self.pot, &mut self.history)
    }

    /// Сыграть одну раздачу целиком.
    pub fn play_hand<D: Decider + ?Sized>(&mut self, decider: &mut D) -> Result<HandStatus, EngineError> {
        if !self.setup_hand() {
            warn!(players = self.players.len(), "недостаточно игроков с фишками");
            return Ok(HandStatus::CannotProceed);
        }

        if let Err(err) = self.deal_cards(self.cards_per_player) {
            self.abort_hand();
            return Err(err);
        }

        let state = self.game_state();
        decider.round_started(&state);
        let outcome = self.betting_round(decider);
        let award = self.determine_winner();

        self.history.push(HandEventKind::HandFinished {
            hand_number: self.hands_played,
        });
        self.dealer_position = (self.dealer_position + 1) % self.players.len();

        Ok(HandStatus::Finished(HandReport {
            hand_number: self.hands_played,
            outcome,
            award,
            history: self.history.clone(),
        }))
    }

    /// Откатить раздачу, которая не дошла до торговли: счётчик, история
    /// и карты на руках возвращаются к состоянию до `setup_hand`.
    fn abort_hand(&mut self) {
        warn!(hand = self.hands_played, "раздача отменена до начала торговли");
        for player in self.players.iter_mut() {
            player.reset_for_new_hand();
        }
        self.deck.reset();
        self.history.clear();
        self.hands_played = self.hands_played.saturating_sub(1);
    }

    /// Есть ли ещё хотя бы два игрока с фишками.
    pub fn has_contest(&self) -> bool {
        self.players.iter().filter(|p| !p.chips.is_zero()).count() > 1
    }

    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(|p| p.chips).sum::<Chips>() + self.pot.total
    }

    /// Игроки по убыванию стека.
    pub fn standings(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| b.chips.cmp(&a.chips));
        sorted
    }

    /// Текстовое состояние стола.
    pub fn game_state(&self) -> String {
        let mut out = String::from("--- Game State ---\n");
        out.push_str(&format!("Pot: {} chips\n", self.pot.total));
        out.push_str(&format!("Current bet: {}\n", self.betting.current_bet));
        out.push_str("Players:\n");
        for (seat, player) in self.players.iter().enumerate() {
            let marker = if seat == self.dealer_position { " (DEALER)" } else { "" };
            out.push_str(&format!("  {player}{marker}\n"));
        }
        out
    }
}

/// Имя бота: Alice..Eve, после первого круга с номером ("Alice 2").
fn ai_name(index: usize) -> String {
    let base = AI_NAMES[index % AI_NAMES.len()];
    let round = index / AI_NAMES.len();
    if round == 0 {
        base.to_string()
    } else {
        format!("{base} {}", round + 1)
    }
}
