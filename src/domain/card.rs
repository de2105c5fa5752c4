use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Количество рангов в колоде (2..A).
pub const RANK_COUNT: usize = 13;

/// Ошибки конструирования карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Недопустимый ранг карты: {0}")]
    InvalidRank(String),

    #[error("Недопустимая масть карты: {0}")]
    InvalidSuit(String),
}

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    /// Порядок мастей в свежей колоде.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Разбор масти: полное имя ("Hearts"), буква ("h") или символ ("♥").
    pub fn from_name(s: &str) -> Result<Self, CardError> {
        let suit = match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "h" | "♥" => Suit::Hearts,
            "diamonds" | "d" | "♦" => Suit::Diamonds,
            "clubs" | "c" | "♣" => Suit::Clubs,
            "spades" | "s" | "♠" => Suit::Spades,
            _ => return Err(CardError::InvalidSuit(s.to_string())),
        };
        Ok(suit)
    }
}

/// Ранг карты. Дискриминант = значение карты для сравнения (0..=12).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Индекс ранга: 2 → 0, ..., A → 12.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Result<Self, CardError> {
        Rank::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CardError::InvalidRank(value.to_string()))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Разбор ранга: "2".."10", "J", "Q", "K", "A" (и "T" для десятки).
    pub fn from_symbol(s: &str) -> Result<Self, CardError> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Игральная карта. Неизменяемая, равенство по (rank, suit).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Карта из текстовых ранга и масти, например `("A", "Hearts")`.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_name(suit)?))
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Короткий вид для стола: `[A♥]`.
    pub fn display_card(&self) -> String {
        format!("[{}{}]", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `A of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "10s", "Ts", "A♥".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s
            .chars()
            .last()
            .ok_or_else(|| CardError::InvalidSuit(String::new()))?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];
        if rank_part.is_empty() {
            return Err(CardError::InvalidRank(s.to_string()));
        }

        let rank = Rank::from_symbol(rank_part)?;
        let suit = Suit::from_name(suit_ch.encode_utf8(&mut [0u8; 4]))?;
        Ok(Card::new(rank, suit))
    }
}
