use thiserror::Error;

use crate::domain::Chips;

/// Выбор человека в меню хода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanChoice {
    Fold,
    Call,
    Raise,
}

/// Почему ввод игрока отклонён. Это не ошибка движка: политика просто
/// показывает причину и спрашивает снова.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputRejection {
    #[error("Invalid action. Please choose 'f', 'c', or 'r'.")]
    UnknownAction(String),

    #[error("Invalid input. Please enter a whole number of chips.")]
    NotANumber(String),

    #[error("You don't have enough chips to call, let alone raise!")]
    CannotAffordRaise,

    #[error("Minimum raise is {0}")]
    BelowMinimum(Chips),

    #[error("Maximum raise is {0}")]
    AboveMaximum(Chips),
}

pub fn parse_choice(input: &str) -> Result<HumanChoice, InputRejection> {
    match input.trim().to_ascii_lowercase().as_str() {
        "f" | "fold" => Ok(HumanChoice::Fold),
        "c" | "call" | "check" => Ok(HumanChoice::Call),
        "r" | "raise" => Ok(HumanChoice::Raise),
        other => Err(InputRejection::UnknownAction(other.to_string())),
    }
}

/// Максимальное повышение сверх колла; ошибка, если нельзя даже уравнять.
pub fn max_raise(to_call: Chips, chips: Chips) -> Result<Chips, InputRejection> {
    if to_call >= chips {
        return Err(InputRejection::CannotAffordRaise);
    }
    Ok(chips - to_call)
}

/// Проверка введённого размера повышения. Возвращает само повышение
/// (без суммы колла).
pub fn validate_raise(
    input: &str,
    to_call: Chips,
    chips: Chips,
    minimum_bet: Chips,
) -> Result<Chips, InputRejection> {
    let max = max_raise(to_call, chips)?;

    let raise = input
        .trim()
        .parse::<u64>()
        .map(Chips)
        .map_err(|_| InputRejection::NotANumber(input.trim().to_string()))?;

    if raise < minimum_bet {
        return Err(InputRejection::BelowMinimum(minimum_bet));
    }
    if raise > max {
        return Err(InputRejection::AboveMaximum(max));
    }
    Ok(raise)
}
