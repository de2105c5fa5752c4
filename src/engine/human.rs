//! Интерактивный ход человека через построчную консоль.
//!
//! Любой некорректный ввод показывается игроку и переспрашивается.
//! Конец ввода (EOF / прерывание) трактуется как фолд.

use tracing::warn;

use crate::domain::{Chips, Player};
use crate::engine::actions::Decision;
use crate::engine::policy::call_amount;
use crate::engine::validation::{max_raise, parse_choice, validate_raise, HumanChoice, InputRejection};
use crate::infra::console::Console;

pub fn decide(
    player: &Player,
    table_bet: Chips,
    minimum_bet: Chips,
    pot: Chips,
    console: &mut dyn Console,
) -> Decision {
    let to_call = call_amount(player, table_bet);

    console.show(&format!("\nCurrent pot: {pot}"));
    console.show(&format!("{}'s turn:", player.name));
    console.show(&format!("Your hand: {}", player.hand_display()));
    console.show(&format!("Your chips: {}", player.chips));
    console.show(&format!("Current bet to call: {table_bet}"));
    console.show(&format!("Your current bet: {}", player.current_bet));
    if !to_call.is_zero() {
        console.show(&format!("Amount to call: {to_call}"));
    }

    loop {
        let Some(line) = console.prompt("Choose action (f)old, (c)all, (r)aise: ") else {
            return abort(player);
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(reason) => {
                reject(player, console, &reason);
                continue;
            }
        };

        match choice {
            HumanChoice::Fold => return Decision::Fold,
            HumanChoice::Call => return Decision::Call(to_call.min(player.chips)),
            HumanChoice::Raise => {
                let max = match max_raise(to_call, player.chips) {
                    Ok(max) => max,
                    Err(reason) => {
                        reject(player, console, &reason);
                        continue;
                    }
                };

                let Some(line) = console.prompt(&format!("Raise amount (max {max}): ")) else {
                    return abort(player);
                };

                match validate_raise(&line, to_call, player.chips, minimum_bet) {
                    Ok(raise) => return Decision::Raise(to_call + raise),
                    Err(reason) => reject(player, console, &reason),
                }
            }
        }
    }
}

fn reject(player: &Player, console: &mut dyn Console, reason: &InputRejection) {
    warn!(player = %player.name, %reason, "ввод отклонён");
    console.show(&reason.to_string());
}

fn abort(player: &Player) -> Decision {
    warn!(player = %player.name, "ввод прерван, засчитываем фолд");
    Decision::Fold
}
