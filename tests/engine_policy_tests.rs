//! Тесты политик решений:
//! - эвристика силы руки;
//! - автоматический игрок (fold / check / call / raise, обрезка по стеку);
//! - человек через скриптовую консоль (переспросы, EOF = fold).

use basic_poker::domain::{Card, Chips, Player, Rank, Suit};
use basic_poker::engine::{
    automated_decision, call_amount, hand_strength, Aggression, Decision, DecisionPolicy,
};
use basic_poker::infra::ScriptedConsole;

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn bot_with(chips: u64, aggression: f64, hand: &[Card]) -> Player {
    let mut p = Player::automated(1, "Bot", Chips(chips), aggression);
    for card in hand {
        p.add_card(*card);
    }
    p
}

fn human_with(chips: u64, current_bet: u64) -> Player {
    let mut p = Player::human(0, "You", Chips(chips + current_bet));
    p.add_card(c(Seven, Hearts));
    p.add_card(c(Two, Clubs));
    p.place_bet(Chips(current_bet));
    p
}

//
// hand_strength
//

#[test]
fn strength_of_pair_of_aces() {
    let s = hand_strength(&[c(Ace, Hearts), c(Ace, Spades)]);
    assert!(approx(s, 0.7 + (12.0 / 13.0) * 0.3));
    assert!((s - 0.977).abs() < 0.001);
}

#[test]
fn strength_of_ace_king() {
    let s = hand_strength(&[c(Ace, Hearts), c(King, Spades)]);
    assert!(approx(s, 0.3 + (12.0 / 13.0) * 0.4));
    assert!((s - 0.669).abs() < 0.001);
}

#[test]
fn strength_of_short_hands_is_neutral() {
    assert_eq!(hand_strength(&[]), 0.5);
    assert_eq!(hand_strength(&[c(Ace, Hearts)]), 0.5);
}

#[test]
fn strength_uses_two_highest_cards_in_any_order() {
    // Пара двоек не считается – две старшие карты K и 2.
    let s = hand_strength(&[c(Two, Hearts), c(King, Clubs), c(Two, Spades)]);
    assert!(approx(s, 0.3 + (11.0 / 13.0) * 0.4));

    let pair = hand_strength(&[c(Three, Hearts), c(Queen, Clubs), c(Queen, Spades)]);
    assert!(approx(pair, 0.7 + (10.0 / 13.0) * 0.3));
}

//
// aggression
//

#[test]
fn aggression_is_clamped_at_construction() {
    assert_eq!(Aggression::new(-0.5).value(), 0.0);
    assert_eq!(Aggression::new(1.5).value(), 1.0);
    assert_eq!(Aggression::new(0.8).value(), 0.8);
    assert_eq!(Aggression::new(f64::NAN).value(), 0.0);
    assert_eq!(Aggression::default().value(), 0.5);

    assert_eq!(
        DecisionPolicy::automated(7.0).aggression(),
        Some(Aggression::new(1.0))
    );
    assert_eq!(DecisionPolicy::Human.aggression(), None);
}

//
// automated_decision
//

#[test]
fn call_amount_never_negative() {
    let mut p = bot_with(1000, 0.5, &[]);
    p.place_bet(Chips(60));
    assert_eq!(call_amount(&p, Chips(50)), Chips::ZERO);
    assert_eq!(call_amount(&p, Chips(100)), Chips(40));
}

#[test]
fn weak_hand_folds_to_a_big_bet() {
    // 3/2 разномастные: 0.3 + (1/13)*0.4 ≈ 0.33; порог фолда 0.2 + 1.0*0.3 = 0.5.
    let p = bot_with(1000, 0.5, &[c(Three, Hearts), c(Two, Clubs)]);
    let d = automated_decision(&p, Aggression::new(0.5), Chips(1000), Chips(10));
    assert_eq!(d, Decision::Fold);
}

#[test]
fn weak_hand_calls_a_small_bet() {
    // Порог фолда 0.2 + 0.1*0.3 = 0.23 < 0.33.
    let p = bot_with(1000, 0.5, &[c(Three, Hearts), c(Two, Clubs)]);
    let d = automated_decision(&p, Aggression::new(0.5), Chips(100), Chips(10));
    assert_eq!(d, Decision::Call(Chips(100)));
}

#[test]
fn weak_hand_checks_when_nothing_to_call() {
    let p = bot_with(1000, 0.5, &[c(Three, Hearts), c(Two, Clubs)]);
    let d = automated_decision(&p, Aggression::new(0.5), Chips::ZERO, Chips(10));
    assert_eq!(d, Decision::Call(Chips::ZERO));
    assert!(d.is_check());
}

#[test]
fn strong_hand_raises_sized_by_aggression() {
    let aces = [c(Ace, Hearts), c(Ace, Spades)];

    // aggression 1.0: порог рейза 0.6; 10 * (1 + 0.977*3) = 39.3 → 39.
    let p = bot_with(1000, 1.0, &aces);
    let d = automated_decision(&p, Aggression::new(1.0), Chips::ZERO, Chips(10));
    assert_eq!(d, Decision::Raise(Chips(39)));

    // aggression 0.5: порог 0.8; 10 * (1 + 0.488*3) = 24.65 → 25.
    let d = automated_decision(&p, Aggression::new(0.5), Chips::ZERO, Chips(10));
    assert_eq!(d, Decision::Raise(Chips(25)));

    // С коллом: сумма = колл + повышение.
    let d = automated_decision(&p, Aggression::new(1.0), Chips(20), Chips(10));
    assert_eq!(d, Decision::Raise(Chips(59)));
}

#[test]
fn passive_bot_never_raises() {
    // aggression 0 → порог рейза 1.0, недостижим.
    let p = bot_with(1000, 0.0, &[c(Ace, Hearts), c(Ace, Spades)]);
    let d = automated_decision(&p, Aggression::new(0.0), Chips(10), Chips(10));
    assert_eq!(d, Decision::Call(Chips(10)));
}

#[test]
fn raise_is_capped_by_stack() {
    // Стек 30, колл 0, минимум 10: 39 обрезается до 30.
    let p = bot_with(30, 1.0, &[c(Ace, Hearts), c(Ace, Spades)]);
    let d = automated_decision(&p, Aggression::new(1.0), Chips::ZERO, Chips(10));
    assert_eq!(d, Decision::Raise(Chips(30)));
}

#[test]
fn short_stack_never_requests_more_than_it_has() {
    // chips=50, колл 100: даже пара тузов не может повысить – колл обрезан до 50.
    let p = bot_with(50, 1.0, &[c(Ace, Hearts), c(Ace, Spades)]);
    let d = automated_decision(&p, Aggression::new(1.0), Chips(100), Chips(10));
    assert_eq!(d, Decision::Call(Chips(50)));
    assert!(d.amount() <= p.chips);

    // Слабая рука в той же ситуации просто сбрасывает.
    let weak = bot_with(50, 1.0, &[c(Three, Hearts), c(Two, Clubs)]);
    let d = automated_decision(&weak, Aggression::new(1.0), Chips(100), Chips(10));
    assert_eq!(d, Decision::Fold);
}

#[test]
fn policy_dispatch_for_automated_ignores_console() {
    let p = bot_with(1000, 1.0, &[c(Ace, Hearts), c(Ace, Spades)]);
    let mut console = ScriptedConsole::new(["f"]);
    let d = p.policy.decide(&p, Chips::ZERO, Chips(10), Chips::ZERO, &mut console);
    assert_eq!(d, Decision::Raise(Chips(39)));
    assert_eq!(console.remaining_inputs(), 1);
    assert!(console.transcript().is_empty());
}

//
// human
//

fn human_decide(player: &Player, table_bet: u64, inputs: &[&str]) -> (Decision, ScriptedConsole) {
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let d = player
        .policy
        .decide(player, Chips(table_bet), Chips(10), Chips::ZERO, &mut console);
    (d, console)
}

#[test]
fn human_folds() {
    let p = human_with(1000, 0);
    let (d, _) = human_decide(&p, 50, &["f"]);
    assert_eq!(d, Decision::Fold);
}

#[test]
fn human_calls_the_difference() {
    let p = human_with(990, 10);
    let (d, console) = human_decide(&p, 50, &["c"]);
    assert_eq!(d, Decision::Call(Chips(40)));
    assert!(console.saw("Amount to call: 40"));
    assert!(console.saw("Your hand: [7♥] [2♣]"));
}

#[test]
fn human_checks_when_matched() {
    let p = human_with(1000, 0);
    let (d, console) = human_decide(&p, 0, &["c"]);
    assert_eq!(d, Decision::Call(Chips::ZERO));
    assert!(!console.saw("Amount to call"));
}

#[test]
fn human_raise_includes_call_amount() {
    let p = human_with(1000, 0);
    let (d, _) = human_decide(&p, 0, &["r", "20"]);
    assert_eq!(d, Decision::Raise(Chips(20)));

    let p = human_with(990, 10);
    let (d, console) = human_decide(&p, 50, &["r", "20"]);
    assert_eq!(d, Decision::Raise(Chips(60)));
    assert!(console.saw("Raise amount (max 950): "));
}

#[test]
fn human_reprompts_on_unknown_action() {
    let p = human_with(1000, 0);
    let (d, console) = human_decide(&p, 0, &["x", "", "c"]);
    assert_eq!(d, Decision::Call(Chips::ZERO));
    assert!(console.saw("Invalid action"));
}

#[test]
fn human_reprompts_on_bad_raise_amounts() {
    let p = human_with(100, 0);
    let (d, console) = human_decide(&p, 0, &["r", "abc", "r", "5", "r", "200", "r", "30"]);
    assert_eq!(d, Decision::Raise(Chips(30)));
    assert!(console.saw("Invalid input"));
    assert!(console.saw("Minimum raise is 10"));
    assert!(console.saw("Maximum raise is 100"));
}

#[test]
fn human_cannot_raise_without_covering_the_call() {
    // 30 фишек против колла 40: рейз отклоняется, колл обрезается по стеку.
    let p = human_with(30, 0);
    let (d, console) = human_decide(&p, 40, &["r", "c"]);
    assert!(console.saw("You don't have enough chips to call"));
    assert_eq!(d, Decision::Call(Chips(30)));
}

#[test]
fn human_end_of_input_is_a_fold() {
    let p = human_with(1000, 0);

    let (d, _) = human_decide(&p, 50, &[]);
    assert_eq!(d, Decision::Fold);

    let (d, _) = human_decide(&p, 50, &["r"]);
    assert_eq!(d, Decision::Fold);

    let (d, _) = human_decide(&p, 50, &["zzz"]);
    assert_eq!(d, Decision::Fold);
}

#[test]
fn human_sees_pot_before_deciding() {
    let p = human_with(1000, 0);
    let mut console = ScriptedConsole::new(["c"]);
    let d = p
        .policy
        .decide(&p, Chips(300), Chips(10), Chips(300), &mut console);

    assert_eq!(d, Decision::Call(Chips(300)));
    assert!(console.saw("Current pot: 300"));
    let pot_line = console.transcript().iter().position(|l| l.contains("Current pot"));
    let turn_line = console.transcript().iter().position(|l| l.contains("You's turn:"));
    assert!(pot_line < turn_line);
}

#[test]
fn announcements_match_table_wording() {
    assert_eq!(Decision::Fold.announce("Alice", Chips::ZERO, Chips(50)), "Alice folds.");
    assert_eq!(Decision::Call(Chips::ZERO).announce("Bob", Chips::ZERO, Chips::ZERO), "Bob checks.");
    assert_eq!(
        Decision::Call(Chips(50)).announce("Bob", Chips(30), Chips(50)),
        "Bob calls with 30 chips."
    );
    assert_eq!(
        Decision::Raise(Chips(50)).announce("Eve", Chips(50), Chips(50)),
        "Eve raises! New bet: 50"
    );
}
