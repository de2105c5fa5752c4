// src/bin/poker_cli.rs

use std::path::PathBuf;
use std::process::ExitCode;

use basic_poker::domain::Chips;
use basic_poker::engine::{Game, HandReport, HandStatus, PolicyDecider, RandomSource, RoundOutcome};
use basic_poker::infra::{Console, DeterministicRng, StdConsole, SystemRng};
use basic_poker::{ConfigError, GameConfig};
use clap::Parser;
use tracing::{error, Level};

/// Консольный покер: один стол, люди против ботов.
#[derive(Parser, Debug)]
#[command(name = "poker_cli", version, about)]
struct Args {
    /// JSON-файл с настройками игры.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Количество людей за столом.
    #[arg(long)]
    humans: Option<usize>,

    /// Количество ботов.
    #[arg(long)]
    ai: Option<usize>,

    /// Стартовый стек.
    #[arg(long)]
    chips: Option<u64>,

    /// Минимальная ставка / минимальное повышение.
    #[arg(long)]
    min_bet: Option<u64>,

    /// Seed для воспроизводимой тасовки.
    #[arg(long)]
    seed: Option<u64>,

    /// Остановиться после N раздач.
    #[arg(long)]
    max_hands: Option<u64>,

    /// Печатать JSON-историю каждой раздачи.
    #[arg(long)]
    dump_history: bool,

    /// Подробный лог (debug).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "не удалось собрать конфиг");
            return ExitCode::FAILURE;
        }
    };

    match config.seed {
        Some(seed) => run(Game::new(&config, DeterministicRng::from_seed(seed)), &args),
        None => run(Game::new(&config, SystemRng), &args),
    }
}

fn build_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(humans) = args.humans {
        config.human_players = humans;
    }
    if let Some(ai) = args.ai {
        config.ai_players = ai;
    }
    if let Some(chips) = args.chips {
        config.starting_chips = Chips(chips);
    }
    if let Some(min_bet) = args.min_bet {
        config.minimum_bet = Chips(min_bet);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn run<R: RandomSource>(mut game: Game<R>, args: &Args) -> ExitCode {
    let mut decider = PolicyDecider::new(StdConsole::new());
    let mut exit = ExitCode::SUCCESS;

    println!("Welcome to Poker Basic!");
    println!("Players: {}", game.players.len());

    loop {
        println!();
        println!("==================== HAND {} ====================", game.hands_played + 1);

        match game.play_hand(&mut decider) {
            Ok(HandStatus::CannotProceed) => break,
            Ok(HandStatus::Finished(report)) => print_report(&game, &report, args.dump_history),
            Err(err) => {
                error!(%err, "раздача прервана");
                println!("Hand aborted: {err}");
                exit = ExitCode::FAILURE;
                break;
            }
        }

        if !game.has_contest() {
            break;
        }
        if args.max_hands.is_some_and(|max| game.hands_played >= max) {
            break;
        }

        if game.players.iter().any(|p| p.is_human() && !p.chips.is_zero()) {
            let answer = decider.console.prompt("\nContinue to next hand? (y/n): ");
            if !matches!(answer.as_deref().map(str::trim), Some("y" | "Y")) {
                break;
            }
        }
    }

    println!();
    println!("==================== GAME OVER ====================");
    println!("Final Standings:");
    for (place, player) in game.standings().iter().enumerate() {
        println!("{}. {}: {} chips", place + 1, player.name, player.chips);
    }

    exit
}

fn print_report<R: RandomSource>(game: &Game<R>, report: &HandReport, dump_history: bool) {
    println!();
    println!("Your hands:");
    for player in game.players.iter().filter(|p| p.is_human()) {
        println!("  {}: {}", player.name, player.hand_display());
    }

    if let RoundOutcome::FoldOut { winner } = report.outcome {
        println!("Everyone else folded, {} takes it.", game.players[winner].name);
    }

    match &report.award {
        Some(award) if !award.by_showdown => {
            println!(
                "{} wins the pot of {} chips!",
                game.players[award.seat].name, award.amount
            );
        }
        Some(award) => {
            println!("--- Showdown ---");
            for player in game.players.iter().filter(|p| p.is_in_hand()) {
                println!("  {}: {}", player.name, player.hand_display());
            }
            println!(
                "{} wins with highest card! Pot of {} chips.",
                game.players[award.seat].name, award.amount
            );
        }
        None => println!("Nobody left to take the pot."),
    }

    println!();
    print!("{}", game.game_state());

    if dump_history {
        match report.history.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => error!(%err, "не удалось сериализовать историю"),
        }
    }
}
