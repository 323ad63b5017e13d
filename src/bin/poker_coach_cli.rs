// src/bin/poker_coach_cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use poker_coach::api::{
    analyze, handle_command, handle_query, AnalyzeCommand, ClassificationDto, Command,
    CommandResponse, GuessTextureCommand, Query, QueryResponse,
};
use poker_coach::config::CoachConfig;
use poker_coach::domain::{Action, Card, Chips, Scenario};
use poker_coach::eval::{describe_made_hand, BoardTexture};
use poker_coach::infra::logging::init_logging;
use poker_coach::infra::{DeterministicRng, SystemRng};

/// Тренер по дро и текстуре борда в терминале.
#[derive(Debug, Parser)]
#[command(name = "poker_coach_cli")]
struct Args {
    /// Рука героя, например "A♠ K♠" или "Ah,Kh". Без неё раздаётся случайная ситуация.
    #[arg(long)]
    hand: Option<String>,

    /// Борд, например "Q♠ J♠ 2♦".
    #[arg(long)]
    board: Option<String>,

    /// Действие: fold | check | bet | call | raise.
    #[arg(long)]
    action: Option<Action>,

    #[arg(long)]
    pot: Option<u64>,

    #[arg(long = "to-call")]
    to_call: Option<u64>,

    /// Seed для воспроизводимой раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// Догадка о текстуре: dry | wet | paired | monotone | high | low.
    #[arg(long)]
    guess: Option<String>,

    /// JSON-конфиг (см. `CoachConfig`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Печатать ответы API в JSON.
    #[arg(long)]
    json: bool,

    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn split_cards(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CoachConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CoachConfig::default(),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    config.validate().context("validating config")?;
    init_logging(&config.logging);

    let mut responses: Vec<CommandResponse> = Vec::new();

    // 1) Ситуация: из аргументов или случайная.
    let scenario = match &args.hand {
        Some(hand) => {
            let board = args.board.as_deref().unwrap_or_default();
            let query = Query::Classify {
                hand: split_cards(hand),
                board: split_cards(board),
            };
            let classification = match handle_query(query).context("classifying hand")? {
                QueryResponse::Classification(dto) => dto,
                other => anyhow::bail!("unexpected query response: {other:?}"),
            };
            Scenario {
                hand: [classification.hand[0], classification.hand[1]],
                board: classification.board,
                pot: Chips(args.pot.unwrap_or(0)),
                to_call: Chips(args.to_call.unwrap_or(0)),
            }
        }
        None => {
            let response = match args.seed {
                Some(seed) => {
                    let mut rng = DeterministicRng::from_seed(seed);
                    info!(seed = rng.seed(), "dealing seeded scenario");
                    handle_command(Command::DealScenario, &mut rng, &config.scenario)
                }
                None => handle_command(Command::DealScenario, &mut SystemRng, &config.scenario),
            }
            .context("dealing scenario")?;

            let CommandResponse::Scenario(dto) = &response else {
                anyhow::bail!("unexpected command response: {response:?}");
            };
            let scenario = dto.scenario.clone();
            responses.push(response);
            scenario
        }
    };

    if !args.json {
        print_scenario(&scenario);
    }

    // 2) Действие ученика.
    if let Some(action) = args.action {
        let cmd = AnalyzeCommand {
            hand: tokens(&scenario.hand),
            board: tokens(&scenario.board),
            action,
            pot: scenario.pot,
            to_call: scenario.to_call,
        };
        let analysis = analyze(&cmd).context("analyzing action")?;
        info!(%action, equity = analysis.classification.equity, "action analyzed");

        if !args.json {
            println!();
            println!("== Coach Chat ({action}) ==");
            println!("{}", analysis.feedback);
        }
        responses.push(CommandResponse::Analysis(analysis));
    } else if !args.json {
        let buttons: Vec<String> = Action::available(scenario.to_call)
            .iter()
            .map(Action::to_string)
            .collect();
        println!();
        println!("Welcome! Take an action to get feedback: {}", buttons.join(" / "));
    }

    // 3) Квиз по текстуре.
    if let Some(guess) = &args.guess {
        let cmd = Command::GuessTexture(GuessTextureCommand {
            board: tokens(&scenario.board),
            guess: guess.clone(),
        });
        let response =
            handle_command(cmd, &mut SystemRng, &config.scenario).context("grading guess")?;
        if let (false, CommandResponse::TextureGuess(verdict)) = (args.json, &response) {
            println!();
            println!("{}", verdict.message);
        }
        responses.push(response);
    } else if !args.json && scenario.board.len() >= 3 {
        let tags: Vec<&str> = BoardTexture::QUIZ_TAGS.iter().map(|t| t.name()).collect();
        println!();
        println!("Guess the board texture with --guess: {}", tags.join(" / "));
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&responses).context("serializing responses")?
        );
    }

    Ok(())
}

fn print_scenario(scenario: &Scenario) {
    let info = ClassificationDto::build(&scenario.hand, &scenario.board);

    println!("================ SCENARIO =================");
    println!("Hand:   {}", tokens(&scenario.hand).join(" "));
    println!("Board:  {}", tokens(&scenario.board).join(" "));
    match info.street {
        Some(street) => println!("Street: {street}"),
        None => println!("Street: -"),
    }
    println!("Hand Type: {}", info.hand_type);
    if let Some(made) = info.made_hand {
        println!("Made Hand: {}", describe_made_hand(made));
    }
    println!("Hand Equity: {}% ({} outs)", info.equity, info.outs);
    println!("Pot: {}  To call: {}", scenario.pot, scenario.to_call);
    if let Some(odds) = poker_coach::api::format_pot_odds(scenario.pot, scenario.to_call) {
        println!("Pot Odds: {odds}%");
    }
    println!("Texture: {}", info.texture);
}
