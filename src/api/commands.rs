use serde::{Deserialize, Serialize};

use crate::coach::feedback::generate_feedback;
use crate::coach::quiz::grade_texture_guess;
use crate::coach::scenario::deal_scenario;
use crate::coach::RandomSource;
use crate::config::ScenarioConfig;
use crate::domain::action::Action;
use crate::domain::card::{parse_cards, Card};
use crate::domain::chips::Chips;
use crate::eval::texture::BoardTexture;

use super::dto::{format_pot_odds, AnalysisDto, ClassificationDto, CommandResponse, ScenarioDto};
use super::errors::ApiError;

/// Команда верхнего уровня. Карты приходят текстом: `"A♠"`, `"10♥"`, `"Td"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Разобрать действие ученика в заданной ситуации.
    Analyze(AnalyzeCommand),

    /// Проверить догадку о текстуре борда.
    GuessTexture(GuessTextureCommand),

    /// Раздать новую ситуацию.
    DealScenario,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeCommand {
    pub hand: Vec<String>,
    pub board: Vec<String>,
    pub action: Action,
    pub pot: Chips,
    pub to_call: Chips,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuessTextureCommand {
    pub board: Vec<String>,
    /// Тег текстуры: "dry", "wet", ...
    pub guess: String,
}

/// Разобрать руку: ровно две карты.
pub fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<[Card; 2], ApiError> {
    match parse_cards(tokens)?.as_slice() {
        [a, b] => Ok([*a, *b]),
        other => Err(ApiError::BadRequest(format!(
            "hand must have exactly 2 cards, got {}",
            other.len()
        ))),
    }
}

/// Разобрать борд: от 0 до 5 карт.
pub fn parse_board<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ApiError> {
    let board = parse_cards(tokens)?;
    if board.len() > 5 {
        return Err(ApiError::BadRequest(format!(
            "board must have at most 5 cards, got {}",
            board.len()
        )));
    }
    Ok(board)
}

/// Одна и та же карта не может быть и в руке, и на борде дважды.
pub fn ensure_distinct(hand: &[Card], board: &[Card]) -> Result<(), ApiError> {
    let all_cards: Vec<&Card> = hand.iter().chain(board.iter()).collect();
    for (i, card) in all_cards.iter().enumerate() {
        if all_cards[..i].contains(card) {
            return Err(ApiError::BadRequest(format!("duplicate card {card}")));
        }
    }
    Ok(())
}

/// Выполнить команду.
pub fn handle_command<R: RandomSource>(
    command: Command,
    rng: &mut R,
    config: &ScenarioConfig,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Analyze(cmd) => analyze(&cmd).map(CommandResponse::Analysis),

        Command::GuessTexture(cmd) => {
            let board = parse_board(&cmd.board)?;
            let guess: BoardTexture = cmd.guess.parse().map_err(ApiError::BadRequest)?;
            Ok(CommandResponse::TextureGuess(grade_texture_guess(
                &board, guess,
            )))
        }

        Command::DealScenario => {
            let scenario = deal_scenario(rng, config);
            Ok(CommandResponse::Scenario(ScenarioDto::build(scenario)))
        }
    }
}

/// Классификация + фидбэк на действие.
pub fn analyze(cmd: &AnalyzeCommand) -> Result<AnalysisDto, ApiError> {
    let hand = parse_hand(&cmd.hand)?;
    let board = parse_board(&cmd.board)?;
    ensure_distinct(&hand, &board)?;

    let classification = ClassificationDto::build(&hand, &board);
    let feedback = generate_feedback(cmd.action, classification.equity, &board, &hand);

    Ok(AnalysisDto {
        classification,
        action: cmd.action,
        pot: cmd.pot,
        to_call: cmd.to_call,
        pot_odds: format_pot_odds(cmd.pot, cmd.to_call),
        feedback,
    })
}
