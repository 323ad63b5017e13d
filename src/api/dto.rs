use serde::{Deserialize, Serialize};

use crate::coach::quiz::TextureVerdict;
use crate::domain::action::Action;
use crate::domain::card::{combined_cards, Card};
use crate::domain::chips::Chips;
use crate::domain::hand::{Scenario, Street};
use crate::eval::draws::read_draw;
use crate::eval::equity::{estimate_equity, pot_odds};
use crate::eval::hand_rank::{best_made_hand, MadeHand};
use crate::eval::lookup_tables::DrawCategory;
use crate::eval::texture::{classify_texture, texture_tip, BoardTexture};

/// DTO классификации руки (без действия): то, что фронт показывает над кнопками.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassificationDto {
    pub hand: Vec<Card>,
    pub board: Vec<Card>,
    /// `None`, если в борде меньше трёх карт.
    pub street: Option<Street>,
    pub category: Option<DrawCategory>,
    /// Подпись категории или "No draw".
    pub hand_type: String,
    pub outs: u8,
    /// Эквити в процентах; 0 без улицы.
    pub equity: u32,
    pub made_hand: Option<MadeHand>,
    pub texture: BoardTexture,
    pub texture_tip: String,
}

impl ClassificationDto {
    pub fn build(hand: &[Card], board: &[Card]) -> Self {
        let street = Street::from_board_len(board.len());
        let reading = read_draw(hand, board);
        let equity = street
            .map(|s| estimate_equity(reading.outs, s))
            .unwrap_or(0);
        let texture = classify_texture(board);

        ClassificationDto {
            hand: hand.to_vec(),
            board: board.to_vec(),
            street,
            category: reading.category,
            hand_type: reading.label.to_string(),
            outs: reading.outs,
            equity,
            made_hand: best_made_hand(&combined_cards(hand, board)),
            texture,
            texture_tip: texture_tip(texture).to_string(),
        }
    }
}

/// Шансы банка для показа: проценты с одним знаком после запятой.
pub fn format_pot_odds(pot: Chips, to_call: Chips) -> Option<String> {
    pot_odds(pot, to_call).map(|p| format!("{p:.1}"))
}

/// DTO разбора действия ученика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisDto {
    pub classification: ClassificationDto,
    pub action: Action,
    pub pot: Chips,
    pub to_call: Chips,
    pub pot_odds: Option<String>,
    /// Две строки: реакция на действие + совет по текстуре.
    pub feedback: String,
}

/// DTO свежей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDto {
    pub scenario: Scenario,
    pub classification: ClassificationDto,
    pub pot_odds: Option<String>,
    /// Кнопки, доступные при текущей сумме к коллу.
    pub available_actions: Vec<Action>,
}

impl ScenarioDto {
    pub fn build(scenario: Scenario) -> Self {
        let classification = ClassificationDto::build(&scenario.hand, &scenario.board);
        ScenarioDto {
            pot_odds: format_pot_odds(scenario.pot, scenario.to_call),
            available_actions: Action::available(scenario.to_call).to_vec(),
            classification,
            scenario,
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Разбор действия.
    Analysis(AnalysisDto),

    /// Результат квиза по текстуре.
    TextureGuess(TextureVerdict),

    /// Новая раздача.
    Scenario(ScenarioDto),
}
