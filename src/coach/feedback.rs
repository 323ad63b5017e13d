use tracing::debug;

use crate::domain::action::Action;
use crate::domain::card::{combined_cards, Card};
use crate::eval::hand_rank::{best_made_hand, possible_threats, Threat};
use crate::eval::texture::{classify_texture, texture_tip};

/// Префикс второй строки фидбэка.
pub const TEXTURE_TIP_PREFIX: &str = "Board Texture Tip: ";

/// Фидбэк тренера на действие ученика.
///
/// Всегда две строки: реакция на действие и совет по текстуре борда.
pub fn generate_feedback(action: Action, equity: u32, board: &[Card], hand: &[Card]) -> String {
    let tip = texture_tip(classify_texture(board));
    let all_cards = combined_cards(hand, board);

    let action_msg = if let Some(made) = best_made_hand(&all_cards) {
        debug!(?made, %action, "feedback: best hand");
        best_hand_message(action)
    } else {
        let threats = possible_threats(&all_cards);
        if threats.is_empty() {
            debug!(%action, equity, "feedback: equity thresholds");
            equity_message(action, equity).to_string()
        } else {
            debug!(?threats, %action, "feedback: better hands possible");
            threat_message(action, &threats)
        }
    };

    format!("{action_msg}\n{TEXTURE_TIP_PREFIX}{tip}")
}

fn best_hand_message(action: Action) -> String {
    let msg = if action.is_aggressive() {
        "Excellent! You have the best hand. Aggressive play is recommended."
    } else if action.is_passive() {
        "You have the best hand. Consider betting or raising for value."
    } else {
        "Folding the best hand is a big mistake! Always play aggressively with the nuts."
    };
    msg.to_string()
}

fn threat_message(action: Action, threats: &[Threat]) -> String {
    let list = threats
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ");

    if action.is_aggressive() {
        format!("Be cautious! {list} possible. Aggressive play can be risky.")
    } else if action.is_passive() {
        format!("Good. {list} possible, so caution is wise.")
    } else {
        format!("Folding is reasonable. {list} possible.")
    }
}

fn equity_message(action: Action, equity: u32) -> &'static str {
    match action {
        Action::Fold if equity > 20 => "Folding with high equity! Consider calling or raising.",
        Action::Fold => "Good fold. Sometimes it is best to let go.",
        Action::Check if equity > 15 => "Checking with decent equity. Consider betting for value.",
        Action::Check => "Check is fine here.",
        Action::Bet if equity < 10 => "Betting with low equity is risky.",
        Action::Bet => "Nice bet! You have some equity.",
        Action::Raise if equity < 12 => "Raising with low equity can be dangerous.",
        Action::Raise => "Aggressive play! Make sure your outs are clean.",
        Action::Call => "Action taken.",
    }
}
