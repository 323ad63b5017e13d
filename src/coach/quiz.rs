use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::texture::{classify_texture, texture_tip, BoardTexture};

/// Результат проверки догадки о текстуре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureVerdict {
    pub correct: bool,
    pub actual: BoardTexture,
    pub message: String,
}

/// Сравнить тег, выбранный учеником, с настоящей текстурой борда.
pub fn grade_texture_guess(board: &[Card], guess: BoardTexture) -> TextureVerdict {
    let actual = classify_texture(board);
    let tip = texture_tip(actual);

    let (correct, message) = if guess == actual {
        (
            true,
            format!("Correct! This flop is classified as \"{actual}\". {tip}"),
        )
    } else {
        (
            false,
            format!("Incorrect. This flop is actually \"{actual}\". {tip}"),
        )
    };

    TextureVerdict {
        correct,
        actual,
        message,
    }
}
