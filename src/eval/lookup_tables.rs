use serde::{Deserialize, Serialize};

use super::texture::BoardTexture;

/// Категория дро, которую распознаёт классификатор.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DrawCategory {
    OpenEndedStraightAndFlushDraw,
    InsideStraightAndFlushDraw,
    FlushDraw,
    OpenEndedStraightDraw,
    TwoOvercards,
    TwoPairToFullHouse,
    InsideStraightDraw,
    OneOvercard,
    PairToSet,
}

/// Строка таблиц аутов: категория, подпись для фронта, число аутов.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: DrawCategory,
    pub label: &'static str,
    pub outs: u8,
}

/// Подпись, когда ни одна категория не подошла.
pub const NO_DRAW_LABEL: &str = "No draw";

/// Таблица аутов (от 15 до 2). Порядок строк – порядок показа во фронте,
/// а НЕ порядок приоритета (приоритет задаёт `draws::DRAW_RULES`).
pub static OUTS_TABLE: [CategoryEntry; 9] = [
    CategoryEntry {
        category: DrawCategory::OpenEndedStraightAndFlushDraw,
        label: "Open-ended straight and flush draw",
        outs: 15,
    },
    CategoryEntry {
        category: DrawCategory::InsideStraightAndFlushDraw,
        label: "Inside straight and flush draw",
        outs: 12,
    },
    CategoryEntry {
        category: DrawCategory::FlushDraw,
        label: "Flush draw",
        outs: 9,
    },
    CategoryEntry {
        category: DrawCategory::OpenEndedStraightDraw,
        label: "Open-ended straight draw",
        outs: 8,
    },
    CategoryEntry {
        category: DrawCategory::TwoOvercards,
        label: "Two overcards",
        outs: 6,
    },
    CategoryEntry {
        category: DrawCategory::TwoPairToFullHouse,
        label: "Two pair to full house",
        outs: 4,
    },
    CategoryEntry {
        category: DrawCategory::InsideStraightDraw,
        label: "Inside straight draw",
        outs: 4,
    },
    CategoryEntry {
        category: DrawCategory::OneOvercard,
        label: "One overcard",
        outs: 3,
    },
    CategoryEntry {
        category: DrawCategory::PairToSet,
        label: "Pair to Set Draw",
        outs: 2,
    },
];

impl DrawCategory {
    /// Строка таблицы аутов для категории.
    pub fn entry(self) -> &'static CategoryEntry {
        let idx = match self {
            DrawCategory::OpenEndedStraightAndFlushDraw => 0,
            DrawCategory::InsideStraightAndFlushDraw => 1,
            DrawCategory::FlushDraw => 2,
            DrawCategory::OpenEndedStraightDraw => 3,
            DrawCategory::TwoOvercards => 4,
            DrawCategory::TwoPairToFullHouse => 5,
            DrawCategory::InsideStraightDraw => 6,
            DrawCategory::OneOvercard => 7,
            DrawCategory::PairToSet => 8,
        };
        &OUTS_TABLE[idx]
    }
}

/// Советы по текстуре борда (по мотивам Upswing Poker).
pub static TEXTURE_TIPS: [(BoardTexture, &str); 8] = [
    (
        BoardTexture::Dry,
        "Dry flops (all suits unique, uncoordinated) favor the preflop raiser. C-bet often, especially with high cards. Avoid excessive bluffing if checked to.",
    ),
    (
        BoardTexture::Wet,
        "Wet flops are coordinated, providing flush and/or straight draws. Be cautious with c-bets, expect more calls/raises. Value bet strong hands, check weaker ones.",
    ),
    (
        BoardTexture::Paired,
        "Paired flops make it hard for opponents to have strong hands. C-bet small with a wide range.",
    ),
    (
        BoardTexture::Monotone,
        "Monotone flops (all one suit) favor hands with a flush card. C-bet less often without a flush draw or made flush.",
    ),
    (
        BoardTexture::High,
        "High flops (two or three cards 10 or higher) favor the preflop raiser. C-bet often, especially with strong hands.",
    ),
    (
        BoardTexture::Low,
        "Low flops (two or three cards 8 or lower) hit the caller’s range more. C-bet less, check more.",
    ),
    (
        BoardTexture::Other,
        "Play solid poker. Consider your position, hand strength, and opponent tendencies.",
    ),
    (
        BoardTexture::Unknown,
        "Not enough info to classify the board texture.",
    ),
];
