//! Классификация текстуры борда (карты руки не учитываются).
//!
//! Правила, по порядку, первое совпадение побеждает:
//!   1. связный борд с двумя мастями или одной мастью → `wet`
//!   2. две и больше карт от десятки → `high`
//!   3. две и больше карт до восьмёрки → `low`
//!   4. одна масть → `monotone`
//!   5. три масти и несвязный → `dry`
//!   6. пара среди первых трёх карт → `paired`
//!   7. иначе → `other`
//!
//! Меньше трёх карт – `unknown`.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;

use super::lookup_tables::TEXTURE_TIPS;

/// Тег текстуры борда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BoardTexture {
    High,
    Low,
    Wet,
    Monotone,
    Dry,
    Paired,
    Other,
    Unknown,
}

impl BoardTexture {
    /// Теги, которые фронт предлагает угадать в квизе.
    pub const QUIZ_TAGS: [BoardTexture; 6] = [
        BoardTexture::Dry,
        BoardTexture::Wet,
        BoardTexture::Paired,
        BoardTexture::Monotone,
        BoardTexture::High,
        BoardTexture::Low,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BoardTexture::High => "high",
            BoardTexture::Low => "low",
            BoardTexture::Wet => "wet",
            BoardTexture::Monotone => "monotone",
            BoardTexture::Dry => "dry",
            BoardTexture::Paired => "paired",
            BoardTexture::Other => "other",
            BoardTexture::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardTexture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        TEXTURE_TIPS
            .iter()
            .map(|(tag, _)| *tag)
            .find(|tag| tag.name() == needle)
            .ok_or_else(|| format!("Invalid texture tag: {s}"))
    }
}

/// Сырые признаки борда, из которых собирается тег.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct TextureFeatures {
    pub unique_suits: usize,
    pub unique_ranks: usize,
    pub paired: bool,
    pub monotone: bool,
    pub two_tone: bool,
    pub rainbow: bool,
    pub connected: bool,
    pub high_count: usize,
    pub low_count: usize,
}

impl TextureFeatures {
    /// `None` для борда короче трёх карт.
    pub fn of(board: &[Card]) -> Option<Self> {
        if board.len() < 3 {
            return None;
        }

        let mut suits: Vec<_> = board.iter().map(|c| c.suit.index()).collect();
        suits.sort_unstable();
        suits.dedup();

        let mut ranks: Vec<u8> = board.iter().map(|c| c.rank.value()).collect();
        ranks.sort_unstable();
        ranks.dedup();

        let r = |i: usize| board[i].rank;
        let paired = r(0) == r(1) || r(0) == r(2) || r(1) == r(2);

        // ranks непустой: в борде минимум три карты.
        let spread = ranks[ranks.len() - 1] - ranks[0];

        Some(TextureFeatures {
            unique_suits: suits.len(),
            unique_ranks: ranks.len(),
            paired,
            monotone: suits.len() == 1,
            two_tone: suits.len() == 2,
            rainbow: suits.len() == 3,
            connected: spread <= 4,
            high_count: board.iter().filter(|c| c.rank.value() >= 10).count(),
            low_count: board.iter().filter(|c| c.rank.value() <= 8).count(),
        })
    }

    pub fn texture(&self) -> BoardTexture {
        if self.connected && (self.two_tone || self.monotone) {
            BoardTexture::Wet
        } else if self.high_count >= 2 {
            BoardTexture::High
        } else if self.low_count >= 2 {
            BoardTexture::Low
        } else if self.monotone {
            BoardTexture::Monotone
        } else if self.rainbow && !self.connected {
            BoardTexture::Dry
        } else if self.paired {
            BoardTexture::Paired
        } else {
            BoardTexture::Other
        }
    }
}

/// Тег текстуры борда.
pub fn classify_texture(board: &[Card]) -> BoardTexture {
    let texture = TextureFeatures::of(board)
        .map(|f| f.texture())
        .unwrap_or(BoardTexture::Unknown);

    debug!(texture = texture.name(), board_len = board.len(), "board texture classified");
    texture
}

/// Совет для тега текстуры.
pub fn texture_tip(texture: BoardTexture) -> &'static str {
    TEXTURE_TIPS
        .iter()
        .find(|(tag, _)| *tag == texture)
        .map(|(_, tip)| *tip)
        .unwrap_or("")
}

/// Совет по текстовому тегу; незнакомый тег даёт пустую строку.
pub fn texture_tip_for_name(name: &str) -> &'static str {
    name.parse::<BoardTexture>()
        .map(texture_tip)
        .unwrap_or("")
}
