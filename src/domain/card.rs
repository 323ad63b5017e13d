use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,   // ♠
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Индекс масти для счётчиков `[u8; 4]`.
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// Глиф масти, как его показывает фронт.
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Разбор отметки масти: глиф или ASCII-буква (s/h/d/c).
    pub fn from_mark(mark: char) -> Option<Suit> {
        match mark {
            '♠' | 's' | 'S' => Some(Suit::Spades),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Ранг карты. Числовое значение = сила (2..14, туз = 14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Разбор текстового ранга: `A K Q J T 10 9 .. 2`.
    pub fn from_token(token: &str) -> Option<Rank> {
        match token {
            "A" | "a" => Some(Rank::Ace),
            "K" | "k" => Some(Rank::King),
            "Q" | "q" => Some(Rank::Queen),
            "J" | "j" => Some(Rank::Jack),
            "T" | "t" | "10" => Some(Rank::Ten),
            _ => token
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_value),
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Ошибки разбора текстовой карты.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardParseError {
    #[error("empty card token")]
    Empty,

    #[error("invalid rank `{rank}` in card `{token}`")]
    InvalidRank { token: String, rank: String },

    #[error("invalid suit `{suit}` in card `{token}`")]
    InvalidSuit { token: String, suit: char },
}

/// Разбор карты вида `A♠`, `10♥`, `Td`.
///
/// Последний символ – отметка масти, всё, что перед ним, – ранг.
pub fn parse_card(token: &str) -> Result<Card, CardParseError> {
    let token = token.trim();
    let mark = token.chars().last().ok_or(CardParseError::Empty)?;
    let rank_token = &token[..token.len() - mark.len_utf8()];

    let suit = Suit::from_mark(mark).ok_or_else(|| CardParseError::InvalidSuit {
        token: token.to_string(),
        suit: mark,
    })?;
    let rank = Rank::from_token(rank_token).ok_or_else(|| CardParseError::InvalidRank {
        token: token.to_string(),
        rank: rank_token.to_string(),
    })?;

    Ok(Card { rank, suit })
}

/// Разобрать список токенов; первая ошибка прерывает разбор.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| parse_card(t.as_ref())).collect()
}

/// Все карты сценария: сначала рука, потом борд.
pub fn combined_cards(hand: &[Card], board: &[Card]) -> Vec<Card> {
    let mut all_cards = Vec::with_capacity(hand.len() + board.len());
    all_cards.extend_from_slice(hand);
    all_cards.extend_from_slice(board);
    all_cards
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Card {
    /// Формат вида `A♠`, `10♥`, `7♣`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}
