use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{combined_cards, Card};
use crate::domain::chips::Chips;

/// Улица раздачи. Определяется только длиной борда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    /// 3 карты – флоп, 4 – тёрн, 5 – ривер; иначе улицы нет.
    pub const fn from_board_len(len: usize) -> Option<Street> {
        match len {
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    pub const fn board_len(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// Одна тренировочная ситуация: рука героя, борд, банк и сумма к коллу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub hand: [Card; 2],
    pub board: Vec<Card>,
    pub pot: Chips,
    pub to_call: Chips,
}

impl Scenario {
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.board.len())
    }

    pub fn all_cards(&self) -> Vec<Card> {
        combined_cards(&self.hand, &self.board)
    }
}
