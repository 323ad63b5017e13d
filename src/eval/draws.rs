use serde::Serialize;
use tracing::debug;

use crate::domain::card::{combined_cards, Card};

use super::features;
use super::lookup_tables::{CategoryEntry, DrawCategory, NO_DRAW_LABEL};

/// Входные данные одного правила: рука, борд и их объединение.
pub struct DrawInput<'a> {
    pub hand: &'a [Card],
    pub board: &'a [Card],
    pub all_cards: Vec<Card>,
}

type DrawRule = (DrawCategory, fn(&DrawInput<'_>) -> bool);

/// Правила в порядке приоритета: первое сработавшее определяет категорию.
/// Две пары проверяются раньше гатшота; оверкарты достижимы только
/// если не сработало ни одно дро выше.
pub static DRAW_RULES: [DrawRule; 9] = [
    (DrawCategory::OpenEndedStraightAndFlushDraw, |i| {
        features::is_open_ended_straight_and_flush_draw(&i.all_cards)
    }),
    (DrawCategory::InsideStraightAndFlushDraw, |i| {
        features::is_inside_straight_and_flush_draw(&i.all_cards)
    }),
    (DrawCategory::FlushDraw, |i| features::is_flush_draw(&i.all_cards)),
    (DrawCategory::OpenEndedStraightDraw, |i| {
        features::is_open_ended_straight_draw(&i.all_cards)
    }),
    (DrawCategory::TwoPairToFullHouse, |i| {
        features::is_two_pair_to_full_house(&i.all_cards)
    }),
    (DrawCategory::InsideStraightDraw, |i| {
        features::is_inside_straight_draw(&i.all_cards)
    }),
    (DrawCategory::TwoOvercards, |i| {
        features::overcard_count(i.hand, i.board) == 2
    }),
    (DrawCategory::OneOvercard, |i| {
        features::overcard_count(i.hand, i.board) == 1
    }),
    (DrawCategory::PairToSet, |i| features::is_pair_to_set(i.hand, i.board)),
];

/// Определить категорию дро для руки и борда.
///
/// `None` – ни одно правило не сработало ("No draw", 0 аутов).
pub fn detect_category(hand: &[Card], board: &[Card]) -> Option<&'static CategoryEntry> {
    let input = DrawInput {
        hand,
        board,
        all_cards: combined_cards(hand, board),
    };

    let matched = DRAW_RULES
        .iter()
        .find(|(_, rule)| rule(&input))
        .map(|(category, _)| category.entry());

    debug!(
        category = matched.map(|e| e.label).unwrap_or(NO_DRAW_LABEL),
        cards = input.all_cards.len(),
        "draw category detected"
    );

    matched
}

/// Итог классификации в удобном для фронта виде.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DrawReading {
    pub category: Option<DrawCategory>,
    pub label: &'static str,
    pub outs: u8,
}

impl DrawReading {
    pub fn from_entry(entry: Option<&'static CategoryEntry>) -> Self {
        match entry {
            Some(e) => DrawReading {
                category: Some(e.category),
                label: e.label,
                outs: e.outs,
            },
            None => DrawReading {
                category: None,
                label: NO_DRAW_LABEL,
                outs: 0,
            },
        }
    }
}

/// `detect_category` + подпись/ауты, включая случай "No draw".
pub fn read_draw(hand: &[Card], board: &[Card]) -> DrawReading {
    DrawReading::from_entry(detect_category(hand, board))
}
