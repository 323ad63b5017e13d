use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

use super::features;

/// Готовая сильная рука ("лучшая рука" для тренера).
///
/// Порядок вариантов = приоритет проверки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum MadeHand {
    Flush = 0,
    FullHouse = 1,
    FourOfAKind = 2,
    StraightFlush = 3,
}

/// Рука, которая может побить текущую.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Threat {
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl Threat {
    pub const fn name(self) -> &'static str {
        match self {
            Threat::Flush => "flush",
            Threat::FullHouse => "full house",
            Threat::Quads => "quads",
            Threat::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Флаги готовых комбинаций, посчитанные один раз.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MadeFlags {
    pub flush: bool,
    pub straight_flush: bool,
    pub quads: bool,
    pub full_house: bool,
}

impl MadeFlags {
    /// Стрит-флеш приближённо: одновременно есть флеш и стрит
    /// (не обязательно одними и теми же картами).
    pub fn of(cards: &[Card]) -> Self {
        let flush = features::is_flush(cards);
        MadeFlags {
            flush,
            straight_flush: flush && features::is_straight(cards),
            quads: features::is_four_of_a_kind(cards),
            full_house: features::is_full_house(cards),
        }
    }
}

/// Лучшая готовая рука из списка: стрит-флеш, каре, фулл-хаус, флеш.
pub fn best_made_hand(cards: &[Card]) -> Option<MadeHand> {
    let flags = MadeFlags::of(cards);
    if flags.straight_flush {
        Some(MadeHand::StraightFlush)
    } else if flags.quads {
        Some(MadeHand::FourOfAKind)
    } else if flags.full_house {
        Some(MadeHand::FullHouse)
    } else if flags.flush {
        Some(MadeHand::Flush)
    } else {
        None
    }
}

/// Какие более сильные руки возможны при текущих картах.
pub fn possible_threats(cards: &[Card]) -> Vec<Threat> {
    let flags = MadeFlags::of(cards);
    let mut threats = Vec::new();

    if !flags.flush && features::suit_counts(cards).iter().any(|&c| c >= 3) {
        threats.push(Threat::Flush);
    }
    if !flags.full_house && features::pair_count(cards) >= 2 {
        threats.push(Threat::FullHouse);
    }
    if !flags.quads && features::is_three_of_a_kind(cards) {
        threats.push(Threat::Quads);
    }
    if !flags.straight_flush && flags.flush && features::is_open_ended_straight_draw(cards) {
        threats.push(Threat::StraightFlush);
    }

    threats
}

/// Человеческое описание готовой руки.
pub fn describe_made_hand(hand: MadeHand) -> &'static str {
    match hand {
        MadeHand::Flush => "Flush",
        MadeHand::FullHouse => "Full house",
        MadeHand::FourOfAKind => "Four of a kind",
        MadeHand::StraightFlush => "Straight flush",
    }
}
