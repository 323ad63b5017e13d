//! Детекторы признаков руки: дро и готовые комбинации.
//!
//! Все функции работают над объединённым набором карт (рука + борд, 2–7 карт)
//! и ничего не паникуют на коротких наборах: окно длиннее набора даёт `false`.

use crate::domain::card::{combined_cards, Card, Suit};

/// Сколько карт каждой масти (индекс – `Suit::index`).
pub fn suit_counts(cards: &[Card]) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit.index()] += 1;
    }
    counts
}

/// Сколько карт каждого ранга (индексы 2..=14).
pub fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }
    counts
}

/// Уникальные ранги по возрастанию; если есть туз, он же добавляется
/// снизу как 1 (для колеса A-2-3-4-5).
pub fn rank_ladder(cards: &[Card]) -> Vec<u8> {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();
    ranks.dedup();
    if ranks.last() == Some(&14) {
        ranks.insert(0, 1);
    }
    ranks
}

/// Есть ли окно из `width` подряд идущих ступенек с разбросом ровно `span`.
/// Ступеньки уникальны, так что значения в окне всегда различны.
fn has_window(ladder: &[u8], width: usize, span: u8) -> bool {
    ladder.windows(width).any(|w| w[width - 1] - w[0] == span)
}

/// Масть, в которой ровно 4 карты (кандидат на флеш-дро).
pub fn four_flush_suit(cards: &[Card]) -> Option<Suit> {
    let counts = suit_counts(cards);
    Suit::ALL.iter().copied().find(|s| counts[s.index()] == 4)
}

fn suited(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.suit == suit).collect()
}

pub fn is_flush_draw(cards: &[Card]) -> bool {
    suit_counts(cards).iter().any(|&c| c == 4)
}

pub fn is_flush(cards: &[Card]) -> bool {
    suit_counts(cards).iter().any(|&c| c >= 5)
}

/// Пять рангов подряд.
pub fn is_straight(cards: &[Card]) -> bool {
    has_window(&rank_ladder(cards), 5, 4)
}

/// Четыре ранга подряд – закрывается с обеих сторон.
pub fn is_open_ended_straight_draw(cards: &[Card]) -> bool {
    has_window(&rank_ladder(cards), 4, 3)
}

/// Четыре ранга в пределах пяти с одной дыркой внутри (гатшот).
pub fn is_inside_straight_draw(cards: &[Card]) -> bool {
    has_window(&rank_ladder(cards), 4, 4)
}

pub fn is_open_ended_straight_and_flush_draw(cards: &[Card]) -> bool {
    four_flush_suit(cards)
        .map(|suit| is_open_ended_straight_draw(&suited(cards, suit)))
        .unwrap_or(false)
}

pub fn is_inside_straight_and_flush_draw(cards: &[Card]) -> bool {
    four_flush_suit(cards)
        .map(|suit| is_inside_straight_draw(&suited(cards, suit)))
        .unwrap_or(false)
}

pub fn is_full_house(cards: &[Card]) -> bool {
    let counts = rank_counts(cards);
    counts.contains(&3) && counts.contains(&2)
}

/// Ровно две пары – кандидат на фулл-хаус.
pub fn is_two_pair_to_full_house(cards: &[Card]) -> bool {
    pair_count(cards) == 2
}

pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    rank_counts(cards).contains(&4)
}

pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    rank_counts(cards).contains(&3)
}

/// Количество рангов, встречающихся ровно дважды.
pub fn pair_count(cards: &[Card]) -> usize {
    rank_counts(cards).iter().filter(|&&c| c == 2).count()
}

/// Сколько карт руки строго старше самой старшей карты борда.
/// Пустой борд: старше "минус бесконечности" – все карты руки.
pub fn overcard_count(hand: &[Card], board: &[Card]) -> usize {
    match board.iter().map(|c| c.rank).max() {
        Some(top) => hand.iter().filter(|c| c.rank > top).count(),
        None => hand.len(),
    }
}

/// Пара с бордом, которая может улучшиться до сета:
/// ранг руки есть на борде и всего таких карт ровно две.
/// Трипс (например, AA на тузовом борде) сюда не относится.
pub fn is_pair_to_set(hand: &[Card], board: &[Card]) -> bool {
    let counts = rank_counts(&combined_cards(hand, board));

    hand.iter().any(|h| {
        board.iter().any(|b| b.rank == h.rank) && counts[h.rank.value() as usize] == 2
    })
}
