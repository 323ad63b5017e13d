//! Тесты классификатора дро (crate::eval::draws) и таблицы аутов.

use poker_coach::domain::{parse_cards, Card};
use poker_coach::eval::draws::{detect_category, read_draw, DRAW_RULES};
use poker_coach::eval::lookup_tables::{DrawCategory, NO_DRAW_LABEL, OUTS_TABLE};

fn cards(s: &str) -> Vec<Card> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    parse_cards(&tokens).expect("valid cards in test")
}

fn category(hand: &str, board: &str) -> Option<DrawCategory> {
    detect_category(&cards(hand), &cards(board)).map(|e| e.category)
}

#[test]
fn outs_table_is_fixed() {
    let outs: Vec<u8> = OUTS_TABLE.iter().map(|e| e.outs).collect();
    assert_eq!(outs, vec![15, 12, 9, 8, 6, 4, 4, 3, 2]);

    assert_eq!(OUTS_TABLE[0].label, "Open-ended straight and flush draw");
    assert_eq!(OUTS_TABLE[8].label, "Pair to Set Draw");

    for entry in OUTS_TABLE.iter() {
        assert_eq!(entry.category.entry(), entry);
    }
}

#[test]
fn rules_follow_priority_order() {
    let order: Vec<DrawCategory> = DRAW_RULES.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        order,
        vec![
            DrawCategory::OpenEndedStraightAndFlushDraw,
            DrawCategory::InsideStraightAndFlushDraw,
            DrawCategory::FlushDraw,
            DrawCategory::OpenEndedStraightDraw,
            DrawCategory::TwoPairToFullHouse,
            DrawCategory::InsideStraightDraw,
            DrawCategory::TwoOvercards,
            DrawCategory::OneOvercard,
            DrawCategory::PairToSet,
        ]
    );
}

/// OESD + флеш-дро в одной масти → комбинированная категория, а не просто флеш-дро.
#[test]
fn open_ended_straight_and_flush_draw_beats_flush_draw() {
    let entry = detect_category(&cards("9♥ T♥"), &cards("J♥ Q♥ 2♣")).unwrap();
    assert_eq!(entry.category, DrawCategory::OpenEndedStraightAndFlushDraw);
    assert_eq!(entry.label, "Open-ended straight and flush draw");
    assert_eq!(entry.outs, 15);
}

#[test]
fn inside_straight_and_flush_draw() {
    let entry = detect_category(&cards("9♥ T♥"), &cards("Q♥ K♥ 2♣")).unwrap();
    assert_eq!(entry.category, DrawCategory::InsideStraightAndFlushDraw);
    assert_eq!(entry.outs, 12);
}

#[test]
fn plain_flush_draw() {
    let entry = detect_category(&cards("A♠ 7♠"), &cards("K♠ 2♠ 9♦")).unwrap();
    assert_eq!(entry.category, DrawCategory::FlushDraw);
    assert_eq!(entry.outs, 9);
}

#[test]
fn flush_draw_beats_off_suit_straight_draw() {
    // OESD по рангам, но черви 8-9-J-2 не связаны
    assert_eq!(
        category("8♥ 9♥", "T♣ J♥ 2♥"),
        Some(DrawCategory::FlushDraw)
    );
}

#[test]
fn open_ended_straight_draw() {
    let entry = detect_category(&cards("8♣ 9♦"), &cards("T♥ J♠ 2♣")).unwrap();
    assert_eq!(entry.category, DrawCategory::OpenEndedStraightDraw);
    assert_eq!(entry.outs, 8);
}

#[test]
fn two_pair_to_full_house() {
    let entry = detect_category(&cards("K♠ 7♦"), &cards("K♥ 7♣ 2♦")).unwrap();
    assert_eq!(entry.category, DrawCategory::TwoPairToFullHouse);
    assert_eq!(entry.label, "Two pair to full house");
    assert_eq!(entry.outs, 4);
}

/// Две пары проверяются раньше гатшота.
#[test]
fn two_pair_checked_before_inside_straight() {
    assert_eq!(
        category("5♠ 6♦", "5♥ 6♣ 8♦ 9♠"),
        Some(DrawCategory::TwoPairToFullHouse)
    );
}

#[test]
fn inside_straight_draw() {
    let entry = detect_category(&cards("5♠ 6♦"), &cards("8♥ 9♣ K♦")).unwrap();
    assert_eq!(entry.category, DrawCategory::InsideStraightDraw);
    assert_eq!(entry.outs, 4);
}

#[test]
fn overcards() {
    let two = detect_category(&cards("A♠ K♦"), &cards("9♥ 5♣ 2♦")).unwrap();
    assert_eq!(two.category, DrawCategory::TwoOvercards);
    assert_eq!(two.outs, 6);

    let one = detect_category(&cards("A♠ 7♦"), &cards("Q♥ 5♣ 2♦")).unwrap();
    assert_eq!(one.category, DrawCategory::OneOvercard);
    assert_eq!(one.outs, 3);
}

/// Оверкарты недостижимы, если сработало дро выше по приоритету.
#[test]
fn overcards_short_circuited_by_higher_priority() {
    assert_eq!(
        category("A♥ K♥", "Q♥ 7♥ 2♣"),
        Some(DrawCategory::FlushDraw)
    );
}

#[test]
fn pair_to_set() {
    let entry = detect_category(&cards("K♠ 7♦"), &cards("K♥ 9♣ 2♦")).unwrap();
    assert_eq!(entry.category, DrawCategory::PairToSet);
    assert_eq!(entry.label, "Pair to Set Draw");
    assert_eq!(entry.outs, 2);
}

#[test]
fn no_draw() {
    assert_eq!(category("2♠ 7♦", "K♥ 9♣ 4♦"), None);

    let reading = read_draw(&cards("2♠ 7♦"), &cards("K♥ 9♣ 4♦"));
    assert_eq!(reading.category, None);
    assert_eq!(reading.label, NO_DRAW_LABEL);
    assert_eq!(reading.outs, 0);
}

/// Сет тузов: ни одно правило из таблицы не подходит → нет категории.
#[test]
fn trips_fall_through_to_no_category() {
    let hand = cards("A♠ A♥");
    let board = cards("A♦ K♣ 2♥");

    assert!(detect_category(&hand, &board).is_none());
    assert_eq!(read_draw(&hand, &board).outs, 0);
}

#[test]
fn short_board_does_not_panic() {
    assert_eq!(category("A♠ K♦", ""), Some(DrawCategory::TwoOvercards));
    assert_eq!(category("8♠ 9♦", "7♥"), Some(DrawCategory::TwoOvercards));
    assert_eq!(category("5♠ 6♦", "7♥"), None);
}

#[test]
fn classification_is_deterministic() {
    let hand = cards("9♥ T♥");
    let board = cards("J♥ Q♥ 2♣");
    let first = read_draw(&hand, &board);
    for _ in 0..10 {
        assert_eq!(read_draw(&hand, &board), first);
    }
}
