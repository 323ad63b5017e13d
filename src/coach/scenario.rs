use tracing::debug;

use crate::config::ScenarioConfig;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Scenario;

use super::RandomSource;

/// Раздать новую тренировочную ситуацию.
///
/// Карты берутся из перемешанной колоды, поэтому дублей нет.
/// Длина борда – от `min_board` до `max_board` (внутри 3..=5),
/// банк – из `[pot_min, pot_max]`, сумма к коллу – из `[0, pot]`.
pub fn deal_scenario<R: RandomSource>(rng: &mut R, config: &ScenarioConfig) -> Scenario {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let min_board = config.min_board.clamp(3, 5);
    let max_board = config.max_board.clamp(min_board, 5);
    let board_len = rng.next_in_range(min_board as u64, max_board as u64) as usize;

    let hole = deck.draw_n(2);
    let board = deck.draw_n(board_len);

    let pot = rng.next_in_range(config.pot_min, config.pot_max.max(config.pot_min));
    let to_call = rng.next_in_range(0, pot);

    let scenario = Scenario {
        hand: [hole[0], hole[1]],
        board,
        pot: Chips(pot),
        to_call: Chips(to_call),
    };

    debug!(board_len, pot, to_call, "scenario dealt");
    scenario
}
