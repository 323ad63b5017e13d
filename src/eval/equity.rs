use crate::domain::chips::Chips;
use crate::domain::hand::Street;

/// Множитель "правила 4 и 2" для улицы.
///
/// На ривере карт больше не будет, поэтому эквити дро считаем нулевым
/// (эквити готовой руки здесь не учитывается).
pub fn equity_multiplier(street: Street) -> f64 {
    match street {
        Street::Flop => 4.4,
        Street::Turn => 2.2,
        Street::River => 0.0,
    }
}

/// Примерный шанс на победу в процентах, округлённый до целого.
/// Без ограничения сверху: 15 аутов на флопе дают 66.
pub fn estimate_equity(outs: u8, street: Street) -> u32 {
    (f64::from(outs) * equity_multiplier(street)).round() as u32
}

/// Шансы банка в процентах: `to_call / (pot + to_call) * 100`.
///
/// `None`, если коллировать нечего.
pub fn pot_odds(pot: Chips, to_call: Chips) -> Option<f64> {
    if to_call.is_zero() {
        return None;
    }
    let total = (pot + to_call).0 as f64;
    Some(to_call.0 as f64 / total * 100.0)
}
