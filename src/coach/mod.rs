//! Тренер: фидбэк на действие, квиз по текстуре, раздача сценариев.
//!
//! Основные операции:
//!   - `generate_feedback` – две строки текста на выбранное действие;
//!   - `grade_texture_guess` – проверить догадку о текстуре борда;
//!   - `deal_scenario` – случайная рука, борд, банк и сумма к коллу.

pub mod feedback;
pub mod quiz;
pub mod scenario;

pub use feedback::{generate_feedback, TEXTURE_TIP_PREFIX};
pub use quiz::{grade_texture_guess, TextureVerdict};
pub use scenario::deal_scenario;

/// RNG интерфейс для дилера сценариев.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайное число из `[low, high]` включительно; при `high <= low` – `low`.
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;
}
