//! Покерный тренер: классификация дро, оценка эквити по таблице аутов,
//! текстура борда и фидбэк на выбранное действие.
//!
//! Ядро (`domain`, `eval`, `coach`) – чистые функции без состояния.
//! Снаружи – `api` (команды/запросы/DTO для фронта), `config`, `infra`
//! (RNG, логирование) и CLI в `src/bin`.

pub mod api;
pub mod coach;
pub mod config;
pub mod domain;
pub mod eval;
pub mod infra;

pub use coach::{deal_scenario, generate_feedback, grade_texture_guess};
pub use domain::{combined_cards, parse_card, Action, Card, Rank, Street, Suit};
pub use eval::{classify_texture, detect_category, estimate_equity, texture_tip, BoardTexture};
