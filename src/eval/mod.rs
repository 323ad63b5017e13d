//! Модуль оценки руки для тренера.
//!
//! Основные функции:
//!   `detect_category(hand, board) -> Option<&CategoryEntry>`
//!   `estimate_equity(outs, street) -> u32`
//!   `classify_texture(board) -> BoardTexture`

pub mod draws;
pub mod equity;
pub mod features;
pub mod hand_rank;
pub mod lookup_tables;
pub mod texture;

pub use draws::{detect_category, read_draw, DrawReading};
pub use equity::{estimate_equity, pot_odds};
pub use hand_rank::{best_made_hand, describe_made_hand, possible_threats, MadeHand, Threat};
pub use lookup_tables::{CategoryEntry, DrawCategory, NO_DRAW_LABEL, OUTS_TABLE};
pub use texture::{classify_texture, texture_tip, texture_tip_for_name, BoardTexture};
