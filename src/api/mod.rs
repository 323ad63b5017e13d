//! Внешний API тренера.
//!
//! Здесь описываются:
//! - команды (commands.rs) – разбор действия, квиз по текстуре, новая раздача;
//! - запросы (queries.rs) – только чтение: таблица аутов, советы, классификация;
//! - DTO (dto.rs) – удобные структуры для фронта;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
