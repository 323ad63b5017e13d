use serde::{Deserialize, Serialize};

use crate::domain::card::CardParseError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (число карт, дубли, битый тег).
    BadRequest(String),

    /// Карта не разобралась.
    InvalidCard(CardParseError),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<CardParseError> for ApiError {
    fn from(err: CardParseError) -> Self {
        ApiError::InvalidCard(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::InvalidCard(err) => write!(f, "invalid card: {err}"),
            ApiError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
