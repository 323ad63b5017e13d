use serde::{Deserialize, Serialize};

use crate::eval::lookup_tables::{DrawCategory, OUTS_TABLE, TEXTURE_TIPS};
use crate::eval::texture::BoardTexture;

use super::commands::{ensure_distinct, parse_board, parse_hand};
use super::dto::ClassificationDto;
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Таблица аутов (для справки во фронте).
    OutsTable,

    /// Все теги текстуры с советами.
    TextureTips,

    /// Классифицировать руку и борд без действия.
    Classify { hand: Vec<String>, board: Vec<String> },
}

/// Строка таблицы аутов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutsRowDto {
    pub category: DrawCategory,
    pub label: String,
    pub outs: u8,
}

/// Тег текстуры с советом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureTipDto {
    pub texture: BoardTexture,
    pub tip: String,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    OutsTable(Vec<OutsRowDto>),
    TextureTips(Vec<TextureTipDto>),
    Classification(ClassificationDto),
}

pub fn handle_query(query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::OutsTable => Ok(QueryResponse::OutsTable(
            OUTS_TABLE
                .iter()
                .map(|e| OutsRowDto {
                    category: e.category,
                    label: e.label.to_string(),
                    outs: e.outs,
                })
                .collect(),
        )),

        Query::TextureTips => Ok(QueryResponse::TextureTips(
            TEXTURE_TIPS
                .iter()
                .map(|(texture, tip)| TextureTipDto {
                    texture: *texture,
                    tip: tip.to_string(),
                })
                .collect(),
        )),

        Query::Classify { hand, board } => {
            let hand = parse_hand(&hand)?;
            let board = parse_board(&board)?;
            ensure_distinct(&hand, &board)?;
            Ok(QueryResponse::Classification(ClassificationDto::build(
                &hand, &board,
            )))
        }
    }
}
