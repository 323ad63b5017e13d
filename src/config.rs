//! Конфигурация тренера: параметры раздачи сценариев и логирование.
//!
//! Таблица аутов, множители эквити и советы по текстуре НЕ настраиваются –
//! это статические данные в `eval::lookup_tables`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("битый JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Параметры дилера сценариев.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Минимальная длина борда (3 = флоп).
    pub min_board: usize,
    /// Максимальная длина борда (5 = ривер).
    pub max_board: usize,
    pub pot_min: u64,
    pub pot_max: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            min_board: 3,
            max_board: 5,
            pot_min: 50,
            pot_max: 549,
        }
    }
}

/// Настройки логирования.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень: "error" | "warn" | "info" | "debug" | "trace".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        Level::from_str(&self.level).ok()
    }
}

/// Корневой конфиг.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CoachConfig {
    pub scenario: ScenarioConfig,
    pub logging: LoggingConfig,
}

impl CoachConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: CoachConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scenario;
        if !(3..=5).contains(&s.min_board) || !(3..=5).contains(&s.max_board) {
            return Err(ConfigError::Invalid(format!(
                "длина борда должна быть в 3..=5, получено {}..={}",
                s.min_board, s.max_board
            )));
        }
        if s.min_board > s.max_board {
            return Err(ConfigError::Invalid(format!(
                "min_board {} > max_board {}",
                s.min_board, s.max_board
            )));
        }
        if s.pot_min > s.pot_max {
            return Err(ConfigError::Invalid(format!(
                "pot_min {} > pot_max {}",
                s.pot_min, s.pot_max
            )));
        }
        if self.logging.level().is_none() {
            return Err(ConfigError::Invalid(format!(
                "неизвестный уровень логов `{}`",
                self.logging.level
            )));
        }
        Ok(())
    }
}
