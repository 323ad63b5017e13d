use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Действие, которое выбрал ученик.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    Bet,
    Call,
    Raise,
}

impl Action {
    /// Bet/Raise – агрессивные действия.
    pub const fn is_aggressive(self) -> bool {
        matches!(self, Action::Bet | Action::Raise)
    }

    /// Call/Check – пассивные действия.
    pub const fn is_passive(self) -> bool {
        matches!(self, Action::Call | Action::Check)
    }

    /// Кнопки, которые показывает стол.
    /// Без ставки к коллу колла нет; bet фронт показывает как raise.
    pub fn available(to_call: Chips) -> &'static [Action] {
        if to_call.is_zero() {
            &[Action::Fold, Action::Check, Action::Raise]
        } else {
            &[Action::Fold, Action::Check, Action::Call, Action::Raise]
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Bet => "Bet",
            Action::Call => "Call",
            Action::Raise => "Raise",
        };
        f.write_str(s)
    }
}

/// Разбор без учёта регистра: "fold", "Raise", "CALL".
impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(Action::Fold),
            "check" => Ok(Action::Check),
            "bet" => Ok(Action::Bet),
            "call" => Ok(Action::Call),
            "raise" => Ok(Action::Raise),
            other => Err(format!("Invalid action: {other}")),
        }
    }
}
