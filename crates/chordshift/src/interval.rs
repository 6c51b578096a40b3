//! Transpose direction and interval resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of a transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(alias = "increase", alias = "Aumentar", alias = "aumentar")]
    Increase,
    #[serde(alias = "decrease", alias = "Diminuir", alias = "diminuir")]
    Decrease,
}

impl Action {
    fn sign(self) -> i32 {
        match self {
            Action::Increase => 1,
            Action::Decrease => -1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Increase => f.write_str("increase"),
            Action::Decrease => f.write_str("decrease"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transpose action '{0}' (expected increase or decrease)")]
pub struct ActionParseError(pub String);

impl FromStr for Action {
    type Err = ActionParseError;

    /// Accepts `increase`/`decrease`, `aumentar`/`diminuir` and `up`/`down`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increase" | "aumentar" | "up" => Ok(Action::Increase),
            "decrease" | "diminuir" | "down" => Ok(Action::Decrease),
            _ => Err(ActionParseError(s.to_string())),
        }
    }
}

/// Signed semitone shift for an action and an interval in whole tones.
///
/// The interval is doubled and truncated toward zero: 1.5 gives 3, 1.4
/// gives 2. NaN resolves to 0 and huge values saturate.
pub fn resolve_semitone_shift(action: Action, interval: f64) -> i32 {
    let half_steps = (interval * 2.0) as i32;
    half_steps.saturating_mul(action.sign())
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RequestError {
    #[error("interval must be a finite number, got {0}")]
    NonFinite(f64),

    #[error("interval must not be negative, got {0}")]
    Negative(f64),
}

/// A validated transposition request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransposeRequest {
    pub action: Action,
    /// Interval in whole tones (may be fractional).
    pub interval: f64,
}

impl TransposeRequest {
    pub fn new(action: Action, interval: f64) -> Result<Self, RequestError> {
        if !interval.is_finite() {
            return Err(RequestError::NonFinite(interval));
        }
        if interval < 0.0 {
            return Err(RequestError::Negative(interval));
        }
        Ok(TransposeRequest { action, interval })
    }

    pub fn semitones(&self) -> i32 {
        resolve_semitone_shift(self.action, self.interval)
    }
}
