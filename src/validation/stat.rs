//! Create-payload validation for stat events

use serde_json::Value;

use crate::types::{SetNumber, StatEvent, StatKind};
use crate::utils::{js_trim, value_to_number, value_to_string};

/// Reasons a create request is rejected, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    PlayerRequired,
    InvalidKind,
    InvalidSetNumber,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::PlayerRequired => write!(f, "Player is required"),
            ValidationError::InvalidKind => write!(f, "Invalid kind"),
            ValidationError::InvalidSetNumber => {
                write!(f, "setNumber must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated create request
#[derive(Debug, Clone, PartialEq)]
pub struct NewStat {
    pub player: String,
    pub kind: StatKind,
    pub set_number: SetNumber,
}

impl NewStat {
    /// Validate a parsed request body.
    ///
    /// Any JSON document is accepted as input; fields that are absent (or a
    /// body that is not an object) fail the same checks as empty values.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let player = js_trim(&value_to_string(body.get("player"))).to_string();
        if player.is_empty() {
            return Err(ValidationError::PlayerRequired);
        }

        let kind = StatKind::parse(&value_to_string(body.get("kind")))
            .ok_or(ValidationError::InvalidKind)?;

        let set_number = SetNumber::new(value_to_number(body.get("setNumber")))
            .ok_or(ValidationError::InvalidSetNumber)?;

        Ok(Self {
            player,
            kind,
            set_number,
        })
    }

    /// Stamp the request with a fresh id and the current time
    pub fn into_event(self) -> StatEvent {
        StatEvent::record(self.player, self.kind, self.set_number)
    }
}
