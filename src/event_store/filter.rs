//! List filters for the event store

use crate::types::StatEvent;
use crate::utils::number_from_str;

/// Predicate over stored events; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatFilter {
    /// Case-insensitive exact player name
    pub player: Option<String>,
    /// Numeric set number; a fractional value matches no event
    pub set_number: Option<f64>,
}

impl StatFilter {
    /// Build a filter from raw `player` and `set` query values.
    ///
    /// An empty `player` applies no player filter. An empty or non-numeric
    /// `set` is ignored rather than rejected.
    pub fn from_query(player: Option<&str>, set: Option<&str>) -> Self {
        let player = player
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase);

        let set_number = set
            .filter(|s| !s.is_empty())
            .map(number_from_str)
            .filter(|n| !n.is_nan());

        Self { player, set_number }
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none() && self.set_number.is_none()
    }

    pub fn matches(&self, event: &StatEvent) -> bool {
        if let Some(ref player) = self.player {
            if event.player.to_lowercase() != player.to_lowercase() {
                return false;
            }
        }

        if let Some(set_number) = self.set_number {
            if event.set_number.get() != set_number {
                return false;
            }
        }

        true
    }
}
