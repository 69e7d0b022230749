//! Stat event and kind types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SetNumber;

/// Category of a recorded play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Kill,
    Block,
    Ace,
    Dig,
    Assist,
    Error,
}

impl StatKind {
    /// All kinds in display order
    pub const ALL: [StatKind; 6] = [
        StatKind::Kill,
        StatKind::Block,
        StatKind::Ace,
        StatKind::Dig,
        StatKind::Assist,
        StatKind::Error,
    ];

    /// Parse the wire literal. Matching is exact: "Kill" or " kill" are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kill" => Some(StatKind::Kill),
            "block" => Some(StatKind::Block),
            "ace" => Some(StatKind::Ace),
            "dig" => Some(StatKind::Dig),
            "assist" => Some(StatKind::Assist),
            "error" => Some(StatKind::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Kill => "kill",
            StatKind::Block => "block",
            StatKind::Ace => "ace",
            StatKind::Dig => "dig",
            StatKind::Assist => "assist",
            StatKind::Error => "error",
        }
    }

    /// Position in [`StatKind::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded play action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEvent {
    pub id: String,
    pub player: String,
    pub kind: StatKind,
    #[serde(rename = "setNumber")]
    pub set_number: SetNumber,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl StatEvent {
    /// Create an event with a fresh id and the current time
    pub fn record(player: String, kind: StatKind, set_number: SetNumber) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player,
            kind,
            set_number,
            timestamp: Utc::now(),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_parse_is_exact() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(StatKind::parse("spike"), None);
        assert_eq!(StatKind::parse("Kill"), None);
        assert_eq!(StatKind::parse(""), None);
    }

    #[test]
    fn test_kind_index_matches_all_order() {
        for (i, kind) in StatKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_event_json_shape() {
        let event = StatEvent {
            id: "abc".to_string(),
            player: "Sam".to_string(),
            kind: StatKind::Dig,
            set_number: SetNumber::new(1.0).unwrap(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "player": "Sam",
                "kind": "dig",
                "setNumber": 1,
                "timestamp": "2024-05-01T12:00:00.000Z"
            })
        );

        let back: StatEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_record_assigns_distinct_ids() {
        let set = SetNumber::new(1.0).unwrap();
        let a = StatEvent::record("A".to_string(), StatKind::Ace, set);
        let b = StatEvent::record("A".to_string(), StatKind::Ace, set);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
