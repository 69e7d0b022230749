//! Per-player totals derived from a list of events

use std::collections::HashMap;

use super::{StatEvent, StatKind};

/// Count of events for each of the six kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts([u64; 6]);

impl KindCounts {
    pub fn get(&self, kind: StatKind) -> u64 {
        self.0[kind.index()]
    }

    pub fn increment(&mut self, kind: StatKind) {
        self.0[kind.index()] += 1;
    }

    /// Counts paired with their kind, in display order
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u64)> + '_ {
        StatKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

/// One row of the totals table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotals {
    pub player: String,
    pub totals: KindCounts,
}

/// Group events by exact player name, rows ordered by first appearance.
pub fn totals_by_player(events: &[StatEvent]) -> Vec<PlayerTotals> {
    let mut rows: Vec<PlayerTotals> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events {
        let row = *index.entry(event.player.as_str()).or_insert_with(|| {
            rows.push(PlayerTotals {
                player: event.player.clone(),
                totals: KindCounts::default(),
            });
            rows.len() - 1
        });
        rows[row].totals.increment(event.kind);
    }

    rows
}
