//! Event Store - process-lifetime stat log
//!
//! The EventStore holds the append-only sequence of stat events in memory.
//! Nothing is persisted; dropping the store discards every event.

use parking_lot::RwLock;

use super::filter::StatFilter;
use crate::types::StatEvent;

/// Append-only, insertion-ordered stat log
///
/// Handlers run on a multi-threaded runtime, so append and iteration go
/// through a read/write lock.
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<Vec<StatEvent>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event at the end of the log
    pub fn append(&self, event: StatEvent) {
        self.events.write().push(event);
    }

    /// Events matching `filter`, in insertion order
    pub fn list(&self, filter: &StatFilter) -> Vec<StatEvent> {
        let events = self.events.read();
        if filter.is_empty() {
            return events.clone();
        }

        events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }

    /// Number of events recorded so far
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SetNumber, StatKind};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn event(player: &str, kind: StatKind, set_number: u32) -> StatEvent {
        let set_number = SetNumber::new(f64::from(set_number)).unwrap();
        StatEvent::record(player.to_string(), kind, set_number)
    }

    #[test]
    fn test_append_preserves_order() {
        let store = EventStore::new();
        assert!(store.is_empty());

        store.append(event("A", StatKind::Kill, 1));
        store.append(event("B", StatKind::Ace, 2));
        store.append(event("C", StatKind::Dig, 3));

        let all = store.list(&StatFilter::default());
        let players: Vec<&str> = all.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(players, vec!["A", "B", "C"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_filters_by_set() {
        let store = EventStore::new();
        for set in [1, 2, 2, 3] {
            store.append(event("A", StatKind::Block, set));
        }

        let filter = StatFilter {
            player: None,
            set_number: Some(2.0),
        };
        let found = store.list(&filter);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.set_number.get() == 2.0));
    }

    #[test]
    fn test_stores_are_isolated() {
        let a = EventStore::new();
        let b = EventStore::new();
        a.append(event("A", StatKind::Kill, 1));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_concurrent_appends() {
        let store = Arc::new(EventStore::new());
        let mut handles = vec![];

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    store.append(event(&format!("P{}", t), StatKind::Assist, 1));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let all = store.list(&StatFilter::default());
        assert_eq!(all.len(), 400);
        let ids: HashSet<&str> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 400);
    }
}
