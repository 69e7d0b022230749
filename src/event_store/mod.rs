//! Event Store Module
//!
//! In-memory stat log shared by the API layer:
//! - `EventStore`: append-only, insertion-ordered sequence of stat events
//! - `StatFilter`: player/set predicates applied when listing
//!
//! ```text
//! POST /api/stats ──► validate ──► StatEvent::record ──► append()
//! GET  /api/stats ──► StatFilter::from_query ──────────► list()
//! ```

mod filter;
mod store;

pub use filter::StatFilter;
pub use store::EventStore;
