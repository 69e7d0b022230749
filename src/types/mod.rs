//! Data types for the volleyball stat log
//!
//! This module contains the stat event model and the derived totals view.

mod set_number;
mod stat_event;
mod totals;

pub use set_number::SetNumber;
pub use stat_event::{StatEvent, StatKind};
pub use totals::{totals_by_player, KindCounts, PlayerTotals};

/// Result type for top-level server plumbing
pub type StatsResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
