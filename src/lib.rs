//! Volleyball Stats Demo Server
//!
//! An in-memory log of volleyball stat events (kills, blocks, aces, digs,
//! assists, errors) behind a small REST API, with a browser form and a
//! totals-by-player table.
//!
//! # Modules
//!
//! - `types`: Core data structures (StatEvent, StatKind, totals view)
//! - `event_store`: Append-only in-memory event log with list filters
//! - `validation`: Create-payload validation
//! - `api`: Axum router, REST handlers, sign-in gate, and UI pages
//! - `config`: Environment-driven server configuration
//! - `utils`: Value coercion and HTML escaping helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use volley_stats::{create_router, AppState, EventStore, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> volley_stats::StatsResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let state = AppState::from_config(Arc::new(EventStore::new()), &config)?;
//!     let listener = config.bind().await?;
//!     axum::serve(listener, create_router(Arc::new(state))).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use event_store::{EventStore, StatFilter};
pub use types::{
    totals_by_player, KindCounts, PlayerTotals, SetNumber, StatEvent, StatKind, StatsResult,
};
pub use validation::{NewStat, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
