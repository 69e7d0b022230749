//! API module for HTTP endpoints
//!
//! This module provides the REST API, the sign-in gate, and the browser UI
//! for the volleyball stat log.

pub mod auth;
pub mod http;
pub mod rest;
pub mod state;
pub mod ui;

pub use http::create_router;
pub use state::AppState;
