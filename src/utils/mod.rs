//! Utility functions and helpers
//!
//! Loose value coercion for request payloads and query strings, and HTML escaping.

pub mod coerce;
pub mod html;

pub use coerce::{js_trim, number_from_str, value_to_number, value_to_string};
pub use html::escape_html;
