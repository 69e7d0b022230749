//! Input validation for stat events
//!
//! This module turns loosely-typed create payloads into validated records.

mod stat;

pub use stat::{NewStat, ValidationError};
