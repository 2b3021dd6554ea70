//! Post-parse helpers.
//!
//! This module contains:
//! - [`filter`] - Restricting messages to a date window
//! - [`output`] - Report writers (CSV summary, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatpulse::core::{FilterConfig, apply_filters, to_csv, to_json, write_json};
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, apply_filters};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{from_json, read_json, to_json, write_json};
