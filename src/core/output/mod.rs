//! Report writers.
//!
//! A finished [`ChatAnalysis`](crate::analysis::ChatAnalysis) can be saved in
//! two shapes:
//! - [`write_json`] / [`to_json`] - the full aggregate, restorable with
//!   [`read_json`] / [`from_json`] - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - one summary row per participant - requires
//!   `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatpulse::Result<()> {
//! use chatpulse::config::OutputConfig;
//! use chatpulse::core::output::{from_json, to_csv, to_json};
//!
//! let analysis = chatpulse::run_pipeline("[01.01.23, 09:00] Alice: merhaba", None)?;
//! let config = OutputConfig::new();
//!
//! let json = to_json(&analysis, &config)?;
//! assert_eq!(from_json(&json)?, analysis);
//!
//! let csv = to_csv(&analysis, &config)?;
//! assert!(csv.starts_with("Participant;"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{from_json, read_json, to_json, write_json};
