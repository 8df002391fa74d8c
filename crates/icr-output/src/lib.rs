//! `icr-output` — writes each state's merged crash-rate records.
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`row`]    | `RatePointRow` — plain output row             |
//! | [`writer`] | `RateWriter` trait                            |
//! | [`csv`]    | `CsvRateWriter` — one CSV file per state      |
//! | [`error`]  | `OutputError`, `OutputResult<T>`              |
//!
//! Other backends (a database, a different file format) plug in behind
//! [`RateWriter`]; the orchestrator only ever sees the trait.

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvRateWriter;
pub use error::{OutputError, OutputResult};
pub use row::RatePointRow;
pub use writer::RateWriter;
