//! `icr-rate` — crash aggregation and the three crash-rate formulas.
//!
//! Pure arithmetic over the partition entities: filter assignments by the
//! distance threshold, write per-point crash counts, derive the rates, merge
//! a state's routes into its output records.  No I/O, no errors — undefined
//! rates are values (`None`), not failures.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`aggregate`] | threshold filter + per-point crash counts             |
//! | [`rates`]     | rate formulas, `CrashRateRecord`, per-state merge     |

pub mod aggregate;
pub mod rates;


pub use aggregate::apply_crash_counts;
pub use rates::{CrashRateRecord, Rates, crash_rates, merge_state_records, route_records};
