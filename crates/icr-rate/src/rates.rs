//! The three crash-rate formulas and the per-state output records.
//!
//! Given a point's crash count C and traffic volume V (AADT):
//!
//! ```text
//! Rate A = (C × 100 000 000) / (V × 365 × 1 × 0.10)
//! Rate B =  C / (V × 0.10)
//! Rate C =  C / (V / 0.10)
//! ```
//!
//! Rate A is the standard crashes-per-100-million-vehicle-miles form over
//! one year of exposure on a 0.10-mile section; B and C are simplified
//! per-volume variants emitted alongside it.
//!
//! V missing or zero leaves all three rates undefined: the producer emits
//! `None`, never a NaN/Inf and never an error.

use icr_assign::RoadPoint;
use icr_core::{PartitionKey, PlanePoint, PointId};

/// Rate A numerator scale: crashes per 100 million vehicle-miles.
pub const RATE_SCALE: f64 = 100_000_000.0;
/// Exposure period, days.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Exposure period, years.
pub const YEARS: f64 = 1.0;
/// Section length represented by one sampled point, miles.
pub const SECTION_LENGTH_MI: f64 = 0.10;

/// The three rates for one point; `None` throughout when volume is
/// missing or zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rates {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

/// Compute all three rates, guarding the undefined-volume case.
pub fn crash_rates(crash_count: u32, aadt: Option<f64>) -> Rates {
    let c = crash_count as f64;
    match aadt {
        Some(v) if v > 0.0 => Rates {
            a: Some((c * RATE_SCALE) / (v * DAYS_PER_YEAR * YEARS * SECTION_LENGTH_MI)),
            b: Some(c / (v * SECTION_LENGTH_MI)),
            c: Some(c / (v / SECTION_LENGTH_MI)),
        },
        _ => Rates { a: None, b: None, c: None },
    }
}

/// One output row: a road point with its counts and rates.
///
/// This is what survives the per-state merge; the transient join
/// bookkeeping (the segment id) is deliberately not carried over.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrashRateRecord {
    /// State-wide sequential id after the merge; route-local before it.
    pub point_id: PointId,
    pub state_code: u32,
    pub route_number: u32,
    pub pos: PlanePoint,
    pub offset: f64,
    pub aadt: Option<f64>,
    pub crash_count: u32,
    pub rate_a: Option<f64>,
    pub rate_b: Option<f64>,
    pub rate_c: Option<f64>,
}

/// Turn one route partition's counted points into rate records.
pub fn route_records(points: &[RoadPoint], key: PartitionKey) -> Vec<CrashRateRecord> {
    points
        .iter()
        .map(|p| {
            let rates = crash_rates(p.crash_count, p.aadt);
            CrashRateRecord {
                point_id: p.id,
                state_code: key.state_code,
                route_number: key.route_number,
                pos: p.pos,
                offset: p.offset,
                aadt: p.aadt,
                crash_count: p.crash_count,
                rate_a: rates.a,
                rate_b: rates.b,
                rate_c: rates.c,
            }
        })
        .collect()
}

/// Merge a state's per-route record sets into one collection.
///
/// Route sets must arrive in ascending route order (the orchestrator's
/// sorted route list guarantees it); points are renumbered sequentially
/// state-wide so ids are unique in the merged output.
pub fn merge_state_records(route_sets: Vec<Vec<CrashRateRecord>>) -> Vec<CrashRateRecord> {
    let total = route_sets.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    for set in route_sets {
        for mut record in set {
            record.point_id = PointId(merged.len() as u32);
            merged.push(record);
        }
    }
    merged
}
