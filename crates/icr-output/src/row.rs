//! Plain data row written by output backends.

use icr_rate::CrashRateRecord;

/// One output row: a road point with its crash count and rates.
///
/// Undefined rates (`None`) serialize as empty fields, the backend-agnostic
/// representation of "flagged missing, not zero".
#[derive(Debug, Clone, PartialEq)]
pub struct RatePointRow {
    pub point_id: u32,
    pub state_code: u32,
    pub route_number: u32,
    pub x: f64,
    pub y: f64,
    /// Arc-length offset from the point's part start, native units.
    pub offset: f64,
    pub aadt: Option<f64>,
    pub crash_count: u32,
    pub rate_a: Option<f64>,
    pub rate_b: Option<f64>,
    pub rate_c: Option<f64>,
}

impl From<&CrashRateRecord> for RatePointRow {
    fn from(r: &CrashRateRecord) -> Self {
        Self {
            point_id: r.point_id.0,
            state_code: r.state_code,
            route_number: r.route_number,
            x: r.pos.x,
            y: r.pos.y,
            offset: r.offset,
            aadt: r.aadt,
            crash_count: r.crash_count,
            rate_a: r.rate_a,
            rate_b: r.rate_b,
            rate_c: r.rate_c,
        }
    }
}
