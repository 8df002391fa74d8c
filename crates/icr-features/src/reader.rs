//! CSV feature readers.
//!
//! # CSV formats
//!
//! **Road network** — one row per segment.  A `geometry` column carries the
//! polyline as `lon lat` pairs separated by `;`; every other column becomes
//! an attribute.
//!
//! ```csv
//! state_code,route_numb,f_system,aadt_vn,geometry
//! 1,65,1,41000,-86.80 33.50;-86.79 33.52;-86.78 33.55
//! ```
//!
//! **Crash events** — one row per crash.  `lat` and `lon` columns carry the
//! position; every column (including those two) becomes an attribute.
//!
//! ```csv
//! state,tway_id,x_y_valid,a_inter,lat,lon
//! 1,I-65 NB,1,1,33.51,-86.795
//! ```
//!
//! Column-name matching is case-insensitive.  Cells parse as numeric when
//! they can, text otherwise, `Null` when empty.  Reading stays format-level
//! dumb on purpose: schema requirements (which attributes must exist) belong
//! to the filters.

use std::io::Read;
use std::path::Path;

use icr_core::GeoPoint;

use crate::attrs::{AttrMap, Value};
use crate::error::{FeatureError, FeatureResult};
use crate::feature::{Feature, RawGeometry};

/// Read road features (line geometry) from a CSV file.
pub fn read_road_features(path: &Path) -> FeatureResult<Vec<Feature>> {
    let file = std::fs::File::open(path)?;
    read_road_reader(file)
}

/// Like [`read_road_features`] but accepts any `Read` source.  Useful for
/// testing (pass a `std::io::Cursor`).
pub fn read_road_reader<R: Read>(reader: R) -> FeatureResult<Vec<Feature>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = lowered_headers(&mut csv_reader)?;

    let geom_col = headers.iter().position(|h| h == "geometry");

    let mut features = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let Some(geom_col) = geom_col else {
            return Err(FeatureError::WrongGeometry { row, expected: "line" });
        };
        let cell = record.get(geom_col).unwrap_or("");
        let coords = parse_line_geometry(cell, row)?;

        let attrs: AttrMap = headers
            .iter()
            .zip(record.iter())
            .filter(|(h, _)| h.as_str() != "geometry")
            .map(|(h, c)| (h.clone(), Value::parse(c)))
            .collect();

        features.push(Feature {
            geometry: RawGeometry::Line(coords),
            attrs,
        });
    }
    Ok(features)
}

/// Read crash features (point geometry) from a CSV file.
pub fn read_crash_features(path: &Path) -> FeatureResult<Vec<Feature>> {
    let file = std::fs::File::open(path)?;
    read_crash_reader(file)
}

/// Like [`read_crash_features`] but accepts any `Read` source.
pub fn read_crash_reader<R: Read>(reader: R) -> FeatureResult<Vec<Feature>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = lowered_headers(&mut csv_reader)?;

    let lat_col = headers.iter().position(|h| h == "lat" || h == "latitude");
    let lon_col = headers.iter().position(|h| h == "lon" || h == "longitude");

    let mut features = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let (Some(lat_col), Some(lon_col)) = (lat_col, lon_col) else {
            return Err(FeatureError::WrongGeometry { row, expected: "point" });
        };
        let lat = parse_coord(record.get(lat_col).unwrap_or(""), "latitude", row)?;
        let lon = parse_coord(record.get(lon_col).unwrap_or(""), "longitude", row)?;

        let attrs: AttrMap = headers
            .iter()
            .zip(record.iter())
            .map(|(h, c)| (h.clone(), Value::parse(c)))
            .collect();

        features.push(Feature {
            geometry: RawGeometry::Point(GeoPoint::new(lat, lon)),
            attrs,
        });
    }
    Ok(features)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lowered_headers<R: Read>(reader: &mut csv::Reader<R>) -> FeatureResult<Vec<String>> {
    Ok(reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect())
}

/// Parse `lon lat;lon lat;…` into coordinates.
fn parse_line_geometry(cell: &str, row: usize) -> FeatureResult<Vec<GeoPoint>> {
    let mut coords = Vec::new();
    for pair in cell.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let mut it = pair.split_whitespace();
        let (Some(lon), Some(lat)) = (it.next(), it.next()) else {
            return Err(parse_err(row, "geometry pair", pair));
        };
        let lon: f64 = lon.parse().map_err(|_| parse_err(row, "longitude", lon))?;
        let lat: f64 = lat.parse().map_err(|_| parse_err(row, "latitude", lat))?;
        coords.push(GeoPoint::new(lat, lon));
    }
    if coords.is_empty() {
        return Err(FeatureError::WrongGeometry { row, expected: "line" });
    }
    Ok(coords)
}

fn parse_coord(cell: &str, what: &'static str, row: usize) -> FeatureResult<f64> {
    cell.trim().parse().map_err(|_| parse_err(row, what, cell))
}

fn parse_err(row: usize, what: &'static str, value: &str) -> FeatureError {
    FeatureError::Parse {
        row,
        what,
        value: value.to_string(),
    }
}
