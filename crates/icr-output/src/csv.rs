//! CSV output backend.
//!
//! One file per state in the configured directory, named
//! `crash_rates_{state}.csv`, each with the full header row.  Undefined
//! rate and AADT fields are written empty.

use std::path::PathBuf;

use crate::writer::RateWriter;
use crate::{OutputResult, RatePointRow};

const HEADER: [&str; 11] = [
    "point_id",
    "state_code",
    "route_numb",
    "x",
    "y",
    "offset",
    "aadt_vn",
    "crash_count",
    "crash_rate_a",
    "crash_rate_b",
    "crash_rate_c",
];

/// Writes each state's merged records to its own CSV file.
pub struct CsvRateWriter {
    dir: PathBuf,
    /// Files written so far, for callers that want to report them.
    written: Vec<PathBuf>,
    finished: bool,
}

impl CsvRateWriter {
    /// Create a writer targeting `dir`.  The directory is created if absent;
    /// per-state files are created lazily as states complete.
    pub fn new(dir: impl Into<PathBuf>) -> OutputResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
            finished: false,
        })
    }

    /// Paths of the files written so far.
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }

    fn state_path(&self, state_code: u32) -> PathBuf {
        self.dir.join(format!("crash_rates_{state_code}.csv"))
    }
}

impl RateWriter for CsvRateWriter {
    fn write_state(&mut self, state_code: u32, rows: &[RatePointRow]) -> OutputResult<()> {
        let path = self.state_path(state_code);
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(HEADER)?;

        for row in rows {
            writer.write_record(&[
                row.point_id.to_string(),
                row.state_code.to_string(),
                row.route_number.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.offset.to_string(),
                opt_field(row.aadt),
                row.crash_count.to_string(),
                opt_field(row.rate_a),
                opt_field(row.rate_b),
                opt_field(row.rate_c),
            ])?;
        }
        writer.flush()?;
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        // Each state's file is flushed as it is written; nothing held open.
        Ok(())
    }
}

fn opt_field(v: Option<f64>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
