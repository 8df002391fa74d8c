//! Unit tests for icr-output.

#[cfg(test)]
mod helpers {
    use crate::RatePointRow;

    pub fn row(point_id: u32, crash_count: u32, rate_b: Option<f64>) -> RatePointRow {
        RatePointRow {
            point_id,
            state_code: 1,
            route_number: 65,
            x: 100.0,
            y: 200.0,
            offset: point_id as f64 * 160.934,
            aadt: rate_b.map(|_| 1000.0),
            crash_count,
            rate_a: rate_b.map(|b| b * 10_000_000.0 / 365.0),
            rate_b,
            rate_c: rate_b.map(|b| b / 100.0),
        }
    }
}

#[cfg(test)]
mod csv_writer {
    use crate::{CsvRateWriter, RateWriter};

    #[test]
    fn one_file_per_state_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvRateWriter::new(dir.path()).unwrap();

        writer.write_state(1, &[super::helpers::row(0, 5, Some(0.05))]).unwrap();
        writer.write_state(8, &[super::helpers::row(0, 0, Some(0.0))]).unwrap();
        writer.finish().unwrap();

        assert_eq!(writer.written_files().len(), 2);
        let s1 = std::fs::read_to_string(dir.path().join("crash_rates_1.csv")).unwrap();
        let mut lines = s1.lines();
        assert!(lines.next().unwrap().starts_with("point_id,state_code,route_numb"));
        let data = lines.next().unwrap();
        assert!(data.starts_with("0,1,65,"));
        assert!(data.contains(",5,"));
        assert!(dir.path().join("crash_rates_8.csv").exists());
    }

    #[test]
    fn undefined_rates_serialize_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvRateWriter::new(dir.path()).unwrap();
        writer.write_state(1, &[super::helpers::row(0, 3, None)]).unwrap();

        let s = std::fs::read_to_string(dir.path().join("crash_rates_1.csv")).unwrap();
        let data = s.lines().nth(1).unwrap();
        // aadt_vn, crash_rate_a, crash_rate_b, crash_rate_c all empty; the
        // crash count itself is still present.
        assert!(data.ends_with(",3,,,"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvRateWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut writer = CsvRateWriter::new(&nested).unwrap();
        writer.write_state(1, &[]).unwrap();
        assert!(nested.join("crash_rates_1.csv").exists());
    }
}

#[cfg(test)]
mod rows {
    use icr_core::{PlanePoint, PointId};
    use icr_rate::CrashRateRecord;

    use crate::RatePointRow;

    #[test]
    fn from_record() {
        let record = CrashRateRecord {
            point_id: PointId(3),
            state_code: 1,
            route_number: 65,
            pos: PlanePoint::new(10.0, 20.0),
            offset: 300.0,
            aadt: None,
            crash_count: 2,
            rate_a: None,
            rate_b: None,
            rate_c: None,
        };
        let row = RatePointRow::from(&record);
        assert_eq!(row.point_id, 3);
        assert_eq!(row.crash_count, 2);
        assert_eq!(row.aadt, None);
        assert_eq!(row.rate_b, None);
    }
}
