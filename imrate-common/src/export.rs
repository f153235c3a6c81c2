//! CSV export of the rating log
//!
//! Row per record, columns `Rater, Image, Overall_Rating, Shape_Rating,
//! Color_Rating, Label_Rating, Timestamp`. Export never mutates the log;
//! every invocation re-serializes the full accumulated log under a freshly
//! timestamped filename.

use chrono::{DateTime, Local};

use crate::rating::RatingRecord;
use crate::time;
use crate::{Error, Result};

/// A rendered export: derived filename plus CSV bytes
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Filename for an export taken at `timestamp`:
/// `ratings_<rater>_<YYYYMMDD_HHMMSS>.csv`
pub fn export_filename(rater: &str, timestamp: &DateTime<Local>) -> String {
    format!("ratings_{}_{}.csv", rater, time::file_timestamp(timestamp))
}

/// Serialize the full log, or None when there is nothing to export
pub fn export_csv(
    rater: &str,
    log: &[RatingRecord],
    timestamp: &DateTime<Local>,
) -> Result<Option<CsvExport>> {
    if log.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in log {
        writer.serialize(record)?;
    }
    let data = writer
        .into_inner()
        .map_err(|err| Error::Internal(err.to_string()))?;

    Ok(Some(CsvExport {
        filename: export_filename(rater, timestamp),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{AspectScores, Score};
    use chrono::TimeZone;

    fn fixed() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 1, 9, 5, 7).unwrap()
    }

    fn record(rater: &str, image: &str) -> RatingRecord {
        let scores = AspectScores {
            overall: Score::new(5).unwrap(),
            shape: Score::new(4).unwrap(),
            color: Score::new(3).unwrap(),
            label: Score::new(2).unwrap(),
        };
        RatingRecord::new(rater, image, scores, fixed())
    }

    #[test]
    fn test_empty_log_produces_no_artifact() {
        let export = export_csv("Alex", &[], &fixed()).unwrap();
        assert!(export.is_none());
    }

    #[test]
    fn test_export_filename_pattern() {
        assert_eq!(
            export_filename("Alex", &fixed()),
            "ratings_Alex_20250301_090507.csv"
        );
    }

    #[test]
    fn test_export_rows_and_headers() {
        let log = vec![record("Alex", "a.jpg"), record("Alex", "b.jpg")];
        let export = export_csv("Alex", &log, &fixed()).unwrap().unwrap();

        let text = String::from_utf8(export.data).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Rater,Image,Overall_Rating,Shape_Rating,Color_Rating,Label_Rating,Timestamp")
        );
        assert_eq!(
            lines.next(),
            Some("Alex,a.jpg,5,4,3,2,2025-03-01 09:05:07")
        );
        assert_eq!(
            lines.next(),
            Some("Alex,b.jpg,5,4,3,2,2025-03-01 09:05:07")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_quotes_free_text_rater() {
        let log = vec![record("Lee, Ann", "a.jpg")];
        let export = export_csv("Lee, Ann", &log, &fixed()).unwrap().unwrap();

        let text = String::from_utf8(export.data).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Lee, Ann\","));
    }

    #[test]
    fn test_export_leaves_log_reusable() {
        let log = vec![record("Alex", "a.jpg")];
        let first = export_csv("Alex", &log, &fixed()).unwrap().unwrap();
        let second = export_csv("Alex", &log, &fixed()).unwrap().unwrap();
        assert_eq!(first.data, second.data);
    }
}
