//! Timestamp utilities
//!
//! All operator-visible timestamps use the local wall clock at second
//! precision, in the two fixed formats the export format requires.

use chrono::{DateTime, Local};

/// Get current local timestamp
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Format a timestamp for a CSV row: `YYYY-MM-DD HH:MM:SS`
pub fn row_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a timestamp for an export filename: `YYYYMMDD_HHMMSS`
pub fn file_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y%m%d_%H%M%S").to_string()
}
