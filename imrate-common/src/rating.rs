//! Rating scores and records
//!
//! One submission covers four aesthetic aspects of the current image:
//! overall impression, shape, color, and label. Each aspect is scored on
//! the survey's 1-7 scale.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::time;
use crate::{Error, Result};

/// Lowest selectable score
pub const SCORE_MIN: u8 = 1;
/// Highest selectable score
pub const SCORE_MAX: u8 = 7;

/// One bounded rating value in [SCORE_MIN, SCORE_MAX]
///
/// The selector widgets only offer 1-7, so range-bounding here is the whole
/// validation story; a `Score` that exists is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score(u8);

impl Score {
    /// Construct a score, rejecting values outside the 1-7 scale
    pub fn new(value: u8) -> Result<Score> {
        if (SCORE_MIN..=SCORE_MAX).contains(&value) {
            Ok(Score(value))
        } else {
            Err(Error::InvalidInput(format!(
                "score {} out of range {}-{}",
                value, SCORE_MIN, SCORE_MAX
            )))
        }
    }

    /// The numeric value
    pub fn value(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Score::new(value).map_err(serde::de::Error::custom)
    }
}

/// The four aspect scores captured for one image
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AspectScores {
    pub overall: Score,
    pub shape: Score,
    pub color: Score,
    pub label: Score,
}

/// One submitted rating: who, which image, the four scores, and when
///
/// Records are append-only once created; the serde renames are the exact
/// CSV column headers of the export format.
#[derive(Debug, Clone, Serialize)]
pub struct RatingRecord {
    #[serde(rename = "Rater")]
    pub rater: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Overall_Rating")]
    pub overall: Score,
    #[serde(rename = "Shape_Rating")]
    pub shape: Score,
    #[serde(rename = "Color_Rating")]
    pub color: Score,
    #[serde(rename = "Label_Rating")]
    pub label: Score,
    #[serde(rename = "Timestamp", serialize_with = "serialize_row_timestamp")]
    pub timestamp: DateTime<Local>,
}

impl RatingRecord {
    /// Package a submission into a record
    pub fn new(
        rater: &str,
        image: &str,
        scores: AspectScores,
        timestamp: DateTime<Local>,
    ) -> RatingRecord {
        RatingRecord {
            rater: rater.to_string(),
            image: image.to_string(),
            overall: scores.overall,
            shape: scores.shape,
            color: scores.color,
            label: scores.label,
            timestamp,
        }
    }
}

fn serialize_row_timestamp<S>(
    timestamp: &DateTime<Local>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time::row_timestamp(timestamp))
}
