//! Common types shared by the estimator, configuration and CLI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a wait-time report
pub type ReportId = Uuid;

/// Identifier of the venue a report concerns
pub type VenueId = String;

/// Ordered line-length buckets, shortest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineCategory {
    #[serde(rename = "No Line", alias = "no_line")]
    NoLine,
    #[serde(rename = "Short Line", alias = "short_line")]
    Short,
    #[serde(rename = "Medium Line", alias = "medium_line")]
    Medium,
    #[serde(rename = "Long Line", alias = "long_line")]
    Long,
    #[serde(rename = "Very Long Line", alias = "very_long_line")]
    VeryLong,
}

impl LineCategory {
    /// All categories in ascending order of severity
    pub const ALL: [LineCategory; 5] = [
        LineCategory::NoLine,
        LineCategory::Short,
        LineCategory::Medium,
        LineCategory::Long,
        LineCategory::VeryLong,
    ];

    /// Human readable label shown next to the estimate
    pub fn label(&self) -> &'static str {
        match self {
            LineCategory::NoLine => "No Line",
            LineCategory::Short => "Short Line",
            LineCategory::Medium => "Medium Line",
            LineCategory::Long => "Long Line",
            LineCategory::VeryLong => "Very Long Line",
        }
    }
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a submitter observed: an explicit minute count or only a bucket
///
/// `{"minutes": 10}` and `{"category": "Short Line"}` both parse, and a
/// minutes reading wins when both fields are present. A `minutes` field that
/// is not an integer in `i32` range, or a record with neither usable field,
/// becomes `Malformed` so the estimator can exclude that one report instead
/// of the whole snapshot failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LineReading {
    Minutes {
        minutes: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<LineCategory>,
    },
    Category {
        category: LineCategory,
    },
    Malformed {
        minutes: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<LineCategory>,
    },
}

impl LineReading {
    /// The bucket the submitter picked, if any
    pub fn category(&self) -> Option<LineCategory> {
        match self {
            LineReading::Minutes { category, .. } => *category,
            LineReading::Category { category } => Some(*category),
            LineReading::Malformed { category, .. } => *category,
        }
    }
}

/// Reading fields exactly as the data source sent them
#[derive(Deserialize)]
struct RawReading {
    #[serde(default)]
    minutes: Option<serde_json::Value>,
    #[serde(default)]
    category: Option<serde_json::Value>,
}

impl From<RawReading> for LineReading {
    fn from(raw: RawReading) -> Self {
        // An unknown label is treated like a missing one
        let category: Option<LineCategory> = raw
            .category
            .and_then(|value| serde_json::from_value(value).ok());

        match raw.minutes {
            None | Some(serde_json::Value::Null) => match category {
                Some(category) => LineReading::Category { category },
                None => LineReading::Malformed {
                    minutes: serde_json::Value::Null,
                    category: None,
                },
            },
            Some(value) => match value.as_i64().and_then(|m| i32::try_from(m).ok()) {
                Some(minutes) => LineReading::Minutes { minutes, category },
                None => LineReading::Malformed {
                    minutes: value,
                    category,
                },
            },
        }
    }
}

impl<'de> Deserialize<'de> for LineReading {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawReading::deserialize(deserializer).map(LineReading::from)
    }
}

/// A single user-submitted wait-line observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub venue_id: VenueId,
    #[serde(flatten)]
    pub reading: LineReading,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_reliability: Option<f64>,
}

/// Aggregated wait estimate for one venue at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub minutes: u32,
    pub category: LineCategory,
}

impl EstimateResult {
    /// Result reported when no report carries any weight
    pub fn zero() -> Self {
        Self {
            minutes: 0,
            category: LineCategory::NoLine,
        }
    }
}

impl Default for EstimateResult {
    fn default() -> Self {
        Self::zero()
    }
}
