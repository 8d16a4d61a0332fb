// src/models.rs

use chrono::{DateTime, NaiveDate};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::{KEY_CUSTOM, KEY_JUZ, KEY_SURAH, NOT_REVIEWED, ORANGE_DEFAULT, RED_DEFAULT};

// --- Data Models ---

/// One entry of a review list, in the same wire shape the app has always
/// persisted: `{"id","name","review","date","transliteration","total_verses","type"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in display order; always contiguous `1..=N` within a collection.
    pub id: i64,
    /// Arabic name.
    pub name: String,
    /// Whether this entry is selected for active review.
    #[serde(rename = "review")]
    pub in_tracker: bool,
    pub date: ReviewDate,
    pub transliteration: Option<String>,
    /// Surah format only.
    pub total_verses: Option<u32>,
    /// Revelation place, Surah format only.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Record {
    /// Name shown in the UI: Arabic when `primary_language`, otherwise the
    /// transliteration (custom entries carry their name in both fields).
    pub fn display_name(&self, primary_language: bool) -> &str {
        if primary_language {
            &self.name
        } else {
            self.transliteration.as_deref().unwrap_or(&self.name)
        }
    }
}

/// The in-tracker subset of a collection, in display order.
pub fn tracked(records: &[Record]) -> Vec<&Record> {
    let mut selected: Vec<&Record> = records.iter().filter(|r| r.in_tracker).collect();
    selected.sort_by_key(|r| r.id);
    selected
}

/// When an entry was last reviewed. Stored as `"Not reviewed"` or a
/// `YYYY-MM-DD` string; full timestamps written by older app versions are
/// accepted on read and truncated to their calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDate {
    Never,
    On(NaiveDate),
}

impl ReviewDate {
    pub fn is_never(&self) -> bool {
        matches!(self, ReviewDate::Never)
    }

    /// Date as the tracker list renders it, e.g. `Jan 02, 2024`.
    pub fn format_display(&self) -> String {
        match self {
            ReviewDate::Never => NOT_REVIEWED.to_string(),
            ReviewDate::On(d) => d.format("%b %d, %Y").to_string(),
        }
    }
}

impl Serialize for ReviewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ReviewDate::Never => serializer.serialize_str(NOT_REVIEWED),
            ReviewDate::On(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ReviewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == NOT_REVIEWED {
            return Ok(ReviewDate::Never);
        }
        if let Ok(d) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(ReviewDate::On(d));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(ReviewDate::On(dt.date_naive()));
        }
        Err(D::Error::custom(format!("unrecognized review date: {raw}")))
    }
}

/// Which of the three list schemas is in use. Persisted as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Surah = 0,
    Juz = 1,
    Custom = 2,
}

impl DatasetFormat {
    pub fn as_index(self) -> i64 {
        self as i64
    }

    /// Unknown indices fall back to Surah, the first-launch default.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => DatasetFormat::Juz,
            2 => DatasetFormat::Custom,
            _ => DatasetFormat::Surah,
        }
    }

    /// The per-format slot that survives while another format is active.
    pub fn shadow_key(self) -> &'static str {
        match self {
            DatasetFormat::Surah => KEY_SURAH,
            DatasetFormat::Juz => KEY_JUZ,
            DatasetFormat::Custom => KEY_CUSTOM,
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetFormat::Surah => "Surah",
            DatasetFormat::Juz => "Juz",
            DatasetFormat::Custom => "Custom",
        };
        f.write_str(name)
    }
}

/// Staleness thresholds in days, wire shape `{"orange":7,"red":14}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub orange: u32,
    pub red: u32,
}

impl Thresholds {
    /// Orange must trip before red does.
    pub fn is_ordered(&self) -> bool {
        self.orange < self.red
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            orange: ORANGE_DEFAULT,
            red: RED_DEFAULT,
        }
    }
}
