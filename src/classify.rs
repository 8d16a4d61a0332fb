// src/classify.rs

use chrono::{Local, NaiveDate};

use crate::models::{ReviewDate, Thresholds};

/// How overdue an entry's review is. The tracker colors each list item by
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Never reviewed.
    Neutral,
    /// Reviewed within the orange threshold.
    Good,
    /// Orange threshold reached, red not yet.
    Warning,
    /// Red threshold reached.
    Stale,
}

/// Classify a last-reviewed date against the thresholds.
///
/// Comparison is by calendar day only; the time of day an entry was marked
/// never shifts its bucket. An entry reviewed exactly `orange` days ago is
/// already `Warning`, exactly `red` days ago already `Stale`.
pub fn classify(date: ReviewDate, thresholds: Thresholds, today: NaiveDate) -> Staleness {
    let reviewed = match date {
        ReviewDate::Never => return Staleness::Neutral,
        ReviewDate::On(d) => d,
    };
    let days_since = (today - reviewed).num_days();
    // red checked first, so an unordered threshold pair still yields a
    // defined bucket for every input
    if days_since >= i64::from(thresholds.red) {
        Staleness::Stale
    } else if days_since >= i64::from(thresholds.orange) {
        Staleness::Warning
    } else {
        Staleness::Good
    }
}

/// [`classify`] against the device's current calendar date.
pub fn classify_today(date: ReviewDate, thresholds: Thresholds) -> Staleness {
    classify(date, thresholds, Local::now().date_naive())
}
