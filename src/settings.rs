// src/settings.rs

use log::warn;

use crate::constants::{KEY_DAYS, KEY_FORMAT, KEY_LANG};
use crate::error::StoreError;
use crate::models::{DatasetFormat, Thresholds};
use crate::storage::Storage;

// Every read here is fail-soft: a missing, unreadable or malformed value
// falls back to the hard-coded default so the UI never blocks on settings.

/// Staleness thresholds, defaulting to 7/14 days.
pub fn thresholds<S: Storage>(storage: &S) -> Thresholds {
    match storage.get(KEY_DAYS) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Malformed '{KEY_DAYS}' value, using defaults: {e}");
            Thresholds::default()
        }),
        Ok(None) => Thresholds::default(),
        Err(e) => {
            warn!("Could not read '{KEY_DAYS}', using defaults: {e}");
            Thresholds::default()
        }
    }
}

pub fn set_thresholds<S: Storage>(
    storage: &mut S,
    thresholds: Thresholds,
) -> Result<(), StoreError> {
    if !thresholds.is_ordered() {
        return Err(StoreError::Validation(format!(
            "orange threshold ({}) must be below red ({})",
            thresholds.orange, thresholds.red
        )));
    }
    let json = serde_json::to_string(&thresholds)?;
    storage
        .set(KEY_DAYS, &json)
        .map_err(|e| StoreError::write(KEY_DAYS, e))
}

/// Whether names render in the primary language (Arabic). Defaults to true.
pub fn display_primary<S: Storage>(storage: &S) -> bool {
    match storage.get(KEY_LANG) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Malformed '{KEY_LANG}' value, using default: {e}");
            true
        }),
        Ok(None) => true,
        Err(e) => {
            warn!("Could not read '{KEY_LANG}', using default: {e}");
            true
        }
    }
}

pub fn set_display_primary<S: Storage>(storage: &mut S, primary: bool) -> Result<(), StoreError> {
    let json = serde_json::to_string(&primary)?;
    storage
        .set(KEY_LANG, &json)
        .map_err(|e| StoreError::write(KEY_LANG, e))
}

/// The selected format. Defaults to Surah on first launch or a bad read.
pub fn active_format<S: Storage>(storage: &S) -> DatasetFormat {
    match storage.get(KEY_FORMAT) {
        Ok(Some(raw)) => match raw.trim().parse::<i64>() {
            Ok(index) => DatasetFormat::from_index(index),
            Err(e) => {
                warn!("Malformed '{KEY_FORMAT}' value, using default: {e}");
                DatasetFormat::Surah
            }
        },
        Ok(None) => DatasetFormat::Surah,
        Err(e) => {
            warn!("Could not read '{KEY_FORMAT}', using default: {e}");
            DatasetFormat::Surah
        }
    }
}

// Only the dataset store's switch sequence may move this, so the declared
// format and the mirrored collection cannot drift apart.
pub(crate) fn set_active_format<S: Storage>(
    storage: &mut S,
    format: DatasetFormat,
) -> Result<(), StoreError> {
    storage
        .set(KEY_FORMAT, &format.as_index().to_string())
        .map_err(|e| StoreError::write(KEY_FORMAT, e))
}
