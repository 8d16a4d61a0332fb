// src/error.rs

use thiserror::Error;

use crate::models::DatasetFormat;
use crate::storage::StorageError;

/// Failures surfaced by the dataset store and its callers.
///
/// Reads never show up here directly: a failed or malformed read recovers to
/// a documented default and is only logged. `Read` exists for the format
/// switch, where an unreadable slot has to abort the whole sequence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not encode value for storage: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write to '{key}' failed: {source}")]
    Write {
        key: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("read of '{key}' failed: {source}")]
    Read {
        key: &'static str,
        #[source]
        source: StorageError,
    },

    /// The multi-step switch did not complete. Whether the switch took is
    /// decided by the persisted format setting alone.
    #[error("switch to the {target} format was not applied: {source}")]
    FormatSwitch {
        target: DatasetFormat,
        #[source]
        source: Box<StoreError>,
    },

    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub(crate) fn write(key: &'static str, source: StorageError) -> Self {
        StoreError::Write { key, source }
    }

    pub(crate) fn read(key: &'static str, source: StorageError) -> Self {
        StoreError::Read { key, source }
    }

    pub(crate) fn switch(target: DatasetFormat, source: StoreError) -> Self {
        StoreError::FormatSwitch {
            target,
            source: Box::new(source),
        }
    }
}
