// src/store.rs

use log::{debug, info, warn};

use crate::catalog;
use crate::constants::{KEY_CURRENT, KEY_CUSTOM};
use crate::error::StoreError;
use crate::models::{DatasetFormat, Record, Thresholds};
use crate::settings;
use crate::storage::Storage;

/// Single owner of every persisted slot: the three per-format shadow
/// collections, the mirror the UI reads, and the settings. The mirror is
/// always derivable from (active format, shadows); [`switch_format`] is the
/// only operation that re-pairs them.
///
/// [`switch_format`]: DatasetStore::switch_format
pub struct DatasetStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DatasetStore<S> {
    pub fn new(storage: S) -> Self {
        DatasetStore { storage }
    }

    /// The raw backend, mainly for embedding hosts that share it.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// The collection the UI renders. Fail-soft: a missing slot seeds the
    /// active format's defaults, a failed or malformed read yields an empty
    /// list. Callers never see an error.
    pub fn load_active(&mut self) -> Vec<Record> {
        match self.storage.get(KEY_CURRENT) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Malformed '{KEY_CURRENT}' contents: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                let format = self.active_format();
                info!("No active collection found, seeding {format} defaults");
                match self.reset_active(format) {
                    Ok(records) => records,
                    Err(e) => {
                        // the seed itself is still usable in memory
                        warn!("Could not persist the seeded {format} collection: {e}");
                        catalog::for_format(format)
                    }
                }
            }
            Err(e) => {
                warn!("Could not read '{KEY_CURRENT}': {e}");
                Vec::new()
            }
        }
    }

    /// Persist `records` as the live collection: the mirror and the active
    /// format's shadow. Both writes are attempted even when the first fails;
    /// there is no rollback, the first failure is reported.
    pub fn save_active(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        let shadow = self.active_format().shadow_key();
        let mirror = self.storage.set(KEY_CURRENT, &json);
        let backing = self.storage.set(shadow, &json);
        mirror.map_err(|e| StoreError::write(KEY_CURRENT, e))?;
        backing.map_err(|e| StoreError::write(shadow, e))?;
        debug!("Saved {} records to '{KEY_CURRENT}' and '{shadow}'", records.len());
        Ok(())
    }

    /// Select another format:
    ///
    /// 1. note the old format,
    /// 2. read the live collection,
    /// 3. flush it into the old format's shadow so edits survive,
    /// 4. persist the new format selection; the switch takes here or not
    ///    at all,
    /// 5. mirror the new format's shadow, seeding it on first use.
    ///
    /// On an error the persisted format setting alone decides whether the
    /// switch happened; callers retry or surface the failure.
    pub fn switch_format(&mut self, new_format: DatasetFormat) -> Result<(), StoreError> {
        let old_format = settings::active_format(&self.storage);
        info!("Switching active format: {old_format} -> {new_format}");

        let live = self
            .storage
            .get(KEY_CURRENT)
            .map_err(|e| StoreError::switch(new_format, StoreError::read(KEY_CURRENT, e)))?;
        if let Some(raw) = live {
            let key = old_format.shadow_key();
            self.storage
                .set(key, &raw)
                .map_err(|e| StoreError::switch(new_format, StoreError::write(key, e)))?;
        }

        settings::set_active_format(&mut self.storage, new_format)
            .map_err(|e| StoreError::switch(new_format, e))?;

        let shadow_key = new_format.shadow_key();
        let shadow = self
            .storage
            .get(shadow_key)
            .map_err(|e| StoreError::switch(new_format, StoreError::read(shadow_key, e)))?;
        match shadow {
            Some(raw) => self
                .storage
                .set(KEY_CURRENT, &raw)
                .map_err(|e| StoreError::switch(new_format, StoreError::write(KEY_CURRENT, e)))?,
            None => {
                debug!("First use of the {new_format} format, seeding defaults");
                self.reset_active(new_format)
                    .map_err(|e| StoreError::switch(new_format, e))?;
            }
        }
        Ok(())
    }

    /// Restore a format's collection to its catalog defaults (or the custom
    /// placeholder) and persist it to both the shadow and the mirror.
    pub fn reset_active(&mut self, format: DatasetFormat) -> Result<Vec<Record>, StoreError> {
        let records = catalog::for_format(format);
        let json = serde_json::to_string(&records)?;
        let shadow = format.shadow_key();
        let backing = self.storage.set(shadow, &json);
        let mirror = self.storage.set(KEY_CURRENT, &json);
        backing.map_err(|e| StoreError::write(shadow, e))?;
        mirror.map_err(|e| StoreError::write(KEY_CURRENT, e))?;
        info!("Reset the {format} collection to {} entries", records.len());
        Ok(records)
    }

    /// The custom list, regardless of which format is active. Seeds the
    /// placeholder entry on first use; fail-soft like [`load_active`].
    ///
    /// [`load_active`]: DatasetStore::load_active
    pub fn load_custom(&mut self) -> Vec<Record> {
        match self.storage.get(KEY_CUSTOM) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Malformed '{KEY_CUSTOM}' contents: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                let records = catalog::custom_placeholder();
                if let Err(e) = self.save_custom(&records) {
                    warn!("Could not persist the seeded custom list: {e}");
                }
                records
            }
            Err(e) => {
                warn!("Could not read '{KEY_CUSTOM}': {e}");
                Vec::new()
            }
        }
    }

    /// Persist the custom list's shadow. When the custom format is the
    /// active one the mirror is written through as well, so the editor and
    /// the tracker can never show different lists.
    pub fn save_custom(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.storage
            .set(KEY_CUSTOM, &json)
            .map_err(|e| StoreError::write(KEY_CUSTOM, e))?;
        if self.active_format() == DatasetFormat::Custom {
            self.storage
                .set(KEY_CURRENT, &json)
                .map_err(|e| StoreError::write(KEY_CURRENT, e))?;
        }
        Ok(())
    }

    /// Select or deselect one entry of the live collection for review (the
    /// Edit tab's toggle). Returns the updated collection.
    pub fn set_tracked(&mut self, id: i64, in_tracker: bool) -> Result<Vec<Record>, StoreError> {
        let mut records = self.load_active();
        for record in records.iter_mut() {
            if record.id == id {
                record.in_tracker = in_tracker;
            }
        }
        self.save_active(&records)?;
        Ok(records)
    }

    // --- Settings ---

    pub fn thresholds(&self) -> Thresholds {
        settings::thresholds(&self.storage)
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) -> Result<(), StoreError> {
        settings::set_thresholds(&mut self.storage, thresholds)
    }

    pub fn display_primary(&self) -> bool {
        settings::display_primary(&self.storage)
    }

    pub fn set_display_primary(&mut self, primary: bool) -> Result<(), StoreError> {
        settings::set_display_primary(&mut self.storage, primary)
    }

    pub fn active_format(&self) -> DatasetFormat {
        settings::active_format(&self.storage)
    }
}
