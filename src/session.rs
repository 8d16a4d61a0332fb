// src/session.rs

use chrono::NaiveDate;
use log::debug;

use crate::constants::HISTORY_LIMIT;
use crate::error::StoreError;
use crate::models::{Record, ReviewDate};
use crate::storage::Storage;
use crate::store::DatasetStore;

/// One tracker-screen visit's worth of review marking, with undo.
///
/// Every mutation snapshots the whole collection, persists it through
/// [`DatasetStore::save_active`], and only then becomes part of the history;
/// a failed write leaves both the history and the persisted state as they
/// were. The history lives in memory only and is dropped when the screen is
/// reinitialized, and it is capped at [`HISTORY_LIMIT`] snapshots.
pub struct ReviewSession {
    history: Vec<Vec<Record>>,
}

impl ReviewSession {
    pub fn new(records: Vec<Record>) -> Self {
        ReviewSession {
            history: vec![records],
        }
    }

    /// The collection as of the latest accepted mutation.
    pub fn current(&self) -> &[Record] {
        match self.history.last() {
            Some(snapshot) => snapshot,
            None => &[],
        }
    }

    /// Whether an undo would do anything (drives the undo button state).
    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// Record a review on the given date (a tap on a list item).
    pub fn mark_reviewed<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        self.apply(store, id, ReviewDate::On(date))
    }

    /// Clear an entry back to never-reviewed (a long-press).
    pub fn mark_unreviewed<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
    ) -> Result<(), StoreError> {
        self.apply(store, id, ReviewDate::Never)
    }

    /// Overwrite an entry's review date (the date-picker flow).
    pub fn set_reviewed_date<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        self.apply(store, id, ReviewDate::On(date))
    }

    /// Roll back to the previous snapshot and persist it. Returns `false`
    /// without touching storage when there is nothing to undo.
    pub fn undo<S: Storage>(&mut self, store: &mut DatasetStore<S>) -> Result<bool, StoreError> {
        if self.history.len() <= 1 {
            return Ok(false);
        }
        let popped = match self.history.pop() {
            Some(snapshot) => snapshot,
            None => return Ok(false),
        };
        let restored = self.current().to_vec();
        if let Err(e) = store.save_active(&restored) {
            // stay on the state the UI is already showing
            self.history.push(popped);
            return Err(e);
        }
        Ok(true)
    }

    fn apply<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
        date: ReviewDate,
    ) -> Result<(), StoreError> {
        let mut next = self.current().to_vec();
        let mut hit = false;
        for record in next.iter_mut() {
            if record.id == id {
                record.date = date;
                hit = true;
            }
        }
        if !hit {
            debug!("No record with id {id} in the active collection");
            return Ok(());
        }
        store.save_active(&next)?;
        self.push(next);
        Ok(())
    }

    fn push(&mut self, snapshot: Vec<Record>) {
        self.history.push(snapshot);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    /// MemoryStorage wrapper that counts writes and can reject them.
    struct ProbeStorage {
        inner: MemoryStorage,
        writes: usize,
        fail_writes: bool,
    }

    impl ProbeStorage {
        fn new() -> Self {
            ProbeStorage {
                inner: MemoryStorage::new(),
                writes: 0,
                fail_writes: false,
            }
        }
    }

    impl Storage for ProbeStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Backend("injected write failure".to_string()));
            }
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn session_over_probe() -> (ReviewSession, DatasetStore<ProbeStorage>) {
        let mut store = DatasetStore::new(ProbeStorage::new());
        let records = store.load_active();
        (ReviewSession::new(records), store)
    }

    #[test]
    fn marking_updates_current_and_persists() {
        let (mut session, mut store) = session_over_probe();
        session.mark_reviewed(&mut store, 2, day(5)).unwrap();

        let record = session.current().iter().find(|r| r.id == 2).unwrap();
        assert_eq!(record.date, ReviewDate::On(day(5)));
        let persisted = store.load_active();
        assert_eq!(persisted, session.current());
    }

    #[test]
    fn undo_restores_and_persists_the_previous_snapshot() {
        let (mut session, mut store) = session_over_probe();
        session.mark_reviewed(&mut store, 1, day(3)).unwrap();
        session.mark_reviewed(&mut store, 1, day(8)).unwrap();

        assert!(session.undo(&mut store).unwrap());
        let record = &session.current()[0];
        assert_eq!(record.date, ReviewDate::On(day(3)));
        // undo is durable, not a view rollback
        assert_eq!(store.load_active()[0].date, ReviewDate::On(day(3)));
    }

    #[test]
    fn undo_on_a_fresh_session_is_a_silent_no_op() {
        let (mut session, mut store) = session_over_probe();
        let writes_before = store.storage().writes;

        assert!(!session.can_undo());
        assert!(!session.undo(&mut store).unwrap());
        assert_eq!(store.storage().writes, writes_before);
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let (mut session, mut store) = session_over_probe();
        let writes_before = store.storage().writes;
        session.mark_reviewed(&mut store, 999, day(5)).unwrap();
        assert!(!session.can_undo());
        assert_eq!(store.storage().writes, writes_before);
    }

    #[test]
    fn failed_writes_leave_the_session_untouched() {
        let (mut session, mut store) = session_over_probe();
        session.mark_reviewed(&mut store, 1, day(3)).unwrap();

        store.storage_mut().fail_writes = true;
        let result = session.mark_reviewed(&mut store, 1, day(9));
        assert!(result.is_err());
        assert_eq!(session.current()[0].date, ReviewDate::On(day(3)));

        // a failed undo keeps the undone snapshot reachable
        let result = session.undo(&mut store);
        assert!(result.is_err());
        assert_eq!(session.current()[0].date, ReviewDate::On(day(3)));
        assert!(session.can_undo());
    }

    #[test]
    fn mark_unreviewed_clears_back_to_never() {
        let (mut session, mut store) = session_over_probe();
        session.mark_reviewed(&mut store, 4, day(2)).unwrap();
        session.mark_unreviewed(&mut store, 4).unwrap();
        let record = session.current().iter().find(|r| r.id == 4).unwrap();
        assert!(record.date.is_never());

        assert!(session.undo(&mut store).unwrap());
        let record = session.current().iter().find(|r| r.id == 4).unwrap();
        assert_eq!(record.date, ReviewDate::On(day(2)));
    }

    #[test]
    fn history_is_capped() {
        let (mut session, mut store) = session_over_probe();
        for i in 0..(HISTORY_LIMIT + 20) {
            session
                .mark_reviewed(&mut store, 1, day(1 + (i % 28) as u32))
                .unwrap();
        }
        let mut undos = 0;
        while session.undo(&mut store).unwrap() {
            undos += 1;
        }
        assert_eq!(undos, HISTORY_LIMIT - 1);
    }
}
