//! Storage and review-tracking core for a Quran review companion app.
//!
//! The crate keeps three interchangeable review lists (by Surah, by Juz, or
//! a user-defined custom list) in a string-keyed storage backend. Whichever
//! list is selected is mirrored into the slot the UI reads, so switching
//! formats never discards the others. Entries carry a last-reviewed date
//! that [`classify`] buckets into Neutral/Good/Warning/Stale against the
//! configured day thresholds, and [`ReviewSession`] gives the tracker screen
//! an undo history over review-date edits.
//!
//! The rendering layer is not part of this crate: an embedding app reads
//! collections from [`DatasetStore`], draws them, and calls back in on user
//! actions.

mod catalog;
mod classify;
mod constants;
mod editor;
mod error;
mod models;
mod session;
mod settings;
mod storage;
mod store;

pub use classify::{classify, classify_today, Staleness};
pub use constants::{ENTRY_LIMIT, HISTORY_LIMIT, NAME_LIMIT};
pub use editor::CustomListEditor;
pub use error::StoreError;
pub use models::{tracked, DatasetFormat, Record, ReviewDate, Thresholds};
pub use session::ReviewSession;
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageError};
pub use store::DatasetStore;
