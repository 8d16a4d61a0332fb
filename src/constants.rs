// src/constants.rs

// --- Storage Keys ---
// One string-valued slot per collection, plus the settings slots. The
// "chapters" slot always mirrors the shadow slot of the active format.
pub const KEY_CURRENT: &str = "chapters";
pub const KEY_SURAH: &str = "surahs";
pub const KEY_JUZ: &str = "juz";
pub const KEY_CUSTOM: &str = "custom";
pub const KEY_DAYS: &str = "days";
pub const KEY_LANG: &str = "lang";
pub const KEY_FORMAT: &str = "format";

// --- Staleness Threshold Defaults (days) ---
pub const ORANGE_DEFAULT: u32 = 7;
pub const RED_DEFAULT: u32 = 14;

// --- Limits ---
pub const ENTRY_LIMIT: usize = 100; // entries a user can add in custom mode
pub const NAME_LIMIT: usize = 20; // max length of a custom entry name
pub const HISTORY_LIMIT: usize = 100; // undo snapshots kept per session

// --- Sentinels ---
pub const NOT_REVIEWED: &str = "Not reviewed";
pub const NEW_ENTRY_NAME: &str = "New entry";
