// src/catalog.rs

use crate::constants::NEW_ENTRY_NAME;
use crate::models::{DatasetFormat, Record, ReviewDate};

/// The full Surah catalog, 114 entries with Arabic names, transliterations,
/// verse counts and revelation place. Nothing is in the tracker yet.
pub fn surahs() -> Vec<Record> {
    let data = include_str!("data/surahs.json");
    serde_json::from_str(data).expect("bundled surah catalog is malformed")
}

/// The 30 Juz, named by their opening words.
pub fn juz() -> Vec<Record> {
    let data = include_str!("data/juz.json");
    serde_json::from_str(data).expect("bundled juz catalog is malformed")
}

/// A fresh custom list holds one placeholder entry for the user to rename.
pub fn custom_placeholder() -> Vec<Record> {
    vec![Record {
        id: 1,
        name: NEW_ENTRY_NAME.to_string(),
        in_tracker: false,
        date: ReviewDate::Never,
        transliteration: Some(NEW_ENTRY_NAME.to_string()),
        total_verses: None,
        kind: None,
    }]
}

/// What a format's collection looks like before the user has touched it.
pub fn for_format(format: DatasetFormat) -> Vec<Record> {
    match format {
        DatasetFormat::Surah => surahs(),
        DatasetFormat::Juz => juz(),
        DatasetFormat::Custom => custom_placeholder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surah_catalog_is_complete_and_untouched() {
        let catalog = surahs();
        assert_eq!(catalog.len(), 114);
        for (index, record) in catalog.iter().enumerate() {
            assert_eq!(record.id, index as i64 + 1);
            assert!(!record.in_tracker);
            assert!(record.date.is_never());
            assert!(record.total_verses.is_some());
            assert!(record.kind.is_some());
            assert!(record.transliteration.is_some());
        }
        assert_eq!(catalog[0].name, "الفاتحة");
        assert_eq!(catalog[0].total_verses, Some(7));
        assert_eq!(catalog[113].transliteration.as_deref(), Some("An-Nas"));
    }

    #[test]
    fn juz_catalog_has_thirty_unnumbered_entries() {
        let catalog = juz();
        assert_eq!(catalog.len(), 30);
        for (index, record) in catalog.iter().enumerate() {
            assert_eq!(record.id, index as i64 + 1);
            assert!(record.total_verses.is_none());
            assert!(record.kind.is_none());
        }
        assert_eq!(catalog[29].transliteration.as_deref(), Some("Amma"));
    }

    #[test]
    fn custom_seed_is_a_single_placeholder() {
        let seed = custom_placeholder();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[0].name, "New entry");
        assert!(!seed[0].in_tracker);
    }
}
