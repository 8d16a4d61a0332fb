// src/editor.rs

use log::debug;

use crate::constants::{ENTRY_LIMIT, NAME_LIMIT, NEW_ENTRY_NAME};
use crate::error::StoreError;
use crate::models::{Record, ReviewDate};
use crate::storage::Storage;
use crate::store::DatasetStore;

/// Editing surface for the user-defined list: add, rename, delete, reorder.
///
/// Entry ids double as the sort order, so every structural edit renumbers
/// them back to a contiguous `1..=N` before persisting. The entry cap and
/// the name length limit are checked here, in front of the store, and a
/// violation comes back as [`StoreError::Validation`] before anything is
/// written. Every accepted edit persists immediately through
/// [`DatasetStore::save_custom`].
pub struct CustomListEditor {
    items: Vec<Record>,
}

impl CustomListEditor {
    /// Load the custom list (seeding the placeholder on first use).
    pub fn load<S: Storage>(store: &mut DatasetStore<S>) -> Self {
        CustomListEditor {
            items: store.load_custom(),
        }
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// Append a new entry and return its id. An empty name becomes the
    /// placeholder name, like an abandoned input dialog.
    pub fn add_entry<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        name: &str,
    ) -> Result<i64, StoreError> {
        if self.items.len() >= ENTRY_LIMIT {
            return Err(StoreError::Validation(format!(
                "The maximum number of entries is {ENTRY_LIMIT}"
            )));
        }
        let name = normalized_name(name)?;
        let id = self.items.len() as i64 + 1;
        debug!("Adding custom entry {id}: {name}");
        self.items.push(Record {
            id,
            name: name.clone(),
            in_tracker: false,
            date: ReviewDate::Never,
            transliteration: Some(name),
            total_verses: None,
            kind: None,
        });
        store.save_custom(&self.items)?;
        Ok(id)
    }

    pub fn rename_entry<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
        name: &str,
    ) -> Result<(), StoreError> {
        let name = normalized_name(name)?;
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(());
        };
        item.name = name.clone();
        item.transliteration = Some(name);
        store.save_custom(&self.items)
    }

    /// Remove an entry; its review date goes with it.
    pub fn delete_entry<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
    ) -> Result<(), StoreError> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Ok(());
        }
        self.renumber();
        store.save_custom(&self.items)
    }

    pub fn move_up<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
    ) -> Result<(), StoreError> {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return Ok(());
        };
        if index == 0 {
            return Ok(());
        }
        self.items.swap(index, index - 1);
        self.renumber();
        store.save_custom(&self.items)
    }

    pub fn move_down<S: Storage>(
        &mut self,
        store: &mut DatasetStore<S>,
        id: i64,
    ) -> Result<(), StoreError> {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return Ok(());
        };
        if index + 1 >= self.items.len() {
            return Ok(());
        }
        self.items.swap(index, index + 1);
        self.renumber();
        store.save_custom(&self.items)
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.id = index as i64 + 1;
        }
    }
}

fn normalized_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Ok(NEW_ENTRY_NAME.to_string());
    }
    if trimmed.chars().count() > NAME_LIMIT {
        return Err(StoreError::Validation(format!(
            "Entry names are limited to {NAME_LIMIT} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatasetFormat;
    use crate::storage::MemoryStorage;

    fn editor() -> (CustomListEditor, DatasetStore<MemoryStorage>) {
        let mut store = DatasetStore::new(MemoryStorage::new());
        let editor = CustomListEditor::load(&mut store);
        (editor, store)
    }

    fn ids(editor: &CustomListEditor) -> Vec<i64> {
        editor.items().iter().map(|i| i.id).collect()
    }

    fn names(editor: &CustomListEditor) -> Vec<String> {
        editor.items().iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn a_fresh_list_holds_the_placeholder() {
        let (editor, _store) = editor();
        assert_eq!(names(&editor), vec!["New entry"]);
        assert_eq!(ids(&editor), vec![1]);
    }

    #[test]
    fn ids_stay_contiguous_across_edits() {
        let (mut editor, mut store) = editor();
        editor.add_entry(&mut store, "Al-Mulk").unwrap();
        editor.add_entry(&mut store, "Ya-Sin").unwrap();
        editor.add_entry(&mut store, "Al-Kahf").unwrap();
        assert_eq!(ids(&editor), vec![1, 2, 3, 4]);

        editor.delete_entry(&mut store, 2).unwrap();
        assert_eq!(ids(&editor), vec![1, 2, 3]);
        assert_eq!(names(&editor), vec!["New entry", "Ya-Sin", "Al-Kahf"]);

        editor.move_up(&mut store, 3).unwrap();
        assert_eq!(ids(&editor), vec![1, 2, 3]);
        assert_eq!(names(&editor), vec!["New entry", "Al-Kahf", "Ya-Sin"]);

        editor.move_down(&mut store, 1).unwrap();
        assert_eq!(ids(&editor), vec![1, 2, 3]);
        assert_eq!(names(&editor), vec!["Al-Kahf", "New entry", "Ya-Sin"]);
    }

    #[test]
    fn moves_at_the_edges_are_no_ops() {
        let (mut editor, mut store) = editor();
        editor.add_entry(&mut store, "Al-Mulk").unwrap();
        let before = names(&editor);
        editor.move_up(&mut store, 1).unwrap();
        editor.move_down(&mut store, 2).unwrap();
        assert_eq!(names(&editor), before);
    }

    #[test]
    fn edits_persist_through_the_store() {
        let (mut editor, mut store) = editor();
        editor.add_entry(&mut store, "Al-Mulk").unwrap();
        editor.rename_entry(&mut store, 1, "Juz Amma").unwrap();

        let reloaded = CustomListEditor::load(&mut store);
        assert_eq!(names(&reloaded), vec!["Juz Amma", "Al-Mulk"]);
        // custom entries mirror their name for both display languages
        assert_eq!(
            reloaded.items()[0].transliteration.as_deref(),
            Some("Juz Amma")
        );
    }

    #[test]
    fn the_entry_cap_is_enforced() {
        let (mut editor, mut store) = editor();
        for i in 1..ENTRY_LIMIT {
            editor.add_entry(&mut store, &format!("Entry {i}")).unwrap();
        }
        assert_eq!(editor.items().len(), ENTRY_LIMIT);
        let result = editor.add_entry(&mut store, "One too many");
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(editor.items().len(), ENTRY_LIMIT);
    }

    #[test]
    fn long_names_are_rejected_and_blank_names_defaulted() {
        let (mut editor, mut store) = editor();
        let result = editor.add_entry(&mut store, "a name well beyond the limit");
        assert!(matches!(result, Err(StoreError::Validation(_))));

        editor.add_entry(&mut store, "   ").unwrap();
        assert_eq!(editor.items()[1].name, "New entry");
    }

    #[test]
    fn deleting_while_custom_is_active_updates_the_tracker_view() {
        let (_, mut store) = editor();
        store.switch_format(DatasetFormat::Custom).unwrap();
        let mut editor = CustomListEditor::load(&mut store);
        editor.add_entry(&mut store, "Al-Mulk").unwrap();
        editor.delete_entry(&mut store, 1).unwrap();

        let active = store.load_active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Al-Mulk");
        assert_eq!(active[0].id, 1);
    }
}
