/// Wishlist store: CRUD over the persisted entry list with dedup
///
/// The store is an explicit instance over a [`KeyValueStore`]. Every mutation
/// re-reads the slot first, then rewrites the whole list in a single `set_item`,
/// so writes from another context sharing the slot are not lost and readers
/// never observe a partial write.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::WISHLIST_STORAGE_KEY;
use crate::set_number::extract_set_number;
use crate::storage::{KeyValueStore, StorageError};
use crate::wishlist_data::{
    AddOutcome, ClearOutcome, RemoveOutcome, ToggleOutcome, WishlistCandidate, WishlistEntry,
};

const ID_SUFFIX_LEN: usize = 9;

pub struct WishlistStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<WishlistEntry>,
    unflushed: bool,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Load the wishlist from `storage`; absent or malformed data yields an empty store
    pub fn open(storage: S) -> Self {
        let entries = load_entries(&storage);
        WishlistStore {
            storage,
            entries,
            unflushed: false,
        }
    }

    /// Re-read the slot, discarding the in-memory copy
    pub fn reload(&mut self) {
        self.entries = load_entries(&self.storage);
        self.unflushed = false;
    }

    /// Pick up writes made through another handle on the same slot
    ///
    /// Skipped while this store holds changes storage never accepted, so a
    /// failed write is not silently discarded.
    pub fn refresh(&mut self) {
        if !self.unflushed {
            self.entries = load_entries(&self.storage);
        }
    }

    /// Write the full entry list to storage
    pub fn flush(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries).map_err(|e| StorageError::WriteFailed {
            key: WISHLIST_STORAGE_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set_item(WISHLIST_STORAGE_KEY, &json)?;
        self.unflushed = false;
        Ok(())
    }

    /// True when the last write failed and memory is ahead of storage
    pub fn has_unflushed_changes(&self) -> bool {
        self.unflushed
    }

    /// Entries in persisted (insertion) order
    pub fn get_all(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Entries ordered for display, most recently added first
    pub fn newest_first(&self) -> Vec<WishlistEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.added.cmp(&a.added));
        entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_item(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e.query == query)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_by_query(&self, query: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| e.query == query)
    }

    /// Add a candidate unless its query or set number is already saved
    ///
    /// The set number is resolved before the duplicate check: the explicit
    /// number if given, otherwise whatever `extract_set_number` finds in the query.
    pub fn add(&mut self, candidate: WishlistCandidate) -> AddOutcome {
        self.add_at(candidate, Utc::now())
    }

    fn add_at(&mut self, candidate: WishlistCandidate, added: DateTime<Utc>) -> AddOutcome {
        self.refresh();

        let number = candidate
            .number()
            .map(str::to_string)
            .or_else(|| extract_set_number(candidate.query()));

        if let Some(existing) = self.find_conflict(candidate.query(), number.as_deref()) {
            log::debug!("Wishlist already holds {:?} ({})", existing.query, existing.id);
            return AddOutcome::Duplicate(existing.clone());
        }

        let entry = WishlistEntry {
            id: self.generate_id(added),
            query: candidate.query().to_string(),
            added,
            price: candidate.price(),
            number,
            theme: candidate.theme().map(str::to_string),
            retailer: candidate.retailer().map(str::to_string),
        };

        self.entries.push(entry.clone());
        self.persist();
        log::debug!("Added {:?} to wishlist as {}", entry.query, entry.id);

        AddOutcome::Added(entry)
    }

    /// Remove the entry with `id`; unknown ids are a successful no-op
    pub fn remove(&mut self, id: &str) -> RemoveOutcome {
        self.refresh();
        let removed = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .map(|index| self.entries.remove(index));

        self.persist();
        if let Some(entry) = &removed {
            log::debug!("Removed {:?} from wishlist", entry.query);
        }

        RemoveOutcome { removed }
    }

    pub fn clear(&mut self) -> ClearOutcome {
        self.refresh();
        let removed_count = self.entries.len();
        self.entries.clear();

        match self.storage.remove_item(WISHLIST_STORAGE_KEY) {
            Ok(()) => self.unflushed = false,
            Err(e) => {
                log::error!("Failed to clear wishlist storage: {}", e);
                self.unflushed = true;
            }
        }
        log::debug!("Cleared {} wishlist entries", removed_count);

        ClearOutcome { removed_count }
    }

    /// Heart toggle: drop the entry with the same query, or add the candidate
    pub fn toggle(&mut self, candidate: WishlistCandidate) -> ToggleOutcome {
        self.refresh();
        let existing_id = self.find_by_query(candidate.query()).map(|e| e.id.clone());

        if let Some(id) = existing_id {
            if let Some(entry) = self.remove(&id).removed {
                return ToggleOutcome::Removed(entry);
            }
        }

        match self.add(candidate) {
            AddOutcome::Added(entry) => ToggleOutcome::Added(entry),
            AddOutcome::Duplicate(entry) => ToggleOutcome::Duplicate(entry),
        }
    }

    fn find_conflict(&self, query: &str, number: Option<&str>) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| {
            e.query == query || (number.is_some() && e.number.as_deref() == number)
        })
    }

    fn generate_id(&self, added: DateTime<Utc>) -> String {
        loop {
            let suffix: String = Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(ID_SUFFIX_LEN)
                .collect();
            let id = format!("wish_{}_{}", added.timestamp_millis(), suffix);
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            log::error!("Failed to save wishlist: {}", e);
            self.unflushed = true;
        }
    }
}

fn load_entries<S: KeyValueStore>(storage: &S) -> Vec<WishlistEntry> {
    let raw = match storage.get_item(WISHLIST_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read wishlist, starting empty: {}", e);
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Malformed wishlist data, starting empty: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn candidate(query: &str) -> WishlistCandidate {
        WishlistCandidate::new(query).unwrap()
    }

    fn open_store() -> (WishlistStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (WishlistStore::open(storage.clone()), storage)
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn test_open_empty_storage() {
        let (store, _) = open_store();
        assert_eq!(store.count(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_open_malformed_storage() {
        let storage = MemoryStorage::new();
        storage.set_item(WISHLIST_STORAGE_KEY, "{not json").unwrap();

        let store = WishlistStore::open(storage);

        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_open_null_storage() {
        let storage = MemoryStorage::new();
        storage.set_item(WISHLIST_STORAGE_KEY, "null").unwrap();

        let store = WishlistStore::open(storage);

        assert!(store.is_empty());
    }

    #[test]
    fn test_add_entry() {
        let (mut store, _) = open_store();

        let outcome = store.add(
            candidate("LEGO Star Wars Venator")
                .with_price(29999.0)
                .with_number("75367")
                .with_theme("Star Wars")
                .with_retailer("OZON"),
        );

        assert!(outcome.is_success());
        let entry = outcome.entry();
        assert!(entry.id.starts_with("wish_"));
        assert_eq!(entry.query, "LEGO Star Wars Venator");
        assert_eq!(entry.price, Some(29999.0));
        assert_eq!(entry.number, Some("75367".to_string()));
        assert_eq!(entry.theme, Some("Star Wars".to_string()));
        assert_eq!(entry.retailer, Some("OZON".to_string()));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_extracts_number_from_query() {
        let (mut store, _) = open_store();

        let outcome = store.add(candidate("Venator 75367"));

        assert_eq!(outcome.entry().number, Some("75367".to_string()));
    }

    #[test]
    fn test_add_without_number() {
        let (mut store, _) = open_store();

        let outcome = store.add(candidate("Rivendell"));

        assert_eq!(outcome.entry().number, None);
    }

    #[test]
    fn test_add_duplicate_query() {
        let (mut store, _) = open_store();
        let first = store.add(candidate("Rivendell"));

        let second = store.add(candidate("Rivendell").with_price(100.0));

        assert_eq!(second, AddOutcome::Duplicate(first.entry().clone()));
        assert_eq!(store.count(), 1);
        assert_eq!(store.get_all()[0].price, None);
    }

    #[test]
    fn test_add_duplicate_explicit_number() {
        let (mut store, _) = open_store();
        store.add(candidate("Venator 75367"));

        let outcome = store.add(candidate("Different Title").with_number("75367"));

        assert!(!outcome.is_success());
        assert_eq!(outcome.entry().query, "Venator 75367");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_duplicate_extracted_number() {
        let (mut store, _) = open_store();
        store.add(candidate("Venator").with_number("75367"));

        let outcome = store.add(candidate("Star Wars 75367 cruiser"));

        assert!(!outcome.is_success());
    }

    #[test]
    fn test_entries_without_numbers_do_not_conflict() {
        let (mut store, _) = open_store();

        assert!(store.add(candidate("Rivendell")).is_success());
        assert!(store.add(candidate("Ford GT")).is_success());
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let (mut store, _) = open_store();
        let added = Utc.with_ymd_and_hms(2024, 10, 28, 10, 30, 0).unwrap();

        for n in 0..50 {
            store.add_at(candidate(&format!("Set {}", n)), added);
        }

        let mut ids: Vec<&str> = store.get_all().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_then_find_by_id() {
        let (mut store, _) = open_store();

        let outcome = store.add(candidate("Ford GT 42154"));
        let entry = outcome.entry().clone();

        assert_eq!(store.find_by_id(&entry.id), Some(&entry));
    }

    #[test]
    fn test_remove_existing() {
        let (mut store, _) = open_store();
        let entry = store.add(candidate("Ford GT")).entry().clone();
        store.add(candidate("Rivendell"));

        let outcome = store.remove(&entry.id);

        assert!(outcome.is_success());
        assert_eq!(outcome.removed, Some(entry.clone()));
        assert_eq!(store.find_by_id(&entry.id), None);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_remove_nonexistent() {
        let (mut store, _) = open_store();
        store.add(candidate("Ford GT"));

        let outcome = store.remove("wish_0_missing");

        assert!(outcome.is_success());
        assert_eq!(outcome.removed, None);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear() {
        let (mut store, storage) = open_store();
        store.add(candidate("Ford GT"));
        store.add(candidate("Rivendell"));

        let outcome = store.clear();

        assert_eq!(outcome.removed_count, 2);
        assert!(store.get_all().is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(storage.get_item(WISHLIST_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_has_item_is_exact() {
        let (mut store, _) = open_store();
        store.add(candidate("Ford GT"));

        assert!(store.has_item("Ford GT"));
        assert!(!store.has_item("ford gt"));
        assert!(!store.has_item("Ford"));
    }

    #[test]
    fn test_round_trip_through_storage() {
        let (mut store, storage) = open_store();
        store.add(candidate("Ford GT").with_price(21999.0).with_retailer("Wildberries"));
        store.add(candidate("Venator 75367").with_theme("Star Wars"));
        store.add(candidate("Rivendell"));

        let reopened = WishlistStore::open(storage);

        assert_eq!(reopened.get_all(), store.get_all());
    }

    #[test]
    fn test_persisted_layout_is_a_json_array() {
        let (mut store, storage) = open_store();
        store.add(candidate("Venator 75367"));

        let raw = storage.get_item(WISHLIST_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["query"], "Venator 75367");
        assert_eq!(items[0]["number"], "75367");
        assert!(items[0]["price"].is_null());
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let (mut store, storage) = open_store();
        let mut other = WishlistStore::open(storage.clone());
        other.add(candidate("Ford GT"));

        assert_eq!(store.count(), 0);
        store.reload();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_keeps_entries_written_by_another_store() {
        let (mut tab_a, storage) = open_store();
        let mut tab_b = WishlistStore::open(storage.clone());

        tab_a.add(candidate("Venator 75367"));
        tab_b.add(candidate("Rivendell"));

        let reopened = WishlistStore::open(storage);
        let queries: Vec<&str> = reopened.get_all().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["Venator 75367", "Rivendell"]);
    }

    #[test]
    fn test_number_conflict_checked_against_other_store_writes() {
        let (mut tab_a, storage) = open_store();
        let mut tab_b = WishlistStore::open(storage.clone());
        tab_a.add(candidate("Venator 75367"));

        let outcome = tab_b.add(candidate("Other").with_number("75367"));

        assert!(!outcome.is_success());
        assert_eq!(WishlistStore::open(storage).count(), 1);
    }

    #[test]
    fn test_remove_keeps_entries_written_by_another_store() {
        let (mut tab_a, storage) = open_store();
        let ford = tab_a.add(candidate("Ford GT")).entry().clone();
        let mut tab_b = WishlistStore::open(storage.clone());
        tab_b.add(candidate("Rivendell"));

        let outcome = tab_a.remove(&ford.id);

        assert_eq!(outcome.removed, Some(ford));
        let reopened = WishlistStore::open(storage);
        assert_eq!(reopened.count(), 1);
        assert!(reopened.has_item("Rivendell"));
    }

    #[test]
    fn test_remove_entry_added_elsewhere() {
        let (mut tab_a, storage) = open_store();
        let mut tab_b = WishlistStore::open(storage.clone());
        let ford = tab_b.add(candidate("Ford GT")).entry().clone();

        let outcome = tab_a.remove(&ford.id);

        assert_eq!(outcome.removed, Some(ford));
        assert!(WishlistStore::open(storage).is_empty());
    }

    #[test]
    fn test_toggle_sees_entry_added_elsewhere() {
        let (mut tab_a, storage) = open_store();
        let mut tab_b = WishlistStore::open(storage.clone());
        tab_b.add(candidate("Ford GT").with_number("42154"));

        let outcome = tab_a.toggle(candidate("Ford GT").with_number("42154"));

        assert!(matches!(outcome, ToggleOutcome::Removed(_)));
        assert!(WishlistStore::open(storage).is_empty());
    }

    #[test]
    fn test_clear_counts_entries_written_elsewhere() {
        let (mut tab_a, storage) = open_store();
        let mut tab_b = WishlistStore::open(storage.clone());
        tab_b.add(candidate("Ford GT"));
        tab_b.add(candidate("Rivendell"));

        assert_eq!(tab_a.clear().removed_count, 2);
    }

    #[test]
    fn test_slot_rewritten_between_operations() {
        let (mut store, storage) = open_store();
        store.add(candidate("Ford GT"));

        let mut external = WishlistStore::open(storage.clone());
        external.add(candidate("Venator 75367"));

        assert!(!store.add(candidate("Cruiser").with_number("75367")).is_success());
        assert!(store.add(candidate("Rivendell")).is_success());
        assert_eq!(WishlistStore::open(storage).count(), 3);
    }

    #[test]
    fn test_refresh_keeps_unflushed_changes() {
        let mut store = WishlistStore::open(ReadOnlyStorage);
        store.add(candidate("Ford GT"));

        store.refresh();

        assert_eq!(store.count(), 1);
        assert!(store.has_unflushed_changes());
    }

    #[test]
    fn test_newest_first() {
        let (mut store, _) = open_store();
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        store.add_at(candidate("Old"), older);
        store.add_at(candidate("New"), newer);

        let display = store.newest_first();

        assert_eq!(display[0].query, "New");
        assert_eq!(display[1].query, "Old");
        assert_eq!(store.get_all()[0].query, "Old");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (mut store, _) = open_store();

        let first = store.toggle(candidate("Ford GT").with_number("42154"));
        assert!(matches!(first, ToggleOutcome::Added(_)));
        assert_eq!(store.count(), 1);

        let second = store.toggle(candidate("Ford GT").with_number("42154"));
        assert!(matches!(second, ToggleOutcome::Removed(_)));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_toggle_reports_number_conflict() {
        let (mut store, _) = open_store();
        store.add(candidate("My Ford 42154"));

        let outcome = store.toggle(candidate("LEGO Technic 2022 Ford GT").with_number("42154"));

        assert!(matches!(outcome, ToggleOutcome::Duplicate(_)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = WishlistStore::open(ReadOnlyStorage);

        let outcome = store.add(candidate("Ford GT"));

        assert!(outcome.is_success());
        assert_eq!(store.count(), 1);
        assert!(store.has_unflushed_changes());
        assert!(store.flush().is_err());
    }

    #[test]
    fn test_failed_clear_still_empties_memory() {
        let mut store = WishlistStore::open(ReadOnlyStorage);
        store.add(candidate("Ford GT"));

        let outcome = store.clear();

        assert!(outcome.is_success());
        assert_eq!(store.count(), 0);
        assert!(store.has_unflushed_changes());
    }
}
