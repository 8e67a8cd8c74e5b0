use crate::{
    domain::record::{Record, RecordFields, RecordId},
    store::{seed, Query},
};

/// The in-memory owner of the record sequence and the identifier counter.
///
/// Records are held newest-first. Identifiers are assigned from a counter
/// that only ever moves forward; deleting a record never frees its id. The
/// store's lifetime is the session: nothing here touches disk.
///
/// Construct one store per session and pass it explicitly to whatever drives
/// it; there is deliberately no shared global instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: RecordId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store with the identifier counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId::FIRST,
        }
    }

    /// Inserts a new record at the front of the sequence.
    ///
    /// Assigns the next identifier, stamps the creation time and advances
    /// the counter. Returns the inserted record.
    pub fn create(&mut self, fields: RecordFields) -> &Record {
        let id = self.next_id;
        self.next_id = self.next_id.next();

        let record = Record::new(id, fields);
        self.records.insert(0, record);

        tracing::info!("created record {id}");
        &self.records[0]
    }

    /// Replaces the editable fields of the record with the given id,
    /// preserving its identity fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id; the store
    /// is left untouched.
    pub fn update(&mut self, id: RecordId, fields: RecordFields) -> Result<&Record, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound { id })?;

        record.apply(fields);

        tracing::info!("updated record {id}");
        Ok(&*record)
    }

    /// Removes and returns the record with the given id, preserving the
    /// relative order of the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id.
    pub fn remove(&mut self, id: RecordId) -> Result<Record, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound { id })?;

        let record = self.records.remove(index);

        tracing::info!("removed record {id}");
        Ok(record)
    }

    /// Empties the store and resets the identifier counter to 1.
    ///
    /// This is the only operation that resets the counter. Callers are
    /// expected to confirm with the user before invoking it.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_id = RecordId::FIRST;

        tracing::info!("cleared all records");
    }

    /// Bulk-inserts the fixed sample roster via repeated [`Self::create`].
    ///
    /// Returns the number of records inserted. The last sample ends up at
    /// the front of the sequence.
    pub fn seed(&mut self) -> usize {
        for sample in &seed::SAMPLES {
            self.create(sample.fields());
        }
        seed::SAMPLES.len()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// The filtered projection of the store.
    ///
    /// Pure derivation: the subsequence matching the query, in store order
    /// (newest first), never re-sorted.
    #[must_use]
    pub fn project<'a>(&'a self, query: &Query) -> Vec<&'a Record> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Iterates the full sequence, newest first.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// The number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Error returned when a store lookup misses.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("record {id} not found")]
    NotFound {
        /// The id that missed.
        id: RecordId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordDraft;

    fn fields(name: &str, role: &str) -> RecordFields {
        RecordDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: role.to_string(),
            status: "Active".to_string(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn ids_are_unique_and_strictly_increasing_across_deletes() {
        let mut store = RecordStore::new();

        let first = store.create(fields("Ann", "Admin")).id();
        let second = store.create(fields("Ben", "Editor")).id();
        store.remove(first).unwrap();
        let third = store.create(fields("Cam", "Viewer")).id();

        assert!(first < second);
        assert!(second < third);
        assert_eq!(third.get(), 3);
    }

    #[test]
    fn newest_record_is_frontmost() {
        let mut store = RecordStore::new();
        store.create(fields("Ann", "Admin"));
        store.create(fields("Ben", "Editor"));

        let names: Vec<_> = store.records().map(Record::name).collect();
        assert_eq!(names, ["Ben", "Ann"]);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = RecordStore::new();
        let id = store.create(fields("Ann", "Admin")).id();
        let created = store.get(id).unwrap().created();

        store.update(id, fields("Annette", "Editor")).unwrap();

        let record = store.get(id).unwrap();
        assert_eq!(record.name(), "Annette");
        assert_eq!(record.id(), id);
        assert_eq!(record.created(), created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_missing_id_reports_not_found_and_mutates_nothing() {
        let mut store = RecordStore::new();
        store.create(fields("Ann", "Admin"));
        let before = store.clone();

        let missing: RecordId = "99".parse().unwrap();
        let error = store.update(missing, fields("Ben", "Editor")).unwrap_err();

        assert_eq!(error, StoreError::NotFound { id: missing });
        assert_eq!(store, before);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut store = RecordStore::new();
        store.create(fields("Ann", "Admin"));
        let middle = store.create(fields("Ben", "Editor")).id();
        store.create(fields("Cam", "Viewer"));

        let removed = store.remove(middle).unwrap();
        assert_eq!(removed.name(), "Ben");

        let names: Vec<_> = store.records().map(Record::name).collect();
        assert_eq!(names, ["Cam", "Ann"]);
    }

    #[test]
    fn remove_missing_id_reports_not_found() {
        let mut store = RecordStore::new();
        let missing: RecordId = "7".parse().unwrap();

        assert_eq!(
            store.remove(missing).unwrap_err(),
            StoreError::NotFound { id: missing }
        );
    }

    #[test]
    fn clear_resets_the_counter() {
        let mut store = RecordStore::new();
        store.create(fields("Ann", "Admin"));
        store.create(fields("Ben", "Editor"));

        store.clear();
        assert!(store.is_empty());

        let id = store.create(fields("Cam", "Viewer")).id();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn seed_inserts_eight_samples_last_one_frontmost() {
        let mut store = RecordStore::new();
        let count = store.seed();

        assert_eq!(count, 8);
        assert_eq!(store.len(), 8);

        // Seeding goes through create, so the last sample is newest.
        let front = store.records().next().unwrap();
        assert_eq!(front.name(), seed::SAMPLES[7].name);
        assert_eq!(front.id().get(), 8);
    }
}
