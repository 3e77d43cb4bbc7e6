//! Document Store
//!
//! Named collections of records kept in insertion order.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::config::DEFAULT_ID_LENGTH;
use crate::docstore::query::{apply_set, matches, Record};
use crate::docstore::ID_FIELD;
use crate::fixtures::generate_random_string;

// == Document Store ==
/// Mock document database.
///
/// Collections spring into existence on first insert. Lookups that find
/// nothing return `None`, an empty list or `false`; nothing here fails.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    collections: HashMap<String, Vec<Record>>,
    id_length: usize,
}

impl DocumentStore {
    /// Creates an empty store generating identifiers of the default length.
    pub fn new() -> Self {
        Self::with_id_length(DEFAULT_ID_LENGTH)
    }

    /// Creates an empty store generating identifiers of `id_length` characters.
    pub fn with_id_length(id_length: usize) -> Self {
        Self {
            collections: HashMap::new(),
            id_length: id_length.max(1),
        }
    }

    // == Insert ==
    /// Appends `record` to `collection` under a fresh random `_id` and returns it.
    ///
    /// Any `_id` already on the record is replaced. Identifiers are random
    /// alphanumerics and are not checked against existing ones.
    pub fn insert(&mut self, collection: &str, mut record: Record) -> String {
        let id = generate_random_string(self.id_length);
        record.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let records = self.collections.entry(collection.to_string()).or_default();
        records.push(record);
        debug!(collection, id = %id, size = records.len(), "inserted record");

        id
    }

    // == Find One ==
    /// Returns the first record, in insertion order, matching every field of `query`.
    pub fn find_one(&self, collection: &str, query: &Record) -> Option<&Record> {
        self.collections
            .get(collection)?
            .iter()
            .find(|record| matches(record, query))
    }

    // == Find ==
    /// Returns all records matching `query`, in insertion order.
    pub fn find(&self, collection: &str, query: &Record) -> Vec<&Record> {
        self.collections
            .get(collection)
            .map(|records| records.iter().filter(|r| matches(r, query)).collect())
            .unwrap_or_default()
    }

    // == Update One ==
    /// Merges the `$set` fields of `update` into the first record matching `query`.
    ///
    /// Returns `false` if nothing matched. Only `$set` is understood; a match
    /// with no usable `$set` still reports `true` and changes nothing.
    pub fn update_one(&mut self, collection: &str, query: &Record, update: &Record) -> bool {
        let Some(record) = self
            .collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| matches(r, query)))
        else {
            return false;
        };

        apply_set(record, update);
        debug!(collection, id = ?record.get(ID_FIELD), "updated record");
        true
    }

    // == Delete One ==
    /// Removes the first record matching `query`. Returns `false` if nothing matched.
    pub fn delete_one(&mut self, collection: &str, query: &Record) -> bool {
        let Some(records) = self.collections.get_mut(collection) else {
            return false;
        };
        let Some(index) = records.iter().position(|r| matches(r, query)) else {
            return false;
        };

        let removed = records.remove(index);
        debug!(collection, id = ?removed.get(ID_FIELD), "deleted record");
        true
    }

    // == Introspection ==
    /// Number of records in `collection`, zero if it does not exist.
    pub fn count(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    /// True when no collection holds a record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all collections created so far, sorted.
    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All collections as one JSON object of arrays.
    pub fn snapshot(&self) -> Value {
        let collections = self
            .collections
            .iter()
            .map(|(name, records)| {
                let records = records.iter().cloned().map(Value::Object).collect();
                (name.clone(), Value::Array(records))
            })
            .collect();
        Value::Object(collections)
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
