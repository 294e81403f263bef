//! # In-Memory Document Store
//!
//! Process-local implementation of [`DocumentStore`]. Backs the test suite
//! and single-node deployments; a managed document database would slot in
//! behind the same trait.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::{Map, Value};
use uuid::Uuid;

use super::document::Document;
use super::errors::{StoreError, StoreResult};
use super::filter::{compare_values, Filter};
use super::query::FindQuery;
use super::DocumentStore;

/// In-memory store: collection name -> documents in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_collection(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let guard = self
            .collections
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    /// Apply filters, then ordering, to a snapshot of a collection
    fn filtered_ordered(docs: Vec<Document>, query: &FindQuery) -> Vec<Document> {
        let mut docs: Vec<Document> = docs
            .into_iter()
            .filter(|doc| query.filters.iter().all(|f| f.matches(doc)))
            .collect();

        if let Some(order) = &query.order_by {
            docs.sort_by(|a, b| {
                let cmp = match (a.get(&order.field), b.get(&order.field)) {
                    (Some(a_val), Some(b_val)) => compare_values(a_val, b_val),
                    // Missing fields sort first, matching the store's collation
                    (None, Some(_)) => std::cmp::Ordering::Less,
                    (Some(_), None) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                };
                if order.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }

        docs
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Document>> {
        let docs = self.read_collection(collection)?;
        let mut docs = Self::filtered_ordered(docs, query);

        if let Some(cursor) = &query.start_after {
            // Resume strictly after the cursor document. An id absent from
            // the ordered sequence yields nothing rather than a restart.
            match docs.iter().position(|d| &d.id == cursor) {
                Some(pos) => {
                    docs.drain(..=pos);
                }
                None => docs.clear(),
            }
        }

        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }

        Ok(docs)
    }

    fn count(&self, collection: &str, filters: &[Filter]) -> StoreResult<usize> {
        let docs = self.read_collection(collection)?;
        Ok(docs
            .iter()
            .filter(|doc| filters.iter().all(|f| f.matches(doc)))
            .count())
    }

    fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let docs = self.read_collection(collection)?;
        Ok(docs.into_iter().find(|d| d.id == id))
    }

    fn insert(&self, collection: &str, fields: Map<String, Value>) -> StoreResult<Document> {
        let doc = Document::new(Uuid::new_v4().to_string(), fields);

        let mut guard = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(doc)
    }

    fn merge_update(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<Document> {
        let mut guard = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        let docs = guard.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.merge(fields);
                Ok(doc.clone())
            }
            None => {
                // Merge-write is an upsert, matching the backing store
                let doc = Document::new(id, fields);
                docs.push(doc.clone());
                Ok(doc)
            }
        }
    }

    fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut guard = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        if let Some(docs) = guard.get_mut(collection) {
            docs.retain(|d| d.id != id);
        }

        // Deleting an absent document is not an error, as in the backing store
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::query::OrderBy;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn seed_titles(store: &MemoryStore, titles: &[&str]) -> Vec<String> {
        titles
            .iter()
            .map(|t| {
                store
                    .insert("products", fields(json!({"title": t})))
                    .unwrap()
                    .id
            })
            .collect()
    }

    #[test]
    fn test_insert_assigns_id_and_get_round_trips() {
        let store = MemoryStore::new();
        let doc = store
            .insert("products", fields(json!({"title": "Shirt"})))
            .unwrap();
        assert!(!doc.id.is_empty());

        let fetched = store.get("products", &doc.id).unwrap().unwrap();
        assert_eq!(fetched.get_str("title"), Some("Shirt"));
    }

    #[test]
    fn test_find_orders_and_limits() {
        let store = MemoryStore::new();
        seed_titles(&store, &["Banana", "Apple", "Cherry"]);

        let query = FindQuery::default()
            .order_by(OrderBy::asc("title"))
            .limit(2);
        let docs = store.find("products", &query).unwrap();

        let titles: Vec<_> = docs.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_find_descending() {
        let store = MemoryStore::new();
        seed_titles(&store, &["Banana", "Apple", "Cherry"]);

        let query = FindQuery::default().order_by(OrderBy::desc("title"));
        let docs = store.find("products", &query).unwrap();

        let titles: Vec<_> = docs.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["Cherry", "Banana", "Apple"]);
    }

    #[test]
    fn test_start_after_resumes_strictly_after_cursor() {
        let store = MemoryStore::new();
        seed_titles(&store, &["A", "B", "C", "D"]);

        let ordered = store
            .find(
                "products",
                &FindQuery::default().order_by(OrderBy::asc("title")),
            )
            .unwrap();
        let cursor = ordered[1].id.clone(); // "B"

        let query = FindQuery::default()
            .order_by(OrderBy::asc("title"))
            .start_after(cursor);
        let docs = store.find("products", &query).unwrap();

        let titles: Vec<_> = docs.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["C", "D"]);
    }

    #[test]
    fn test_start_after_unknown_cursor_is_empty() {
        let store = MemoryStore::new();
        seed_titles(&store, &["A", "B"]);

        let query = FindQuery::default()
            .order_by(OrderBy::asc("title"))
            .start_after("no-such-id");
        assert!(store.find("products", &query).unwrap().is_empty());
    }

    #[test]
    fn test_count_with_filters() {
        let store = MemoryStore::new();
        store
            .insert("products", fields(json!({"category": "toys"})))
            .unwrap();
        store
            .insert("products", fields(json!({"category": "toys"})))
            .unwrap();
        store
            .insert("products", fields(json!({"category": "books"})))
            .unwrap();

        assert_eq!(store.count("products", &[]).unwrap(), 3);
        assert_eq!(
            store
                .count("products", &[Filter::eq("category", json!("toys"))])
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_merge_update_upserts() {
        let store = MemoryStore::new();
        let doc = store
            .merge_update("products", "fixed-id", fields(json!({"title": "New"})))
            .unwrap();
        assert_eq!(doc.id, "fixed-id");
        assert!(store.get("products", "fixed-id").unwrap().is_some());
    }

    #[test]
    fn test_delete_removes_document() {
        let store = MemoryStore::new();
        let doc = store
            .insert("products", fields(json!({"title": "Gone"})))
            .unwrap();

        store.delete("products", &doc.id).unwrap();
        assert!(store.get("products", &doc.id).unwrap().is_none());

        // Idempotent
        store.delete("products", &doc.id).unwrap();
    }
}
