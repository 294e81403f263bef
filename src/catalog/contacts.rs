//! # Contact Service
//!
//! Contacts are opaque documents; email and phone lookups are equality
//! queries taking the first match, emails and phones being assumed unique.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::store::{DocumentStore, Filter, FindQuery};

use super::errors::{CatalogError, CatalogResult};

/// Collection name for contacts
pub const CONTACTS: &str = "contacts";

/// Contact CRUD and lookups
pub struct ContactService {
    store: Arc<dyn DocumentStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, data: Map<String, Value>) -> CatalogResult<Value> {
        let doc = self.store.insert(CONTACTS, data)?;
        Ok(doc.to_value())
    }

    pub fn list_all(&self) -> CatalogResult<Vec<Value>> {
        let docs = self.store.find(CONTACTS, &FindQuery::default())?;
        Ok(docs.iter().map(|d| d.to_value()).collect())
    }

    pub fn get(&self, id: &str) -> CatalogResult<Value> {
        let doc = self
            .store
            .get(CONTACTS, id)?
            .ok_or(CatalogError::not_found("Contact"))?;
        Ok(doc.to_value())
    }

    pub fn get_by_email(&self, email: &str) -> CatalogResult<Value> {
        self.first_match(Filter::eq("email", email.into()))
    }

    pub fn get_by_phone(&self, phone: &str) -> CatalogResult<Value> {
        self.first_match(Filter::eq("phone", phone.into()))
    }

    pub fn update(&self, id: &str, data: Map<String, Value>) -> CatalogResult<Value> {
        let doc = self.store.merge_update(CONTACTS, id, data)?;
        Ok(doc.to_value())
    }

    pub fn delete(&self, id: &str) -> CatalogResult<String> {
        self.store.delete(CONTACTS, id)?;
        Ok(id.to_string())
    }

    fn first_match(&self, filter: Filter) -> CatalogResult<Value> {
        let query = FindQuery::filtered(vec![filter]).limit(1);
        let docs = self.store.find(CONTACTS, &query)?;
        docs.first()
            .map(|d| d.to_value())
            .ok_or(CatalogError::not_found("Contact"))
    }
}
