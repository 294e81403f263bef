//! # Product Lead Service
//!
//! Product leads are opaque documents; every operation is a single store
//! call.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::store::{DocumentStore, FindQuery};

use super::errors::{CatalogError, CatalogResult};

/// Collection name for product leads
pub const PRODUCT_LEADS: &str = "productLeads";

/// Product lead CRUD
pub struct LeadService {
    store: Arc<dyn DocumentStore>,
}

impl LeadService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, data: Map<String, Value>) -> CatalogResult<Value> {
        let doc = self.store.insert(PRODUCT_LEADS, data)?;
        Ok(doc.to_value())
    }

    pub fn list_all(&self) -> CatalogResult<Vec<Value>> {
        let docs = self.store.find(PRODUCT_LEADS, &FindQuery::default())?;
        Ok(docs.iter().map(|d| d.to_value()).collect())
    }

    pub fn get(&self, id: &str) -> CatalogResult<Value> {
        let doc = self
            .store
            .get(PRODUCT_LEADS, id)?
            .ok_or(CatalogError::not_found("ProductLead"))?;
        Ok(doc.to_value())
    }

    pub fn update(&self, id: &str, data: Map<String, Value>) -> CatalogResult<Value> {
        let doc = self.store.merge_update(PRODUCT_LEADS, id, data)?;
        Ok(doc.to_value())
    }

    pub fn delete(&self, id: &str) -> CatalogResult<String> {
        self.store.delete(PRODUCT_LEADS, id)?;
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_crud_round_trip() {
        let svc = LeadService::new(Arc::new(MemoryStore::new()));

        let created = svc
            .create(fields(json!({"product": "Shirt", "email": "x@y.z"})))
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        assert_eq!(svc.get(&id).unwrap()["product"], "Shirt");
        assert_eq!(svc.list_all().unwrap().len(), 1);

        let updated = svc.update(&id, fields(json!({"status": "contacted"}))).unwrap();
        assert_eq!(updated["product"], "Shirt");
        assert_eq!(updated["status"], "contacted");

        svc.delete(&id).unwrap();
        assert!(svc.get(&id).is_err());
    }
}
