//! # Product Service
//!
//! CRUD passthroughs to the document store plus listing via the planner.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::query::{ProductPage, ProductQuery, QueryPlanner, QueryResult};
use crate::store::DocumentStore;

use super::errors::{CatalogError, CatalogResult};
use super::product::{Product, PRODUCTS};

/// Product CRUD and listing
pub struct ProductService {
    store: Arc<dyn DocumentStore>,
    planner: QueryPlanner,
}

impl ProductService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let planner = QueryPlanner::new(store.clone());
        Self { store, planner }
    }

    /// Insert a new product
    pub fn create(&self, data: Map<String, Value>) -> CatalogResult<Product> {
        let doc = self.store.insert(PRODUCTS, data)?;
        Ok(Product::from_document(&doc))
    }

    /// Paginated, filtered, sorted listing
    pub fn list(&self, query: &ProductQuery) -> QueryResult<ProductPage> {
        self.planner.list(query)
    }

    /// Fetch a single product by id
    pub fn get(&self, id: &str) -> CatalogResult<Product> {
        let doc = self
            .store
            .get(PRODUCTS, id)?
            .ok_or(CatalogError::not_found("Product"))?;
        Ok(Product::from_document(&doc))
    }

    /// Merge-write an update, then return the merged document
    pub fn update(&self, id: &str, data: Map<String, Value>) -> CatalogResult<Product> {
        let doc = self.store.merge_update(PRODUCTS, id, data)?;
        Ok(Product::from_document(&doc))
    }

    /// Delete a product; returns the id that was removed
    pub fn delete(&self, id: &str) -> CatalogResult<String> {
        self.store.delete(PRODUCTS, id)?;
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

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_create_then_get() {
        let svc = service();
        let created = svc
            .create(fields(json!({"title": "Shirt", "category": "apparel"})))
            .unwrap();

        let fetched = svc.get(&created.id).unwrap();
        assert_eq!(fetched.title.as_deref(), Some("Shirt"));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let err = service().get("nope").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: "Product" }));
    }

    #[test]
    fn test_update_merges_and_returns_merged_document() {
        let svc = service();
        let created = svc
            .create(fields(json!({"title": "Shirt", "category": "apparel", "price": 10})))
            .unwrap();

        let updated = svc
            .update(&created.id, fields(json!({"category": "new"})))
            .unwrap();

        assert_eq!(updated.category.as_deref(), Some("new"));
        assert_eq!(updated.title.as_deref(), Some("Shirt"));
        assert_eq!(updated.extra["price"], json!(10));
    }

    #[test]
    fn test_delete_returns_id() {
        let svc = service();
        let created = svc.create(fields(json!({"title": "Gone"}))).unwrap();

        assert_eq!(svc.delete(&created.id).unwrap(), created.id);
        assert!(svc.get(&created.id).is_err());
    }

    #[test]
    fn test_list_goes_through_planner() {
        let svc = service();
        for i in 0..3 {
            svc.create(fields(json!({"title": format!("P{}", i)})))
                .unwrap();
        }

        let page = svc.list(&ProductQuery::default()).unwrap();
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.pagination.total, 3);
    }
}
