//! # Product Query Planner
//!
//! Translates a page/limit/sort/filter request into the query sequence a
//! cursor-based document store can execute, then assembles the paginated
//! response. Read-only: two to three sequential store reads per request
//! (optional skip probe, page fetch, count), no retries, no partial results.

use std::sync::Arc;

use crate::catalog::product::{Product, PRODUCTS};
use crate::store::{prefix_range, DocumentStore, Filter, FindQuery, OrderBy};

use super::errors::QueryResult;
use super::page::ProductPage;
use super::params::ProductQuery;

/// Plans and executes product listing queries
pub struct QueryPlanner {
    store: Arc<dyn DocumentStore>,
}

impl QueryPlanner {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Produce the requested slice of the product collection.
    ///
    /// The store has no offset-skip, so pages past the first are reached by
    /// a probe query bounded to `(page-1)*limit` whose last document becomes
    /// the `start_after` cursor for the page fetch. A probe that comes back
    /// short means the page lies beyond the end of the filtered set; the
    /// result is then an empty page, never a silent restart from page one.
    pub fn list(&self, query: &ProductQuery) -> QueryResult<ProductPage> {
        let filters = Self::build_filters(query);
        let order = Self::build_order(query);

        let page_query = FindQuery::filtered(filters.clone())
            .order_by(order.clone())
            .limit(query.limit);

        let calculated_skip = query.skip();
        let docs = if calculated_skip > 0 {
            let probe = FindQuery::filtered(filters.clone())
                .order_by(order)
                .limit(calculated_skip);
            let probe_docs = self.store.find(PRODUCTS, &probe)?;

            match probe_docs.last() {
                Some(last) if probe_docs.len() == calculated_skip => {
                    let resumed = page_query.start_after(last.id.clone());
                    self.store.find(PRODUCTS, &resumed)?
                }
                // Requested page is beyond the end of the filtered set
                _ => Vec::new(),
            }
        } else {
            self.store.find(PRODUCTS, &page_query)?
        };

        // Counted with the active filters so total_pages describes the set
        // actually being paginated
        let total = self.store.count(PRODUCTS, &filters)?;

        let products = docs.iter().map(Product::from_document).collect();
        Ok(ProductPage::assemble(products, total, query))
    }

    /// Base filter set: title prefix range plus category equality
    fn build_filters(query: &ProductQuery) -> Vec<Filter> {
        let mut filters = Vec::new();

        if let Some(title) = &query.title {
            filters.extend(prefix_range("title", title));
        }
        if let Some(category) = &query.category {
            filters.push(Filter::eq("category", category.as_str().into()));
        }

        filters
    }

    fn build_order(query: &ProductQuery) -> OrderBy {
        if query.sort_order.is_ascending() {
            OrderBy::asc(&query.sort_by)
        } else {
            OrderBy::desc(&query.sort_by)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::params::SortOrder;
    use crate::store::MemoryStore;
    use serde_json::{json, Map, Value};
    use std::collections::HashMap;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn seeded(n: usize) -> QueryPlanner {
        let store = Arc::new(MemoryStore::new());
        for i in 0..n {
            store
                .insert(
                    PRODUCTS,
                    fields(json!({
                        "title": format!("Item {:02}", i),
                        "category": if i % 2 == 0 { "even" } else { "odd" },
                    })),
                )
                .unwrap();
        }
        QueryPlanner::new(store)
    }

    fn query(pairs: &[(&str, &str)]) -> ProductQuery {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProductQuery::parse(&map)
    }

    #[test]
    fn test_first_page_defaults() {
        let planner = seeded(25);
        let page = planner.list(&ProductQuery::default()).unwrap();

        assert_eq!(page.products.len(), 10);
        assert_eq!(page.products[0].title.as_deref(), Some("Item 00"));
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
    }

    #[test]
    fn test_second_page_returns_items_11_through_20() {
        let planner = seeded(25);
        let page = planner.list(&query(&[("page", "2"), ("limit", "10")])).unwrap();

        let titles: Vec<_> = page
            .products
            .iter()
            .map(|p| p.title.as_deref().unwrap().to_string())
            .collect();
        assert_eq!(titles.first().map(String::as_str), Some("Item 10"));
        assert_eq!(titles.last().map(String::as_str), Some("Item 19"));
        assert_eq!(titles.len(), 10);

        assert_eq!(page.pagination.skip, 10);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn test_small_collection_single_page() {
        let planner = seeded(5);
        let page = planner.list(&ProductQuery::default()).unwrap();

        assert_eq!(page.products.len(), 5);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let planner = seeded(5);
        let page = planner
            .list(&query(&[("page", "100"), ("limit", "10")]))
            .unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.page, 100);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn test_descending_sort() {
        let planner = seeded(5);
        let page = planner
            .list(&query(&[("sortOrder", "desc")]))
            .unwrap();

        let titles: Vec<_> = page
            .products
            .iter()
            .map(|p| p.title.clone().unwrap())
            .collect();
        let mut expected = titles.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(titles, expected);
        assert_eq!(page.sorting.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_category_filter_and_filtered_total() {
        let planner = seeded(10);
        let page = planner.list(&query(&[("category", "even")])).unwrap();

        assert_eq!(page.products.len(), 5);
        assert!(page
            .products
            .iter()
            .all(|p| p.category.as_deref() == Some("even")));
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_title_prefix_filter() {
        let store = Arc::new(MemoryStore::new());
        for title in ["Shirt", "Shoes", "Scarf", "shorts"] {
            store
                .insert(PRODUCTS, fields(json!({"title": title})))
                .unwrap();
        }
        let planner = QueryPlanner::new(store);

        let page = planner.list(&query(&[("title", "Sh")])).unwrap();
        let titles: Vec<_> = page
            .products
            .iter()
            .map(|p| p.title.clone().unwrap())
            .collect();

        // Prefix match is case-sensitive: "shorts" and "Scarf" fall outside
        // the ["Sh", "Sh\u{f8ff}") range
        assert_eq!(titles, vec!["Shirt", "Shoes"]);
        assert_eq!(page.pagination.total, 2);
    }

    #[test]
    fn test_pagination_with_filter_across_pages() {
        let planner = seeded(25); // 13 even, 12 odd
        let page = planner
            .list(&query(&[("category", "even"), ("page", "2"), ("limit", "5")]))
            .unwrap();

        assert_eq!(page.products.len(), 5);
        assert_eq!(page.pagination.total, 13);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
    }
}
