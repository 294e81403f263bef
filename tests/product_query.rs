//! Product Listing Invariant Tests
//!
//! End-to-end checks of the paginated product listing over the in-memory
//! document store:
//! - Pagination metadata is internally consistent on every page
//! - Pages partition the ordered result set without overlap
//! - Filters narrow both the page contents and the reported total
//! - Out-of-range pages return an empty page with intact metadata

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Map, Value};

use stallcraft::catalog::ProductService;
use stallcraft::query::{ProductQuery, SortOrder};
use stallcraft::store::{DocumentStore, MemoryStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Seed `count` products titled "Item 00".."Item NN", alternating between
/// the "tools" and "toys" categories.
fn seeded_service(count: usize) -> ProductService {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let service = ProductService::new(Arc::clone(&store));

    for i in 0..count {
        let category = if i % 2 == 0 { "tools" } else { "toys" };
        service
            .create(fields(json!({
                "title": format!("Item {:02}", i),
                "category": category,
                "price": i as u64,
            })))
            .unwrap();
    }

    service
}

fn query(params: &[(&str, &str)]) -> ProductQuery {
    let map: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ProductQuery::parse(&map)
}

// =============================================================================
// Pagination Tests
// =============================================================================

/// Middle page of 25 items: correct slice, correct metadata.
#[test]
fn test_second_page_of_twenty_five() {
    let service = seeded_service(25);
    let page = service.list(&query(&[("page", "2"), ("limit", "10")])).unwrap();

    assert_eq!(page.products.len(), 10);
    assert_eq!(page.products[0].title.as_deref(), Some("Item 10"));
    assert_eq!(page.products[9].title.as_deref(), Some("Item 19"));

    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.skip, 10);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(page.pagination.has_next_page);
    assert!(page.pagination.has_prev_page);
}

/// A collection smaller than one page needs no probe query.
#[test]
fn test_first_page_no_skip() {
    let service = seeded_service(5);
    let page = service.list(&query(&[])).unwrap();

    assert_eq!(page.products.len(), 5);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next_page);
    assert!(!page.pagination.has_prev_page);
}

/// Pages partition the ordered set: no overlap, no gaps, union is everything.
#[test]
fn test_pages_partition_result_set() {
    let service = seeded_service(25);
    let mut seen = Vec::new();

    for page_no in 1..=3 {
        let page_param = page_no.to_string();
        let page = service
            .list(&query(&[("page", &page_param), ("limit", "10")]))
            .unwrap();
        for product in &page.products {
            seen.push(product.title.clone().unwrap());
        }
    }

    assert_eq!(seen.len(), 25);
    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 25, "pages overlapped or dropped items");
    assert_eq!(seen, sorted, "ascending order must hold across pages");
}

/// A page past the end of the data is empty but keeps its metadata.
#[test]
fn test_page_beyond_end_is_empty() {
    let service = seeded_service(25);
    let page = service
        .list(&query(&[("page", "100"), ("limit", "10")]))
        .unwrap();

    assert!(page.products.is_empty());
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.page, 100);
    assert_eq!(page.pagination.skip, 990);
    assert!(!page.pagination.has_next_page);
    assert!(page.pagination.has_prev_page);
}

/// A page number large enough to overflow the naive skip arithmetic is
/// still just an empty page, not a panic.
#[test]
fn test_huge_page_number_is_empty_page() {
    let service = seeded_service(5);
    let max = usize::MAX.to_string();
    let page = service
        .list(&query(&[("page", max.as_str()), ("limit", "10")]))
        .unwrap();

    assert!(page.products.is_empty());
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.skip, usize::MAX);
    assert!(!page.pagination.has_next_page);
}

/// Empty collection: empty page, zero totals.
#[test]
fn test_empty_collection() {
    let service = seeded_service(0);
    let page = service.list(&query(&[])).unwrap();

    assert!(page.products.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.total_pages, 0);
}

// =============================================================================
// Sorting Tests
// =============================================================================

/// Descending sort reverses the page order and the page contents.
#[test]
fn test_descending_sort() {
    let service = seeded_service(25);
    let page = service
        .list(&query(&[("sortOrder", "desc"), ("limit", "10")]))
        .unwrap();

    assert_eq!(page.products[0].title.as_deref(), Some("Item 24"));
    assert_eq!(page.products[9].title.as_deref(), Some("Item 15"));
    assert_eq!(page.sorting.sort_order, SortOrder::Desc);
}

/// Sorting on a non-title field still pages consistently.
#[test]
fn test_sort_by_other_field() {
    let service = seeded_service(25);
    let page = service
        .list(&query(&[("sortBy", "price"), ("sortOrder", "desc"), ("limit", "5")]))
        .unwrap();

    assert_eq!(page.products[0].title.as_deref(), Some("Item 24"));
    assert_eq!(page.sorting.sort_by, "price");
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Category filter narrows the page and the reported total.
#[test]
fn test_category_filter_narrows_total() {
    let service = seeded_service(25);
    let page = service
        .list(&query(&[("category", "tools"), ("limit", "10")]))
        .unwrap();

    // Items 0, 2, 4, ... 24 -> 13 of them
    assert_eq!(page.pagination.total, 13);
    assert_eq!(page.products.len(), 10);
    assert!(page
        .products
        .iter()
        .all(|p| p.category.as_deref() == Some("tools")));
    assert_eq!(page.filters.category.as_deref(), Some("tools"));
}

/// Title prefix match is case-sensitive and bounded above by the sentinel.
#[test]
fn test_title_prefix_is_case_sensitive() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let service = ProductService::new(Arc::clone(&store));

    for title in ["Shirt", "Shoes", "shorts", "Scarf", "Hat"] {
        service
            .create(fields(json!({ "title": title, "category": "apparel" })))
            .unwrap();
    }

    let page = service.list(&query(&[("title", "Sh")])).unwrap();
    let titles: Vec<_> = page
        .products
        .iter()
        .map(|p| p.title.as_deref().unwrap())
        .collect();

    assert_eq!(titles, vec!["Shirt", "Shoes"]);
    assert_eq!(page.pagination.total, 2);
}

/// The skip emulation respects active filters: page 2 of a filtered set
/// continues from the filtered page 1, not from the raw collection.
#[test]
fn test_filtered_pagination_across_pages() {
    let service = seeded_service(25);

    let page1 = service
        .list(&query(&[("category", "tools"), ("limit", "10")]))
        .unwrap();
    let page2 = service
        .list(&query(&[("category", "tools"), ("limit", "10"), ("page", "2")]))
        .unwrap();

    assert_eq!(page1.products.len(), 10);
    assert_eq!(page2.products.len(), 3);
    assert_eq!(page2.pagination.total, 13);
    assert!(!page2.pagination.has_next_page);

    let last_of_first = page1.products.last().unwrap().title.clone().unwrap();
    let first_of_second = page2.products[0].title.clone().unwrap();
    assert!(first_of_second > last_of_first);
}

/// Combined prefix and category filters apply together.
#[test]
fn test_title_and_category_combined() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let service = ProductService::new(Arc::clone(&store));

    for (title, category) in [
        ("Shirt", "apparel"),
        ("Shoes", "footwear"),
        ("Shelf", "furniture"),
    ] {
        service
            .create(fields(json!({ "title": title, "category": category })))
            .unwrap();
    }

    let page = service
        .list(&query(&[("title", "Sh"), ("category", "apparel")]))
        .unwrap();

    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.products[0].title.as_deref(), Some("Shirt"));
}

// =============================================================================
// Parameter Leniency Tests
// =============================================================================

/// Garbage paging parameters collapse to defaults instead of erroring.
#[test]
fn test_lenient_parameter_parsing() {
    let service = seeded_service(5);
    let page = service
        .list(&query(&[("page", "zero"), ("limit", "-3"), ("sortOrder", "DESC")]))
        .unwrap();

    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 10);
    // sortOrder comparison ignores case
    assert_eq!(page.sorting.sort_order, SortOrder::Desc);
    assert_eq!(page.products.len(), 5);
}
