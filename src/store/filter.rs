//! # Field Filters
//!
//! The predicate set a document store offers: equality and range match on a
//! single field. Prefix matching is approximated with a range pair, since
//! the store supports neither substring nor case-insensitive search.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;

/// Highest code point in the store's default string collation.
/// Appending it to a prefix turns `[prefix, prefix + SENTINEL)` into a
/// prefix match for everything sorting under that prefix.
pub const HIGH_SENTINEL: char = '\u{f8ff}';

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// Equals
    #[serde(rename = "eq")]
    Eq,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,
}

/// A single-field filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    /// Field to filter on
    pub field: String,

    /// Comparison operator
    pub op: FilterOp,

    /// Value to compare against
    pub value: Value,
}

impl Filter {
    /// Create a new filter
    pub fn new(field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Equality filter
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Check whether a document satisfies this filter.
    /// Documents missing the field never match.
    pub fn matches(&self, doc: &Document) -> bool {
        let Some(actual) = doc.get(&self.field) else {
            return false;
        };

        match self.op {
            FilterOp::Eq => actual == &self.value,
            FilterOp::Gte => compare_values(actual, &self.value) != Ordering::Less,
            FilterOp::Lt => compare_values(actual, &self.value) == Ordering::Less,
        }
    }
}

/// Build the range pair approximating a prefix match on `field`
pub fn prefix_range(field: &str, prefix: &str) -> [Filter; 2] {
    let upper = format!("{}{}", prefix, HIGH_SENTINEL);
    [
        Filter::new(field, FilterOp::Gte, Value::String(prefix.to_string())),
        Filter::new(field, FilterOp::Lt, Value::String(upper)),
    ]
}

/// Compare two JSON values the way the store orders them:
/// numbers numerically, strings lexicographically, anything else equal.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => Document::new("d1", map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_eq_filter_is_case_sensitive() {
        let filter = Filter::eq("category", json!("Apparel"));
        assert!(filter.matches(&doc(json!({"category": "Apparel"}))));
        assert!(!filter.matches(&doc(json!({"category": "apparel"}))));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let filter = Filter::eq("category", json!("x"));
        assert!(!filter.matches(&doc(json!({"title": "y"}))));
    }

    #[test]
    fn test_prefix_range_matches_prefixed_titles() {
        let [lower, upper] = prefix_range("title", "Sh");

        let shirt = doc(json!({"title": "Shirt"}));
        assert!(lower.matches(&shirt) && upper.matches(&shirt));

        let shoe = doc(json!({"title": "Shoe"}));
        assert!(lower.matches(&shoe) && upper.matches(&shoe));

        let scarf = doc(json!({"title": "Scarf"}));
        assert!(!(lower.matches(&scarf) && upper.matches(&scarf)));

        // Exact prefix is included: the range is [prefix, prefix+sentinel)
        let exact = doc(json!({"title": "Sh"}));
        assert!(lower.matches(&exact) && upper.matches(&exact));
    }

    #[test]
    fn test_compare_values_numbers_and_strings() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
        assert_eq!(compare_values(&json!(null), &json!("a")), Ordering::Equal);
    }
}
