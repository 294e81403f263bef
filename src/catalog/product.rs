//! # Product Model
//!
//! Products carry a handful of conventional fields plus whatever else the
//! storefront put in them; nothing beyond the conventions is enforced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Document;

/// Collection name for products
pub const PRODUCTS: &str = "products";

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,

    /// Display title; prefix-filter and default sort key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Category used for equality filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Signed URL of the product image, if one was uploaded
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Canonical blob path of the image. Stored alongside the URL so
    /// replacement never has to parse a path back out of a URL.
    #[serde(rename = "imagePath", skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Any other attributes, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Build a product from a stored document, preserving all fields
    pub fn from_document(doc: &Document) -> Self {
        let mut extra = doc.fields.clone();
        let title = take_string(&mut extra, "title");
        let category = take_string(&mut extra, "category");
        let image_url = take_string(&mut extra, "imageUrl");
        let image_path = take_string(&mut extra, "imagePath");

        Self {
            id: doc.id.clone(),
            title,
            category,
            image_url,
            image_path,
            extra,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            // Non-string values stay in the opaque bag
            fields.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_document_preserves_extra_fields() {
        let doc = Document::new(
            "p1",
            fields(json!({
                "title": "Shirt",
                "category": "apparel",
                "price": 19.99,
                "inStock": true,
            })),
        );

        let product = Product::from_document(&doc);
        assert_eq!(product.id, "p1");
        assert_eq!(product.title.as_deref(), Some("Shirt"));
        assert_eq!(product.category.as_deref(), Some("apparel"));
        assert_eq!(product.extra["price"], json!(19.99));
        assert_eq!(product.extra["inStock"], json!(true));
    }

    #[test]
    fn test_serialization_flattens_extra() {
        let doc = Document::new(
            "p1",
            fields(json!({"title": "Shirt", "imageUrl": "https://x/y", "imagePath": "stall-craft/y", "stock": 3})),
        );
        let json = serde_json::to_value(Product::from_document(&doc)).unwrap();

        assert_eq!(json["id"], "p1");
        assert_eq!(json["imageUrl"], "https://x/y");
        assert_eq!(json["imagePath"], "stall-craft/y");
        assert_eq!(json["stock"], 3);
        assert!(json.get("extra").is_none());
    }
}
