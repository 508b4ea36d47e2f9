//! Catalog — reusable furniture templates offered to the editor.

use serde::{Deserialize, Serialize};

use crate::design::default_item_color;

/// Default catalog item `type`.
pub const DEFAULT_CATALOG_TYPE: &str = "model";
/// Default catalog item `category`.
pub const DEFAULT_CATEGORY: &str = "general";

/// A furniture template, independent of any design.
///
/// `id` is a business key chosen by whoever seeds the catalog. It is distinct
/// from the identifier the store assigns (see [`StoredCatalogItem`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default = "default_catalog_type")]
    pub kind: String,
    pub dimensions: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default = "default_item_color")]
    pub color: String,
    #[serde(default = "default_category")]
    pub category: String,
}

impl CatalogItem {
    /// Create an item with default type, colour and category.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, dimensions: [f64; 3]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: default_catalog_type(),
            dimensions,
            model_url: None,
            color: default_item_color(),
            category: default_category(),
        }
    }

    #[must_use]
    pub fn model_url(mut self, url: impl Into<String>) -> Self {
        self.model_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// A catalog item as read back from the store.
///
/// The store identifier is always rendered as a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCatalogItem {
    #[serde(rename = "_id")]
    pub store_id: String,
    #[serde(flatten)]
    pub item: CatalogItem,
}

/// The built-in catalog written by the seed operation.
///
/// Dimensions are metres, `[width, height, depth]`.
#[must_use]
pub fn seed_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("item-bed-001", "Double Bed", [1.8, 0.5, 2.0])
            .model_url("/models/bed.glb")
            .color("#E57373")
            .category("bedroom"),
        CatalogItem::new("item-desk-001", "Office Desk", [1.2, 0.75, 0.6])
            .model_url("/models/desk.glb")
            .color("#FFF176")
            .category("office"),
        CatalogItem::new("item-wardrobe-001", "Wardrobe", [0.8, 2.0, 0.6])
            .model_url("/models/wardrobe.glb")
            .color("#81C784")
            .category("bedroom"),
        CatalogItem::new("item-chair-001", "Chair", [0.5, 0.5, 0.5])
            .model_url("/models/chair.glb")
            .color("#64B5F6")
            .category("office"),
        CatalogItem::new("item-sofa-001", "Sofa", [2.0, 0.8, 0.9])
            .model_url("/models/sofa.glb")
            .category("living-room"),
    ]
}

fn default_catalog_type() -> String {
    DEFAULT_CATALOG_TYPE.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_seed_five_items_with_unique_ids() {
        let items = seed_items();
        assert_eq!(items.len(), 5);

        let mut ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn should_seed_bedroom_bed() {
        let items = seed_items();
        let bed = items.iter().find(|item| item.id == "item-bed-001").unwrap();
        assert_eq!(bed.category, "bedroom");
        assert_eq!(bed.model_url.as_deref(), Some("/models/bed.glb"));
        assert_eq!(bed.kind, "model");
    }

    #[test]
    fn should_apply_catalog_defaults_when_fields_missing() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "item-x",
            "name": "Crate",
            "dimensions": [0.4, 0.4, 0.4]
        }))
        .unwrap();

        assert_eq!(item.kind, "model");
        assert_eq!(item.color, "#ffffff");
        assert_eq!(item.category, "general");
        assert!(item.model_url.is_none());
    }

    #[test]
    fn should_render_store_id_next_to_business_id() {
        let stored = StoredCatalogItem {
            store_id: "42".to_string(),
            item: CatalogItem::new("item-x", "Crate", [0.4, 0.4, 0.4]),
        };
        let value = serde_json::to_value(&stored).unwrap();

        assert_eq!(value["_id"], "42");
        assert_eq!(value["id"], "item-x");
        assert_eq!(value["category"], "general");
    }
}
