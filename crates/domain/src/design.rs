//! Design — a named room layout with its placed furniture.
//!
//! A design is stored and returned as one document. Saving replaces the whole
//! document; there is no partial update.

use serde::{Deserialize, Serialize};

use crate::id::DesignId;

/// Name reported in summaries when a stored design has none.
pub const UNTITLED_DESIGN: &str = "Untitled";

/// Default floor colour for [`RoomStyle`].
pub const DEFAULT_FLOOR_COLOR: &str = "#555555";
/// Default wall colour for [`RoomStyle`].
pub const DEFAULT_WALL_COLOR: &str = "#f0f0f0";
/// Default colour for furniture and catalog items.
pub const DEFAULT_ITEM_COLOR: &str = "#ffffff";
/// Default furniture `type`.
pub const DEFAULT_FURNITURE_TYPE: &str = "box";

/// A complete room layout as submitted by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDesign {
    pub name: String,
    pub room_dimensions: RoomDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_style: Option<RoomStyle>,
    pub furniture: Vec<FurnitureItem>,
}

impl RoomDesign {
    /// Create an empty design with the given name and floor size.
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, length: f64) -> Self {
        Self {
            name: name.into(),
            room_dimensions: RoomDimensions { width, length },
            room_style: None,
            furniture: Vec::new(),
        }
    }

    /// Append a furniture item, keeping submission order.
    #[must_use]
    pub fn with_furniture(mut self, item: FurnitureItem) -> Self {
        self.furniture.push(item);
        self
    }

    /// Set the room style.
    #[must_use]
    pub fn with_style(mut self, style: RoomStyle) -> Self {
        self.room_style = Some(style);
        self
    }
}

/// Floor size of a room. No range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub length: f64,
}

/// Floor and wall colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStyle {
    #[serde(default = "default_floor_color")]
    pub floor_color: String,
    #[serde(default = "default_wall_color")]
    pub wall_color: String,
}

impl Default for RoomStyle {
    fn default() -> Self {
        Self {
            floor_color: default_floor_color(),
            wall_color: default_wall_color(),
        }
    }
}

/// One object placed inside a design.
///
/// `id` is assigned by the editor and expected to be unique within the owning
/// design; the store does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default = "default_furniture_type")]
    pub kind: String,
    pub position: [f64; 3],
    pub dimensions: [f64; 3],
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_item_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
}

impl FurnitureItem {
    /// Create an item with default type, rotation and colour.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: [f64; 3],
        dimensions: [f64; 3],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: default_furniture_type(),
            position,
            dimensions,
            rotation: 0.0,
            color: default_item_color(),
            model_url: None,
        }
    }
}

/// A design as held by the store: the submitted document plus its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDesign {
    #[serde(rename = "_id")]
    pub id: DesignId,
    #[serde(flatten)]
    pub design: RoomDesign,
}

/// Identifier and name of a stored design, without its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: DesignId,
    pub name: String,
}

impl DesignSummary {
    /// Build a summary, substituting [`UNTITLED_DESIGN`] for a missing name.
    #[must_use]
    pub fn new(id: DesignId, name: Option<String>) -> Self {
        Self {
            id,
            name: name.unwrap_or_else(|| UNTITLED_DESIGN.to_string()),
        }
    }
}

fn default_floor_color() -> String {
    DEFAULT_FLOOR_COLOR.to_string()
}

fn default_wall_color() -> String {
    DEFAULT_WALL_COLOR.to_string()
}

pub(crate) fn default_item_color() -> String {
    DEFAULT_ITEM_COLOR.to_string()
}

fn default_furniture_type() -> String {
    DEFAULT_FURNITURE_TYPE.to_string()
}
