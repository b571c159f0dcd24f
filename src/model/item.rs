//! Item domain types shared by the creation flow and its collaborators.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed classification taxonomy for items.
///
/// Every item belongs to exactly one category. The set is fixed at compile
/// time; there is no "unknown" member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    StudySupplies,
    DailySupplies,
    ClothingSupplies,
    FoodSupplies,
    HealthSupplies,
    BeautySupplies,
    EventSupplies,
    HobbySupplies,
    TransportSupplies,
    ChargingSupplies,
    WeatherSupplies,
    IdSupplies,
    OtherSupplies,
}

impl ItemCategory {
    /// All categories in picker order.
    pub const ALL: [ItemCategory; 13] = [
        ItemCategory::StudySupplies,
        ItemCategory::DailySupplies,
        ItemCategory::ClothingSupplies,
        ItemCategory::FoodSupplies,
        ItemCategory::HealthSupplies,
        ItemCategory::BeautySupplies,
        ItemCategory::EventSupplies,
        ItemCategory::HobbySupplies,
        ItemCategory::TransportSupplies,
        ItemCategory::ChargingSupplies,
        ItemCategory::WeatherSupplies,
        ItemCategory::IdSupplies,
        ItemCategory::OtherSupplies,
    ];
}

/// Non-authoritative form hint produced by a product lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
}

/// Handle to a captured photograph.
///
/// The underlying file is owned by the camera collaborator. Cloning the
/// reference shares the handle and never copies image data.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageReference(Arc<str>);

impl ImageReference {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// `file://` reference to an absolute, UTF-8 path. Returns `None`
    /// otherwise, since a relative path would read as a URI host.
    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.is_absolute() {
            return None;
        }
        let path = path.to_str()?;
        Some(Self(format!("file://{}", path).into()))
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageReference({})", self.0)
    }
}

/// Normalise a scanned or typed product code.
///
/// Returns the trimmed code, or `None` when it is empty or contains
/// anything other than ASCII alphanumerics and `-`.
pub fn product_code(raw: &str) -> Option<&str> {
    let code = raw.trim();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(code)
}

/// Validated payload handed to the item repository on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateItemCommand {
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub image: Option<ImageReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted entry in the user's item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub image: Option<ImageReference>,
}

impl Item {
    pub fn from_command(command: CreateItemCommand) -> Self {
        Self {
            id: ItemId::new(),
            name: command.name,
            description: command.description,
            category: command.category,
            image: command.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_once() {
        let mut seen = std::collections::HashSet::new();
        for category in ItemCategory::ALL {
            assert!(seen.insert(category));
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn image_reference_clone_shares_handle() {
        let image = ImageReference::new("content://camera/1");
        let copy = image.clone();
        assert!(Arc::ptr_eq(&image.0, &copy.0));
    }

    #[test]
    fn image_reference_from_path_uses_file_scheme() {
        let image = ImageReference::from_path(Path::new("/tmp/photo.jpg")).unwrap();
        assert_eq!(image.uri(), "file:///tmp/photo.jpg");
    }

    #[test]
    fn image_reference_rejects_relative_path() {
        assert_eq!(ImageReference::from_path(Path::new("photo.jpg")), None);
    }

    #[test]
    fn product_code_trims_and_validates() {
        assert_eq!(product_code(" 4901-23 "), Some("4901-23"));
        assert_eq!(product_code("ISBN 978"), None);
        assert_eq!(product_code("   "), None);
    }

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_string(&ItemCategory::IdSupplies).unwrap();
        assert_eq!(json, "\"id_supplies\"");
    }

    #[test]
    fn item_from_command_keeps_fields() {
        let item = Item::from_command(CreateItemCommand {
            name: "Notebook".into(),
            description: String::new(),
            category: ItemCategory::StudySupplies,
            image: None,
        });
        assert_eq!(item.name, "Notebook");
        assert_eq!(item.category, ItemCategory::StudySupplies);
        assert!(item.image.is_none());
    }
}
