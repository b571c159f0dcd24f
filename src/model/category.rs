//! Category display labels and parsing.

use std::str::FromStr;

use thiserror::Error;

use super::item::ItemCategory;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// Human-readable label for a category.
///
/// Total over the enumeration: adding a variant without a label is a
/// compile error.
pub fn display_label(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::StudySupplies => "学業用品",
        ItemCategory::DailySupplies => "生活用品",
        ItemCategory::ClothingSupplies => "衣類用品",
        ItemCategory::FoodSupplies => "食事用品",
        ItemCategory::HealthSupplies => "健康用品",
        ItemCategory::BeautySupplies => "美容用品",
        ItemCategory::EventSupplies => "イベント用品",
        ItemCategory::HobbySupplies => "趣味用品",
        ItemCategory::TransportSupplies => "交通用品",
        ItemCategory::ChargingSupplies => "充電用品",
        ItemCategory::WeatherSupplies => "天候対策用品",
        ItemCategory::IdSupplies => "証明用品",
        ItemCategory::OtherSupplies => "その他用品",
    }
}

impl ItemCategory {
    /// Stable short key used on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            ItemCategory::StudySupplies => "study",
            ItemCategory::DailySupplies => "daily",
            ItemCategory::ClothingSupplies => "clothing",
            ItemCategory::FoodSupplies => "food",
            ItemCategory::HealthSupplies => "health",
            ItemCategory::BeautySupplies => "beauty",
            ItemCategory::EventSupplies => "event",
            ItemCategory::HobbySupplies => "hobby",
            ItemCategory::TransportSupplies => "transport",
            ItemCategory::ChargingSupplies => "charging",
            ItemCategory::WeatherSupplies => "weather",
            ItemCategory::IdSupplies => "id",
            ItemCategory::OtherSupplies => "other",
        }
    }

    pub fn label(self) -> &'static str {
        display_label(self)
    }
}

impl FromStr for ItemCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ItemCategory::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
