use serde::{Deserialize, Serialize};

use crate::model::ItemCategory;
use crate::ui::navigation::Route;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Offline product catalogue used for code lookups.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Screen shown after an item is created (default: "items").
    #[serde(default = "default_start_route")]
    pub start_route: Route,
    /// Capacity of the serialized event queue (default: 64).
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// One product known to the offline catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Barcode or typed product code.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ItemCategory,
}

fn default_start_route() -> Route {
    Route::new("items")
}

fn default_event_queue_capacity() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            event_queue_capacity: default_event_queue_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
