pub mod app_config;
pub mod config;
pub mod inventory;
pub mod parse;
pub mod stock;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use inventory::{
    group_items, load_inventory, GroupBy, GroupSummary, InventoryFile, InventorySummary, Item,
    ItemQuery, LowStockEntry, StatusCounts, StockFilter,
};
pub use parse::{parse_leading_int, parse_min_stock, parse_quantity};
pub use stock::{
    classify, Severity, StockBadge, StockClassifier, StockReading, StockStatus, DEFAULT_MIN_STOCK,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read inventory file {path}: {source}")]
    InventoryFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory file: {0}")]
    InventoryFileParse(#[source] serde_yaml::Error),

    #[error("inventory validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid stock filter: {0}; expected one of all, low, out")]
    InvalidStockFilter(String),
}
