//! Read-only inventory catalog: items, stock filters, and the dashboard summary.
//!
//! Items carry their own `quantity`/`min_stock` pair and are classified
//! independently through [`crate::stock`]. An item without a `min_stock`
//! uses the configured default threshold.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stock::{classify, StockBadge, StockReading, StockStatus};
use crate::{ConfigError, CoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub warehouse: Option<String>,
    pub supplier: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    pub min_stock: Option<u32>,
    #[serde(default)]
    pub unit_price: Decimal,
}

impl Item {
    #[must_use]
    pub fn min_stock_or(&self, default_min_stock: u32) -> u32 {
        self.min_stock.unwrap_or(default_min_stock)
    }

    #[must_use]
    pub fn reading(&self, default_min_stock: u32) -> StockReading {
        StockReading::new(self.quantity, self.min_stock_or(default_min_stock))
    }

    #[must_use]
    pub fn status(&self, default_min_stock: u32) -> StockStatus {
        classify(self.quantity, self.min_stock_or(default_min_stock))
    }

    /// `true` when the item is at or below its reorder threshold, including
    /// items that are out of stock entirely.
    #[must_use]
    pub fn is_low_stock(&self, default_min_stock: u32) -> bool {
        self.quantity <= self.min_stock_or(default_min_stock)
    }

    /// Value of the units on hand at the item's unit price, or `None` when
    /// the product does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_total_value(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Value of the units on hand at the item's unit price. Saturates at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.checked_total_value().unwrap_or(Decimal::MAX)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Load and validate an inventory catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_inventory(path: &Path) -> Result<InventoryFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InventoryFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let inventory: InventoryFile =
        serde_yaml::from_str(&content).map_err(ConfigError::InventoryFileParse)?;

    validate_inventory(&inventory)?;

    tracing::debug!(
        path = %path.display(),
        items = inventory.items.len(),
        "loaded inventory catalog"
    );

    Ok(inventory)
}

fn validate_inventory(inventory: &InventoryFile) -> Result<(), ConfigError> {
    let mut seen_codes = HashSet::new();
    let mut catalog_value = Decimal::ZERO;

    for item in &inventory.items {
        if item.code.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty code",
                item.name
            )));
        }

        if item.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty name",
                item.code
            )));
        }

        if item.unit_price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "item '{}' has negative unit price {}",
                item.code, item.unit_price
            )));
        }

        if !seen_codes.insert(item.code.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate item code: '{}'",
                item.code
            )));
        }

        let item_value = item.checked_total_value().ok_or_else(|| {
            ConfigError::Validation(format!(
                "item '{}' value overflows: {} x {}",
                item.code, item.quantity, item.unit_price
            ))
        })?;
        catalog_value = catalog_value.checked_add(item_value).ok_or_else(|| {
            ConfigError::Validation(format!("catalog value overflows at item '{}'", item.code))
        })?;
    }

    Ok(())
}

/// Stock filter used by item listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    #[default]
    All,
    /// At or below the reorder threshold, out-of-stock rows included.
    Low,
    Out,
}

impl StockFilter {
    #[must_use]
    pub fn matches(self, item: &Item, default_min_stock: u32) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::Low => item.is_low_stock(default_min_stock),
            StockFilter::Out => item.quantity == 0,
        }
    }
}

impl FromStr for StockFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StockFilter::All),
            "low" => Ok(StockFilter::Low),
            "out" => Ok(StockFilter::Out),
            _ => Err(CoreError::InvalidStockFilter(s.to_string())),
        }
    }
}

impl std::fmt::Display for StockFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockFilter::All => write!(f, "all"),
            StockFilter::Low => write!(f, "low"),
            StockFilter::Out => write!(f, "out"),
        }
    }
}

/// Search and filter criteria for an item listing.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against code, name, and description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub warehouse: Option<String>,
    pub stock: StockFilter,
}

impl ItemQuery {
    /// Returns the matching items ordered by name, then code.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Item], default_min_stock: u32) -> Vec<&'a Item> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<&Item> = items
            .iter()
            .filter(|item| needle.as_deref().is_none_or(|n| search_matches(item, n)))
            .filter(|item| field_matches(item.category.as_deref(), self.category.as_deref()))
            .filter(|item| field_matches(item.warehouse.as_deref(), self.warehouse.as_deref()))
            .filter(|item| self.stock.matches(item, default_min_stock))
            .collect();

        matched.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
        matched
    }
}

fn search_matches(item: &Item, needle: &str) -> bool {
    item.code.to_lowercase().contains(needle)
        || item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// An empty or absent filter matches everything.
fn field_matches(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        None => true,
        Some(wanted) => value.is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub in_stock: usize,
}

impl StatusCounts {
    fn record(&mut self, status: StockStatus) {
        match status {
            StockStatus::OutOfStock => self.out_of_stock += 1,
            StockStatus::LowStock => self.low_stock += 1,
            StockStatus::InStock => self.in_stock += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockEntry {
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub status: StockStatus,
}

/// Dashboard statistics for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_categories: usize,
    pub total_warehouses: usize,
    pub low_stock_count: usize,
    pub low_stock_preview: Vec<LowStockEntry>,
    pub total_value: Decimal,
    pub status_counts: StatusCounts,
}

impl InventorySummary {
    #[must_use]
    pub fn compute(items: &[Item], default_min_stock: u32, preview_limit: usize) -> Self {
        let categories: BTreeSet<String> = items
            .iter()
            .filter_map(|i| i.category.as_deref())
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        let warehouses: BTreeSet<String> = items
            .iter()
            .filter_map(|i| i.warehouse.as_deref())
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut status_counts = StatusCounts::default();
        let mut total_value = Decimal::ZERO;
        for item in items {
            status_counts.record(item.status(default_min_stock));
            total_value = total_value
                .checked_add(item.total_value())
                .unwrap_or(Decimal::MAX);
        }

        let low = ItemQuery {
            stock: StockFilter::Low,
            ..ItemQuery::default()
        }
        .apply(items, default_min_stock);

        let low_stock_preview = low
            .iter()
            .take(preview_limit)
            .map(|item| LowStockEntry {
                code: item.code.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                min_stock: item.min_stock_or(default_min_stock),
                status: item.status(default_min_stock),
            })
            .collect();

        Self {
            total_items: items.len(),
            total_categories: categories.len(),
            total_warehouses: warehouses.len(),
            low_stock_count: low.len(),
            low_stock_preview,
            total_value,
            status_counts,
        }
    }
}

/// Which item attribute a [`GroupSummary`] aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Warehouse,
}

impl GroupBy {
    fn key(self, item: &Item) -> Option<&str> {
        let value = match self {
            GroupBy::Category => item.category.as_deref(),
            GroupBy::Warehouse => item.warehouse.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupBy::Category => write!(f, "category"),
            GroupBy::Warehouse => write!(f, "warehouse"),
        }
    }
}

/// Name used for items that carry no category or warehouse.
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// One category or warehouse row. The group is itself a stock-bearing
/// entity: its badge classifies the summed quantity against the summed
/// thresholds of its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub item_count: usize,
    pub total_quantity: u32,
    pub total_min_stock: u32,
    pub low_stock_count: usize,
    pub total_value: Decimal,
    pub badge: StockBadge,
}

/// Aggregate items per category or warehouse, ordered by name.
///
/// Names are compared case-insensitively; the first spelling seen is kept.
#[must_use]
pub fn group_items(items: &[Item], by: GroupBy, default_min_stock: u32) -> Vec<GroupSummary> {
    struct Acc {
        name: String,
        item_count: usize,
        total_quantity: u32,
        total_min_stock: u32,
        low_stock_count: usize,
        total_value: Decimal,
    }

    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for item in items {
        let name = by.key(item).unwrap_or(UNASSIGNED_GROUP);
        let acc = groups.entry(name.to_lowercase()).or_insert_with(|| Acc {
            name: name.to_string(),
            item_count: 0,
            total_quantity: 0,
            total_min_stock: 0,
            low_stock_count: 0,
            total_value: Decimal::ZERO,
        });
        acc.item_count += 1;
        acc.total_quantity = acc.total_quantity.saturating_add(item.quantity);
        acc.total_min_stock = acc
            .total_min_stock
            .saturating_add(item.min_stock_or(default_min_stock));
        if item.is_low_stock(default_min_stock) {
            acc.low_stock_count += 1;
        }
        acc.total_value = acc
            .total_value
            .checked_add(item.total_value())
            .unwrap_or(Decimal::MAX);
    }

    tracing::debug!(by = %by, groups = groups.len(), "grouped inventory");

    groups
        .into_values()
        .map(|acc| GroupSummary {
            badge: classify(acc.total_quantity, acc.total_min_stock).badge(),
            name: acc.name,
            item_count: acc.item_count,
            total_quantity: acc.total_quantity,
            total_min_stock: acc.total_min_stock,
            low_stock_count: acc.low_stock_count,
            total_value: acc.total_value,
        })
        .collect()
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
