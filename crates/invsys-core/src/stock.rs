//! Stock-status classification for stock-bearing entities.
//!
//! A [`StockReading`] is a transient `(quantity, min_stock)` pair. Its
//! [`StockStatus`] is derived on demand and never stored, so the same reading
//! always classifies the same way regardless of what else has been classified.

use serde::{Deserialize, Serialize};

use crate::parse::{parse_min_stock, parse_quantity};

/// Reorder threshold used when a reading carries no usable minimum.
pub const DEFAULT_MIN_STOCK: u32 = 10;

/// Display bucket for a stock status. Drives colour coding only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Success,
}

impl Severity {
    /// The fixed badge class a host applies for this severity.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::Danger => "badge bg-danger",
            Severity::Warning => "badge bg-warning",
            Severity::Success => "badge bg-success",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Danger => write!(f, "danger"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Human-readable label shown on the badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            StockStatus::OutOfStock => Severity::Danger,
            StockStatus::LowStock => Severity::Warning,
            StockStatus::InStock => Severity::Success,
        }
    }

    /// The `(label, severity)` pair handed back to the host.
    #[must_use]
    pub fn badge(self) -> StockBadge {
        StockBadge {
            status: self,
            label: self.label(),
            severity: self.severity(),
            class: self.severity().badge_class(),
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a host needs to render one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockBadge {
    pub status: StockStatus,
    pub label: &'static str,
    pub severity: Severity,
    pub class: &'static str,
}

/// Classify a normalized reading. First match wins:
/// zero is out of stock, anything at or below `min_stock` is low, the rest is in stock.
#[must_use]
pub fn classify(quantity: u32, min_stock: u32) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity <= min_stock {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReading {
    pub quantity: u32,
    pub min_stock: u32,
}

impl StockReading {
    #[must_use]
    pub fn new(quantity: u32, min_stock: u32) -> Self {
        Self {
            quantity,
            min_stock,
        }
    }

    #[must_use]
    pub fn status(&self) -> StockStatus {
        classify(self.quantity, self.min_stock)
    }
}

/// Builds readings from raw host fields, filling a missing threshold from a
/// configurable default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockClassifier {
    default_min_stock: u32,
}

impl Default for StockClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_STOCK)
    }
}

impl StockClassifier {
    #[must_use]
    pub fn new(default_min_stock: u32) -> Self {
        Self { default_min_stock }
    }

    #[must_use]
    pub fn default_min_stock(&self) -> u32 {
        self.default_min_stock
    }

    /// Normalize raw quantity and threshold fields into a reading.
    ///
    /// Never fails: an unparsable or negative quantity becomes `0`, an
    /// unparsable or negative threshold becomes the default.
    #[must_use]
    pub fn reading(&self, quantity: Option<&str>, min_stock: Option<&str>) -> StockReading {
        StockReading::new(
            parse_quantity(quantity),
            parse_min_stock(min_stock, self.default_min_stock),
        )
    }

    #[must_use]
    pub fn classify_raw(&self, quantity: Option<&str>, min_stock: Option<&str>) -> StockStatus {
        self.reading(quantity, min_stock).status()
    }

    /// Classify a reading whose threshold may be absent.
    #[must_use]
    pub fn classify(&self, quantity: u32, min_stock: Option<u32>) -> StockStatus {
        classify(quantity, min_stock.unwrap_or(self.default_min_stock))
    }
}

#[cfg(test)]
#[path = "stock_test.rs"]
mod tests;
