//! Catalog command handlers for the CLI.
//!
//! Every row is classified on its own `quantity`/`min_stock` pair, so the
//! badge printed for one item never depends on the other rows.

use std::path::Path;

use invsys_core::{
    group_items, AppConfig, GroupBy, GroupSummary, InventoryFile, InventorySummary, Item,
    ItemQuery, StockBadge,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// One listed item together with the badge a page would render for it.
#[derive(Debug, Serialize)]
pub(crate) struct ItemRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub warehouse: Option<&'a str>,
    pub quantity: u32,
    pub min_stock: u32,
    pub total_value: Decimal,
    pub badge: StockBadge,
}

impl<'a> ItemRow<'a> {
    pub(crate) fn new(item: &'a Item, default_min_stock: u32) -> Self {
        if item.min_stock.is_none() {
            tracing::debug!(
                item = %item.code,
                default_min_stock,
                "no min_stock set; using default threshold"
            );
        }
        Self {
            code: &item.code,
            name: &item.name,
            category: item.category.as_deref(),
            warehouse: item.warehouse.as_deref(),
            quantity: item.quantity,
            min_stock: item.min_stock_or(default_min_stock),
            total_value: item.total_value(),
            badge: item.status(default_min_stock).badge(),
        }
    }
}

fn load(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<InventoryFile> {
    let path = path.unwrap_or(config.inventory_path.as_path());
    let inventory = invsys_core::load_inventory(path)?;
    Ok(inventory)
}

/// Truncate to `max` characters, appending `...` when cut.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max).collect::<String>())
    } else {
        value.to_string()
    }
}

pub(crate) fn render_items_table(rows: &[ItemRow<'_>]) -> String {
    let mut out = format!(
        "{:<16}{:<34}{:>8}{:>8}  {:<14}CLASS\n",
        "CODE", "NAME", "QTY", "MIN", "STATUS"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<16}{:<34}{:>8}{:>8}  {:<14}{}\n",
            truncate(row.code, 15),
            truncate(row.name, 30),
            row.quantity,
            row.min_stock,
            row.badge.label,
            row.badge.class
        ));
    }
    out
}

pub(crate) fn render_summary(summary: &InventorySummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Items:       {}\n", summary.total_items));
    out.push_str(&format!("Categories:  {}\n", summary.total_categories));
    out.push_str(&format!("Warehouses:  {}\n", summary.total_warehouses));
    out.push_str(&format!("Low stock:   {}\n", summary.low_stock_count));
    out.push_str(&format!(
        "Total value: {}\n",
        summary.total_value.round_dp(2)
    ));
    out.push_str(&format!(
        "Status:      {} in stock, {} low stock, {} out of stock\n",
        summary.status_counts.in_stock,
        summary.status_counts.low_stock,
        summary.status_counts.out_of_stock
    ));

    if !summary.low_stock_preview.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{:<16}{:<34}{:>8}{:>8}  STATUS\n",
            "CODE", "NAME", "QTY", "MIN"
        ));
        for entry in &summary.low_stock_preview {
            out.push_str(&format!(
                "{:<16}{:<34}{:>8}{:>8}  {}\n",
                truncate(&entry.code, 15),
                truncate(&entry.name, 30),
                entry.quantity,
                entry.min_stock,
                entry.status
            ));
        }
    }
    out
}

pub(crate) fn render_groups_table(by: GroupBy, groups: &[GroupSummary]) -> String {
    let heading = match by {
        GroupBy::Category => "CATEGORY",
        GroupBy::Warehouse => "WAREHOUSE",
    };
    let mut out = format!(
        "{:<32}{:>7}{:>10}{:>10}{:>6}  {:<14}CLASS\n",
        heading, "ITEMS", "QTY", "MIN", "LOW", "STATUS"
    );
    for group in groups {
        out.push_str(&format!(
            "{:<32}{:>7}{:>10}{:>10}{:>6}  {:<14}{}\n",
            truncate(&group.name, 30),
            group.item_count,
            group.total_quantity,
            group.total_min_stock,
            group.low_stock_count,
            group.badge.label,
            group.badge.class
        ));
    }
    out
}

/// Build the `items` output for `query`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn items_output(
    config: &AppConfig,
    path: Option<&Path>,
    query: &ItemQuery,
    json: bool,
) -> anyhow::Result<String> {
    let inventory = load(config, path)?;
    let matched = query.apply(&inventory.items, config.default_min_stock);
    tracing::info!(
        total = inventory.items.len(),
        matched = matched.len(),
        stock = %query.stock,
        "filtered inventory"
    );

    let rows: Vec<ItemRow<'_>> = matched
        .into_iter()
        .map(|item| ItemRow::new(item, config.default_min_stock))
        .collect();

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?));
    }
    if rows.is_empty() {
        return Ok("no items match the given filters\n".to_string());
    }
    Ok(render_items_table(&rows))
}

/// List catalog items matching `query`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn run_items(
    config: &AppConfig,
    path: Option<&Path>,
    query: &ItemQuery,
    json: bool,
) -> anyhow::Result<()> {
    print!("{}", items_output(config, path, query, json)?);
    Ok(())
}

/// Build the dashboard statistics output.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn summary_output(
    config: &AppConfig,
    path: Option<&Path>,
    json: bool,
) -> anyhow::Result<String> {
    let inventory = load(config, path)?;
    let summary = InventorySummary::compute(
        &inventory.items,
        config.default_min_stock,
        config.low_stock_preview_limit,
    );

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?));
    }
    Ok(render_summary(&summary))
}

/// Print dashboard statistics.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn run_summary(
    config: &AppConfig,
    path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    print!("{}", summary_output(config, path, json)?);
    Ok(())
}

/// Build the per-category or per-warehouse listing.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn groups_output(
    config: &AppConfig,
    path: Option<&Path>,
    by: GroupBy,
    json: bool,
) -> anyhow::Result<String> {
    let inventory = load(config, path)?;
    let groups = group_items(&inventory.items, by, config.default_min_stock);

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&groups)?));
    }
    if groups.is_empty() {
        return Ok(format!("no {by} rows; the catalog is empty\n"));
    }
    Ok(render_groups_table(by, &groups))
}

/// Print one row per category or warehouse.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON serialization fails.
pub(crate) fn run_groups(
    config: &AppConfig,
    path: Option<&Path>,
    by: GroupBy,
    json: bool,
) -> anyhow::Result<()> {
    print!("{}", groups_output(config, path, by, json)?);
    Ok(())
}

/// Validate a catalog file and report how many items it holds.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed, or fails validation.
pub(crate) fn check_output(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<String> {
    let inventory = load(config, path)?;
    Ok(format!("ok: {} items\n", inventory.items.len()))
}

/// Validate a catalog file.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed, or fails validation.
pub(crate) fn run_check(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<()> {
    print!("{}", check_output(config, path)?);
    Ok(())
}
