//! `classify` command: the CLI standing in for a page that holds one badge.

use invsys_core::{AppConfig, StockBadge, StockReading};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct ClassifiedReading {
    #[serde(flatten)]
    pub reading: StockReading,
    #[serde(flatten)]
    pub badge: StockBadge,
}

/// Normalize raw fields and classify them with the configured default threshold.
pub(crate) fn classify_reading(
    config: &AppConfig,
    quantity: Option<&str>,
    min_stock: Option<&str>,
) -> ClassifiedReading {
    let reading = config.classifier().reading(quantity, min_stock);
    ClassifiedReading {
        reading,
        badge: reading.status().badge(),
    }
}

pub(crate) fn render_classified(classified: &ClassifiedReading) -> String {
    format!(
        "{} [{}] class=\"{}\" quantity={} min_stock={}",
        classified.badge.label,
        classified.badge.severity,
        classified.badge.class,
        classified.reading.quantity,
        classified.reading.min_stock
    )
}

/// Print the badge for one raw reading.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_classify(
    config: &AppConfig,
    quantity: Option<&str>,
    min_stock: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let classified = classify_reading(config, quantity, min_stock);
    tracing::debug!(
        raw_quantity = ?quantity,
        raw_min_stock = ?min_stock,
        quantity = classified.reading.quantity,
        min_stock = classified.reading.min_stock,
        "normalized reading"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
    } else {
        println!("{}", render_classified(&classified));
    }
    Ok(())
}
