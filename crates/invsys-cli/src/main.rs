mod inventory;
mod stock;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use invsys_core::{GroupBy, StockFilter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "invsys-cli")]
#[command(about = "Inventory stock-status command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single raw stock reading
    Classify {
        /// Units on hand, as the page supplies it (unparsable or negative counts as 0)
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
        /// Reorder threshold (unparsable or missing uses the configured default)
        #[arg(long, allow_hyphen_values = true)]
        min_stock: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List catalog items with their stock badge
    Items {
        /// Inventory catalog (defaults to `INVSYS_INVENTORY_PATH`)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Match code, name, or description
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        warehouse: Option<String>,
        /// Stock filter: all, low, or out
        #[arg(long, default_value_t = StockFilter::All)]
        stock: StockFilter,
        #[arg(long)]
        json: bool,
    },
    /// Show dashboard statistics for the catalog
    Summary {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Roll the catalog up by category
    Categories {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Roll the catalog up by warehouse
    Warehouses {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalog file without printing it
    Check {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = invsys_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        default_min_stock = config.default_min_stock,
        "config loaded"
    );

    match cli.command {
        Some(Commands::Classify {
            quantity,
            min_stock,
            json,
        }) => stock::run_classify(&config, quantity.as_deref(), min_stock.as_deref(), json)?,
        Some(Commands::Items {
            path,
            search,
            category,
            warehouse,
            stock,
            json,
        }) => {
            let query = invsys_core::ItemQuery {
                search,
                category,
                warehouse,
                stock,
            };
            inventory::run_items(&config, path.as_deref(), &query, json)?;
        }
        Some(Commands::Summary { path, json }) => {
            inventory::run_summary(&config, path.as_deref(), json)?;
        }
        Some(Commands::Categories { path, json }) => {
            inventory::run_groups(&config, path.as_deref(), GroupBy::Category, json)?;
        }
        Some(Commands::Warehouses { path, json }) => {
            inventory::run_groups(&config, path.as_deref(), GroupBy::Warehouse, json)?;
        }
        Some(Commands::Check { path }) => inventory::run_check(&config, path.as_deref())?,
        None => println!("no command given; run `invsys-cli --help` for usage"),
    }

    Ok(())
}
