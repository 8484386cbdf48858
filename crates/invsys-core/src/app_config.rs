use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub inventory_path: PathBuf,
    /// Threshold applied to readings and items that carry no minimum stock.
    pub default_min_stock: u32,
    /// How many low-stock rows the dashboard summary previews.
    pub low_stock_preview_limit: usize,
}

impl AppConfig {
    #[must_use]
    pub fn classifier(&self) -> crate::StockClassifier {
        crate::StockClassifier::new(self.default_min_stock)
    }
}
