use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Read `INVSYS_*` settings, picking up a `.env` file in the working
/// directory first if one exists.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` when a set variable cannot be parsed.
/// Unset variables fall back to their defaults and never fail.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Read `INVSYS_*` settings from the current process environment only.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` when a set variable cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("INVSYS_ENV", "development"))?;
    let log_level = or_default("INVSYS_LOG_LEVEL", "info");
    let inventory_path = PathBuf::from(or_default(
        "INVSYS_INVENTORY_PATH",
        "./config/inventory.yaml",
    ));
    let default_min_stock = parse_u32("INVSYS_DEFAULT_MIN_STOCK", "10")?;
    let low_stock_preview_limit = parse_usize("INVSYS_LOW_STOCK_PREVIEW_LIMIT", "5")?;

    Ok(AppConfig {
        env,
        log_level,
        inventory_path,
        default_min_stock,
        low_stock_preview_limit,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "INVSYS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
