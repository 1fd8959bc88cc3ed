//! Import tool configuration loaded from environment variables.
//!
//! `.env` files are honoured because `main` calls `dotenvy::dotenv()` before
//! [`Config::from_env`].
//!
//! # Environment Variables
//! - `CATALOG_LOG_FILTER`: tracing filter used when `RUST_LOG` is unset (default: "info,catalog=debug")
//! - `CATALOG_IMPORT_PATH`: file of JSON lines to import (default: read stdin)
//! - `CATALOG_FAIL_FAST`: stop at the first rejected record (default: false)

#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback tracing filter directive
    pub log_filter: String,

    /// Source of `CreateCategoryInput` records, one JSON object per line
    pub import_path: Option<String>,

    /// Abort the import on the first record that fails to parse or persist
    pub fail_fast: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            log_filter: env_or("CATALOG_LOG_FILTER", "info,catalog=debug".to_string())?,
            import_path: std::env::var("CATALOG_IMPORT_PATH").ok(),
            fail_fast: env_or("CATALOG_FAIL_FAST", false)?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
