use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DashboardConfig, IntervalWindow, MarketConfig, StorageConfig};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates the parts the rest of the application relies on, and
/// returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;

    if config.market.symbols.is_empty() {
        return Err(ConfigError::ValidationError(
            "market.symbols must list at least one symbol".to_string(),
        ));
    }
    if config.market.quote_suffix.is_empty() {
        return Err(ConfigError::ValidationError(
            "market.quote_suffix must not be empty".to_string(),
        ));
    }
    if config.market.fetch_limit == 0 {
        return Err(ConfigError::ValidationError(
            "market.fetch_limit must be positive".to_string(),
        ));
    }

    Ok(config)
}
