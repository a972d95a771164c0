//! Storefront configuration loaded from environment variables.

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STORE_AFFILIATION` — store name reported on purchases (default: `"Store Name"`)
/// - `STORE_CURRENCY` — ISO currency code reported on purchases (default: `"USD"`)
/// - `PRINT_METRICS` — print Prometheus metrics after the demo run (default: `false`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub affiliation: String,
    pub currency: String,
    pub print_metrics: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            affiliation: lookup("STORE_AFFILIATION").unwrap_or(defaults.affiliation),
            currency: lookup("STORE_CURRENCY").unwrap_or(defaults.currency),
            print_metrics: lookup("PRINT_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.print_metrics),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            affiliation: "Store Name".to_string(),
            currency: "USD".to_string(),
            print_metrics: false,
            log_level: "info".to_string(),
        }
    }
}
