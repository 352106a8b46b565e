use chrono_tz::Tz;

use crate::query::page::{DEFAULT_PAGE_SIZE, validate_page_size};
use crate::utils::time::{DEFAULT_TIMEZONE, parse_timezone};

/// Billing engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BUSINESS_TIMEZONE | Asia/Kolkata | zone for "today", presets and midnights |
/// | SAMPLE_RECORDS_PER_CATEGORY | 20 | sample records generated per category |
/// | SAMPLE_LOAD_DELAY_MS | 1000 | delay before the sample load resolves |
/// | DEFAULT_PAGE_SIZE | 10 | table page size (10, 25, 50 or 100) |
/// | EXPORT_DIR | . | directory CSV exports are written to |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | rolling log file directory |
/// | ENVIRONMENT | development | development or production |
///
/// # Example
///
/// ```ignore
/// BUSINESS_TIMEZONE=Asia/Dubai DEFAULT_PAGE_SIZE=25 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone that decides what "today" and "this month" mean
    pub business_timezone: Tz,
    pub sample_records_per_category: usize,
    pub sample_load_delay_ms: u64,
    pub default_page_size: usize,
    pub export_dir: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let default_page_size = env_parse::<usize>("DEFAULT_PAGE_SIZE")
            .and_then(|size| match validate_page_size(size) {
                Ok(size) => Some(size),
                Err(e) => {
                    tracing::warn!("Ignoring DEFAULT_PAGE_SIZE: {}", e);
                    None
                }
            })
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .map(|name| parse_timezone(&name))
                .unwrap_or(DEFAULT_TIMEZONE),
            sample_records_per_category: env_parse("SAMPLE_RECORDS_PER_CATEGORY").unwrap_or(20),
            sample_load_delay_ms: env_parse("SAMPLE_LOAD_DELAY_MS").unwrap_or(1000),
            default_page_size,
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| ".".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the values tests usually care about
    pub fn with_overrides(
        business_timezone: Tz,
        sample_records_per_category: usize,
        sample_load_delay_ms: u64,
    ) -> Self {
        let mut config = Self::from_env();
        config.business_timezone = business_timezone;
        config.sample_records_per_category = sample_records_per_category;
        config.sample_load_delay_ms = sample_load_delay_ms;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
