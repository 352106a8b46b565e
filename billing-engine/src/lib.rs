//! Billing Engine - GST billing desk core
//!
//! # Overview
//!
//! Everything behind the billing dashboard that is not presentation:
//!
//! - **Calculator** (`billing_money`): backs GST out of a tax-inclusive total
//!   and splits it into cash/online or khajur/chocolate parts
//! - **Draft form** (`form`): calculate-then-submit bill entry
//! - **Query pipeline** (`query`): category, date and search filters, sorting
//!   and pagination
//! - **Table** (`table`): per-category columns, column filters, CSV export
//! - **Dashboard** (`dashboard`): sales totals
//! - **Session** (`core`): append-only record store and per-user filters
//!
//! # Module layout
//!
//! ```text
//! billing-engine/src/
//! ├── core/           # config, store, session
//! ├── billing_money/  # GST calculation and splits
//! ├── form/           # bill entry draft
//! ├── query/          # filters, sort, pages
//! ├── table/          # table view state
//! ├── export/         # CSV export
//! ├── dashboard/      # metrics
//! ├── sample/         # synthetic sample data
//! └── utils/          # logging, time, formatting
//! ```

pub mod billing_money;
pub mod core;
pub mod dashboard;
pub mod export;
pub mod form;
pub mod query;
pub mod sample;
pub mod table;
pub mod utils;

// Re-export public types
pub use billing_money::{BillingCalculation, BillingError, RandomSplit, SplitSource, calculate};
pub use self::core::{BillingSession, BillingStore, Config};
pub use dashboard::DashboardMetrics;
pub use form::BillDraft;
pub use table::TableView;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
///
/// Production runs log JSON; `LOG_DIR` adds a daily rolling log file.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  _ _ _ _
   | __ )(_) | (_)_ __   __ _
   |  _ \| | | | | '_ \ / _` |
   | |_) | | | | | | | | (_| |
   |____/|_|_|_|_|_| |_|\__, |
                        |___/
    "#
    );
}
