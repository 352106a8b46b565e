//! Sample data
//!
//! There is no real data source: a session starts from synthetic records.
//! They are generated by one deferred task that resolves once.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as DateDuration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::models::{BillingCategory, BillingRecordCreate};
use shared::{AppError, AppResult};
use tokio::task::JoinHandle;

use crate::billing_money::{BillingError, RandomSplit, calculate, format_bill_range};
use crate::core::{BillingStore, Config};
use crate::utils::time::now_in;

/// Dates are drawn from `today - 89 days ..= today`
pub const SAMPLE_DAYS: i64 = 90;

/// Totals are drawn from `[10_000, 210_000)` whole rupees
pub const SAMPLE_AMOUNT_MIN: i64 = 10_000;
pub const SAMPLE_AMOUNT_MAX: i64 = 210_000;

const FIRST_BILL_NO: u64 = 3000;

/// `per_category` records for every category, newest first
///
/// Each record gets its own block of ten bill numbers starting at 3000.
pub fn generate(
    per_category: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Vec<BillingRecordCreate>, BillingError> {
    let mut records = Vec::with_capacity(per_category * BillingCategory::ALL.len());

    for category in BillingCategory::ALL {
        for _ in 0..per_category {
            let date = today - DateDuration::days(rng.gen_range(0..SAMPLE_DAYS));
            let total = rng.gen_range(SAMPLE_AMOUNT_MIN..SAMPLE_AMOUNT_MAX);

            let start = FIRST_BILL_NO + records.len() as u64 * 10;
            let bill_nos = format_bill_range(start, start + 9)?;

            let calculation = calculate(total.into(), category, &mut RandomSplit::new(&mut *rng))?;
            records.push(calculation.into_create(date, bill_nos));
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

/// Spawn the deferred sample load into `store`
///
/// Resolves to the number of records added (0 if the store was already
/// populated).
pub fn spawn_load(store: Arc<BillingStore>, config: &Config) -> JoinHandle<AppResult<usize>> {
    let per_category = config.sample_records_per_category;
    let delay = Duration::from_millis(config.sample_load_delay_ms);
    let tz = config.business_timezone;

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let today = now_in(tz).date_naive();
        let mut rng = StdRng::from_entropy();
        let records = generate(per_category, today, &mut rng).map_err(AppError::from)?;
        Ok::<_, AppError>(store.populate(records))
    })
}
