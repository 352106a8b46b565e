//! GST calculation using rust_decimal for precision
//!
//! A bill is entered as a tax-inclusive total. The gross amount is backed out
//! with the category's GST rate, CGST and SGST are each half of the tax, and
//! every derived value is rounded to 2 decimal places (half away from zero).

pub mod split;


use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{BillingCategory, BillingRecordCreate, CategorySplit, TaxBreakdown};
use shared::{AppError, ErrorCode};
use thiserror::Error;

pub use split::{CHOCOLATE_SHARES, FixedSplit, RandomSplit, SplitSource, cash_band};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted bill total (1 crore)
pub const MAX_TOTAL_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Bill entry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount {0} exceeds the maximum of {max}", max = MAX_TOTAL_AMOUNT)]
    AmountOutOfRange(Decimal),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Billing fields have not been calculated")]
    NotYetCalculated,

    #[error("Bill range end {end} is before start {start}")]
    InvalidBillRange { start: u64, end: u64 },

    #[error("Invalid bill number: {0}")]
    InvalidBillNumber(String),
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::InvalidAmount(raw) => AppError::invalid_amount(raw),
            BillingError::AmountOutOfRange(value) => AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("Total amount must not exceed {}", MAX_TOTAL_AMOUNT),
            )
            .with_detail("value", value.to_string())
            .with_detail("max", MAX_TOTAL_AMOUNT.to_string()),
            BillingError::MissingRequiredField(field) => AppError::missing_field(field),
            BillingError::NotYetCalculated => AppError::new(ErrorCode::NotYetCalculated),
            BillingError::InvalidBillRange { start, end } => {
                AppError::new(ErrorCode::InvalidBillRange)
                    .with_detail("start", start)
                    .with_detail("end", end)
            }
            BillingError::InvalidBillNumber(raw) => AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Invalid bill number: {}", raw),
            )
            .with_detail("value", raw),
        }
    }
}

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole rupees, half away from zero
#[inline]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Accept `value` as a bill total: positive and at most [`MAX_TOTAL_AMOUNT`]
fn require_amount(value: Decimal, raw: impl Into<String>) -> Result<Decimal, BillingError> {
    if value <= Decimal::ZERO {
        return Err(BillingError::InvalidAmount(raw.into()));
    }
    if value > MAX_TOTAL_AMOUNT {
        return Err(BillingError::AmountOutOfRange(value));
    }
    Ok(value)
}

/// Parse a user-entered total amount
///
/// Accepts plain decimals ("10500", "10500.50"). Empty, unparseable,
/// non-positive and over-limit input is rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, BillingError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BillingError::InvalidAmount(raw.to_string()))?;
    require_amount(value, raw)
}

/// Convert a floating point amount, rejecting non-finite and out-of-range values
pub fn amount_from_f64(value: f64) -> Result<Decimal, BillingError> {
    if !value.is_finite() {
        return Err(BillingError::InvalidAmount(value.to_string()));
    }
    let decimal =
        Decimal::from_f64(value).ok_or_else(|| BillingError::InvalidAmount(value.to_string()))?;
    require_amount(decimal, value.to_string())
}

/// Parse one end of a bill number range
pub fn parse_bill_number(raw: &str) -> Result<u64, BillingError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| BillingError::InvalidBillNumber(raw.to_string()))
}

/// Format an inclusive bill number range ("3000-3009")
pub fn format_bill_range(start: u64, end: u64) -> Result<String, BillingError> {
    if end < start {
        return Err(BillingError::InvalidBillRange { start, end });
    }
    Ok(format!("{}-{}", start, end))
}

/// Back the GST out of a tax-inclusive total
///
/// Every value is derived from the unrounded gross amount and rounded last,
/// so the rounded parts may differ from the total bill amount by a cent.
pub fn calculate_tax(
    total_amount: Decimal,
    category: BillingCategory,
) -> Result<TaxBreakdown, BillingError> {
    let total_amount = require_amount(total_amount, total_amount.to_string())?;
    let config = category.config();
    let multiplier = Decimal::ONE + config.gst_rate / Decimal::ONE_HUNDRED;

    let gross_exact = total_amount / multiplier;
    let cgst_exact = gross_exact * config.cgst_rate / Decimal::ONE_HUNDRED;
    let sgst_exact = gross_exact * config.sgst_rate / Decimal::ONE_HUNDRED;

    Ok(TaxBreakdown {
        gross_amount: round_money(gross_exact),
        cgst: round_money(cgst_exact),
        sgst: round_money(sgst_exact),
        total_bill_amount: round_money(gross_exact + cgst_exact + sgst_exact),
    })
}

/// Category-specific split of the total
///
/// Split parts always sum exactly to `total_amount`: the drawn share is
/// rounded to whole rupees and the other part takes the remainder.
pub fn calculate_split(
    total_amount: Decimal,
    category: BillingCategory,
    source: &mut impl SplitSource,
) -> Result<CategorySplit, BillingError> {
    let total_amount = require_amount(total_amount, total_amount.to_string())?;
    let split = match category {
        BillingCategory::Sweets => {
            let (low, high) = cash_band(total_amount);
            let percentage = low + source.next_fraction() * (high - low);
            let cash_sales = round_whole(total_amount * percentage / Decimal::ONE_HUNDRED);
            CategorySplit::Sweets {
                cash_sales,
                online_sales: total_amount - cash_sales,
            }
        }
        BillingCategory::KhajurChocolate => {
            let share = CHOCOLATE_SHARES[source.next_index(CHOCOLATE_SHARES.len())];
            let chocolate_amount = round_whole(total_amount * share / Decimal::ONE_HUNDRED);
            CategorySplit::KhajurChocolate {
                khajur_amount: total_amount - chocolate_amount,
                chocolate_amount,
            }
        }
        BillingCategory::CakesBakery => CategorySplit::CakesBakery,
    };
    Ok(split)
}

/// Derived fields for one bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCalculation {
    pub total_amount: Decimal,
    #[serde(flatten)]
    pub tax: TaxBreakdown,
    #[serde(flatten)]
    pub split: CategorySplit,
}

impl BillingCalculation {
    pub fn category(&self) -> BillingCategory {
        self.split.category()
    }

    /// Attach the date and bill range to produce a record payload
    pub fn into_create(self, date: NaiveDate, bill_nos: impl Into<String>) -> BillingRecordCreate {
        BillingRecordCreate {
            date,
            bill_nos: bill_nos.into(),
            split: self.split,
            tax: self.tax,
            total_amount: self.total_amount,
        }
    }
}

/// Derive every computed field of a bill from its tax-inclusive total
pub fn calculate(
    total_amount: Decimal,
    category: BillingCategory,
    source: &mut impl SplitSource,
) -> Result<BillingCalculation, BillingError> {
    Ok(BillingCalculation {
        total_amount,
        tax: calculate_tax(total_amount, category)?,
        split: calculate_split(total_amount, category, source)?,
    })
}
