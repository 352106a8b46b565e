//! Bill entry draft
//!
//! Mirrors the add-record form: the user fills in a date, a bill number
//! range and a tax-inclusive total, asks for the derived fields to be
//! calculated, then submits. Editing the total or switching category after a
//! calculation discards it, so a submitted record always matches its total.

use chrono::NaiveDate;
use shared::models::{BillingCategory, BillingRecordCreate};

use crate::billing_money::{
    BillingCalculation, BillingError, SplitSource, calculate, format_bill_range, parse_amount,
    parse_bill_number,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillDraft {
    category: BillingCategory,
    date: Option<NaiveDate>,
    bill_start: String,
    bill_end: String,
    total_amount: String,
    calculation: Option<BillingCalculation>,
}

impl BillDraft {
    /// Empty draft dated `today`
    pub fn new(category: BillingCategory, today: NaiveDate) -> Self {
        Self {
            category,
            date: Some(today),
            bill_start: String::new(),
            bill_end: String::new(),
            total_amount: String::new(),
            calculation: None,
        }
    }

    pub fn category(&self) -> BillingCategory {
        self.category
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn total_amount(&self) -> &str {
        &self.total_amount
    }

    pub fn calculation(&self) -> Option<&BillingCalculation> {
        self.calculation.as_ref()
    }

    pub fn is_calculated(&self) -> bool {
        self.calculation.is_some()
    }

    pub fn set_category(&mut self, category: BillingCategory) {
        if self.category != category {
            self.category = category;
            self.calculation = None;
        }
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn set_bill_start(&mut self, value: impl Into<String>) {
        self.bill_start = value.into();
    }

    pub fn set_bill_end(&mut self, value: impl Into<String>) {
        self.bill_end = value.into();
    }

    pub fn set_total_amount(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.total_amount {
            self.total_amount = value;
            self.calculation = None;
        }
    }

    /// Derive the tax fields and split for the entered total
    pub fn calculate(
        &mut self,
        source: &mut impl SplitSource,
    ) -> Result<&BillingCalculation, BillingError> {
        let total = parse_amount(&self.total_amount)?;
        let calculation = calculate(total, self.category, source)?;
        Ok(&*self.calculation.insert(calculation))
    }

    /// Validate the draft and build the record payload
    ///
    /// Checks run in order: required fields, calculation state, bill range.
    pub fn submit(&self) -> Result<BillingRecordCreate, BillingError> {
        let date = self
            .date
            .ok_or(BillingError::MissingRequiredField("date"))?;
        if self.bill_start.trim().is_empty() {
            return Err(BillingError::MissingRequiredField("billStart"));
        }
        if self.bill_end.trim().is_empty() {
            return Err(BillingError::MissingRequiredField("billEnd"));
        }
        if self.total_amount.trim().is_empty() {
            return Err(BillingError::MissingRequiredField("totalAmount"));
        }

        let calculation = self.calculation.ok_or(BillingError::NotYetCalculated)?;

        let start = parse_bill_number(&self.bill_start)?;
        let end = parse_bill_number(&self.bill_end)?;
        let bill_nos = format_bill_range(start, end)?;

        Ok(calculation.into_create(date, bill_nos))
    }

    /// Clear every field, keeping the category
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(self.category, today);
    }
}

/// Notification text after a successful submit
pub fn success_message(category: BillingCategory) -> String {
    format!("{} billing record added successfully", category.display_name())
}
