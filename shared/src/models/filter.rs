//! Filter Model
//!
//! [`FilterOptions`] holds at most one date filter. Choosing a preset drops
//! any explicit range or single date and vice versa; the loose wire form
//! [`FilterParams`] is resolved by priority: range, then single date, then
//! preset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::BillingCategory;
use crate::error::{AppError, ErrorCode};

/// Named relative date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePreset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "yesterday")]
    Yesterday,
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "last30days")]
    Last30Days,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "lastMonth")]
    LastMonth,
}

impl DatePreset {
    pub const ALL: [DatePreset; 6] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7Days => "last7days",
            Self::Last30Days => "last30days",
            Self::ThisMonth => "thisMonth",
            Self::LastMonth => "lastMonth",
        }
    }

    /// Button label in the filter panel
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, AppError> {
        Self::ALL.into_iter().find(|p| p.key() == key).ok_or_else(|| {
            AppError::new(ErrorCode::UnknownPreset).with_detail("preset", key.to_string())
        })
    }
}

/// Explicit calendar range, both ends inclusive. A missing end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// The single date restriction a filter can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Range(DateRange),
    Single(NaiveDate),
    Preset(DatePreset),
}

/// Active query filters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "FilterParams", into = "FilterParams")]
pub struct FilterOptions {
    pub category: Option<BillingCategory>,
    pub date: Option<DateFilter>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: BillingCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets an explicit range, clearing any single date or preset
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date = (!range.is_unbounded()).then_some(DateFilter::Range(range));
        self
    }

    /// Sets a single day, clearing any range or preset
    pub fn with_single_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(DateFilter::Single(date));
        self
    }

    /// Sets a preset, clearing any range or single date
    pub fn with_preset(mut self, preset: DatePreset) -> Self {
        self.date = Some(DateFilter::Preset(preset));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none()
    }

    /// Number of active restrictions, as shown on the filter badge
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some()) + usize::from(self.date.is_some())
    }

    pub fn preset(&self) -> Option<DatePreset> {
        match self.date {
            Some(DateFilter::Preset(p)) => Some(p),
            _ => None,
        }
    }
}

/// Wire form of [`FilterOptions`] with every date field independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<DatePreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BillingCategory>,
}

impl From<FilterParams> for FilterOptions {
    fn from(params: FilterParams) -> Self {
        let range = params.date_range.filter(|r| !r.is_unbounded());
        let date = match (range, params.single_date, params.preset) {
            (Some(range), _, _) => Some(DateFilter::Range(range)),
            (None, Some(day), _) => Some(DateFilter::Single(day)),
            (None, None, Some(preset)) => Some(DateFilter::Preset(preset)),
            (None, None, None) => None,
        };
        Self {
            category: params.category,
            date,
        }
    }
}

impl From<FilterOptions> for FilterParams {
    fn from(options: FilterOptions) -> Self {
        let mut params = FilterParams {
            category: options.category,
            ..Default::default()
        };
        match options.date {
            Some(DateFilter::Range(r)) => params.date_range = Some(r),
            Some(DateFilter::Single(d)) => params.single_date = Some(d),
            Some(DateFilter::Preset(p)) => params.preset = Some(p),
            None => {}
        }
        params
    }
}
