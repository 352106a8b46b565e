//! Dashboard metrics
//!
//! Entry count, sales total and per-category totals follow the active
//! filters. The week and month figures always use the full collection.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{BillingCategory, BillingRecord};

use crate::utils::format::format_inr;
use crate::utils::time::{day_start, month_start};

/// Sales total of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: BillingCategory,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_entries: usize,
    pub total_sales: Decimal,
    pub this_week_sales: Decimal,
    pub this_month_sales: Decimal,
    /// One entry per category, in display order
    pub category_totals: Vec<CategoryTotal>,
}

/// Headline tile on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub title: String,
    pub value: String,
}

fn sum<'a>(records: impl IntoIterator<Item = &'a BillingRecord>) -> Decimal {
    records.into_iter().map(|r| r.total_amount).sum()
}

impl DashboardMetrics {
    /// `filtered` drives the filter-aware figures, `all` the week/month figures
    pub fn compute(all: &[BillingRecord], filtered: &[BillingRecord], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let week_start = *now - Duration::days(7);
        let month_begin = day_start(month_start(now.date_naive()), tz);

        let this_week_sales = sum(all.iter().filter(|r| day_start(r.date, tz) >= week_start));
        let this_month_sales = sum(all.iter().filter(|r| day_start(r.date, tz) >= month_begin));

        let category_totals = BillingCategory::ALL
            .into_iter()
            .map(|category| CategoryTotal {
                category,
                total: sum(filtered.iter().filter(|r| r.category() == category)),
            })
            .collect();

        Self {
            total_entries: filtered.len(),
            total_sales: sum(filtered),
            this_week_sales,
            this_month_sales,
            category_totals,
        }
    }

    pub fn category_total(&self, category: BillingCategory) -> Decimal {
        self.category_totals
            .iter()
            .find(|t| t.category == category)
            .map_or(Decimal::ZERO, |t| t.total)
    }

    /// Tiles in display order, amounts formatted as rupees
    pub fn widgets(&self) -> Vec<Widget> {
        let mut widgets = vec![
            Widget {
                title: "Total Entries".to_string(),
                value: self.total_entries.to_string(),
            },
            Widget {
                title: "Total Sales".to_string(),
                value: format_inr(self.total_sales),
            },
            Widget {
                title: "This Week".to_string(),
                value: format_inr(self.this_week_sales),
            },
            Widget {
                title: "This Month".to_string(),
                value: format_inr(self.this_month_sales),
            },
        ];
        widgets.extend(self.category_totals.iter().map(|t| Widget {
            title: format!("{} ({} GST)", t.category.display_name(), t.category.gst_label()),
            value: format_inr(t.total),
        }));
        widgets
    }
}
