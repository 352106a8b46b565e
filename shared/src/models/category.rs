//! Billing Category Model
//!
//! Each category carries a fixed GST profile. The table is compiled in and
//! never changes at runtime.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Product category a bill is recorded under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingCategory {
    Sweets,
    KhajurChocolate,
    CakesBakery,
}

impl BillingCategory {
    /// All categories, in display order
    pub const ALL: [BillingCategory; 3] = [
        BillingCategory::Sweets,
        BillingCategory::KhajurChocolate,
        BillingCategory::CakesBakery,
    ];

    /// Wire slug ("khajur-chocolate")
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Sweets => "sweets",
            Self::KhajurChocolate => "khajur-chocolate",
            Self::CakesBakery => "cakes-bakery",
        }
    }

    /// Static rate profile for this category
    pub const fn config(&self) -> &'static CategoryConfig {
        match self {
            Self::Sweets => &SWEETS,
            Self::KhajurChocolate => &KHAJUR_CHOCOLATE,
            Self::CakesBakery => &CAKES_BAKERY,
        }
    }

    pub const fn display_name(&self) -> &'static str {
        self.config().name
    }

    /// GST rate as shown in headings ("12%")
    pub fn gst_label(&self) -> String {
        format!("{}%", self.config().gst_rate.normalize())
    }
}

impl fmt::Display for BillingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BillingCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| {
                AppError::new(ErrorCode::UnknownCategory).with_detail("category", s.to_string())
            })
    }
}

/// GST profile of a category
///
/// `cgst_rate` and `sgst_rate` are always half of `gst_rate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub name: &'static str,
    /// Total GST percentage (5 means 5%)
    pub gst_rate: Decimal,
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    pub has_cash_online_split: bool,
    pub has_khajur_chocolate_split: bool,
}

const SWEETS: CategoryConfig = CategoryConfig {
    name: "Sweets",
    gst_rate: Decimal::from_parts(5, 0, 0, false, 0),
    cgst_rate: Decimal::from_parts(25, 0, 0, false, 1),
    sgst_rate: Decimal::from_parts(25, 0, 0, false, 1),
    has_cash_online_split: true,
    has_khajur_chocolate_split: false,
};

const KHAJUR_CHOCOLATE: CategoryConfig = CategoryConfig {
    name: "Khajur & Chocolate",
    gst_rate: Decimal::from_parts(12, 0, 0, false, 0),
    cgst_rate: Decimal::from_parts(6, 0, 0, false, 0),
    sgst_rate: Decimal::from_parts(6, 0, 0, false, 0),
    has_cash_online_split: false,
    has_khajur_chocolate_split: true,
};

const CAKES_BAKERY: CategoryConfig = CategoryConfig {
    name: "Cakes & Bakery",
    gst_rate: Decimal::from_parts(18, 0, 0, false, 0),
    cgst_rate: Decimal::from_parts(9, 0, 0, false, 0),
    sgst_rate: Decimal::from_parts(9, 0, 0, false, 0),
    has_cash_online_split: false,
    has_khajur_chocolate_split: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rates() {
        for category in BillingCategory::ALL {
            let config = category.config();
            assert_eq!(config.cgst_rate, config.sgst_rate);
            assert_eq!(config.cgst_rate + config.sgst_rate, config.gst_rate);
        }
    }

    #[test]
    fn test_split_flags() {
        assert!(BillingCategory::Sweets.config().has_cash_online_split);
        assert!(!BillingCategory::Sweets.config().has_khajur_chocolate_split);
        assert!(BillingCategory::KhajurChocolate.config().has_khajur_chocolate_split);
        let cakes = BillingCategory::CakesBakery.config();
        assert!(!cakes.has_cash_online_split && !cakes.has_khajur_chocolate_split);
    }

    #[test]
    fn test_gst_label() {
        assert_eq!(BillingCategory::Sweets.gst_label(), "5%");
        assert_eq!(BillingCategory::KhajurChocolate.gst_label(), "12%");
        assert_eq!(BillingCategory::CakesBakery.gst_label(), "18%");
    }

    #[test]
    fn test_slug_roundtrip() {
        for category in BillingCategory::ALL {
            assert_eq!(category.slug().parse::<BillingCategory>().unwrap(), category);
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn test_unknown_slug() {
        let err = "bread".parse::<BillingCategory>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCategory);
    }
}
