//! Date filtering
//!
//! Explicit ranges and single dates compare calendar dates directly. Presets
//! are windows of instants around "now"; a record's instant is local midnight
//! of its date in the business time zone.

use std::ops::{Bound, RangeBounds};

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use shared::models::{BillingRecord, DateFilter, DatePreset};

use crate::utils::time::{day_start, month_start, previous_month};

/// Window of instants selected by a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Bound<DateTime<Tz>>,
    pub end: Bound<DateTime<Tz>>,
}

impl DateWindow {
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        (self.start, self.end).contains(instant)
    }
}

/// Resolve a preset against `now`
pub fn preset_window(preset: DatePreset, now: &DateTime<Tz>) -> DateWindow {
    let tz = now.timezone();
    let today = now.date_naive();
    let today_start = day_start(today, tz);

    let (start, end) = match preset {
        DatePreset::Today => (Bound::Included(today_start), Bound::Unbounded),
        DatePreset::Yesterday => (
            Bound::Included(day_start(today - Duration::days(1), tz)),
            Bound::Excluded(today_start),
        ),
        DatePreset::Last7Days => (Bound::Included(*now - Duration::days(7)), Bound::Unbounded),
        DatePreset::Last30Days => (Bound::Included(*now - Duration::days(30)), Bound::Unbounded),
        DatePreset::ThisMonth => (
            Bound::Included(day_start(month_start(today), tz)),
            Bound::Unbounded,
        ),
        DatePreset::LastMonth => {
            let (first, last) = previous_month(today);
            (
                Bound::Included(day_start(first, tz)),
                Bound::Included(day_start(last, tz)),
            )
        }
    };

    DateWindow { start, end }
}

/// Whether `record` passes the date filter
pub fn matches(record: &BillingRecord, filter: &DateFilter, now: &DateTime<Tz>) -> bool {
    match filter {
        DateFilter::Range(range) => range.contains(record.date),
        DateFilter::Single(day) => record.date == *day,
        DateFilter::Preset(preset) => {
            preset_window(*preset, now).contains(&day_start(record.date, now.timezone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    const TZ: Tz = chrono_tz::Asia::Kolkata;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Tz> {
        TZ.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_instant(y: i32, m: u32, d: u32) -> DateTime<Tz> {
        day_start(date(y, m, d), TZ)
    }

    #[test]
    fn test_today_includes_midnight_excludes_just_before() {
        let now = at(2026, 10, 15, 14);
        let window = preset_window(DatePreset::Today, &now);
        let midnight = day_instant(2026, 10, 15);

        assert!(window.contains(&midnight));
        assert!(!window.contains(&(midnight - Duration::milliseconds(1))));
    }

    #[test]
    fn test_yesterday_is_half_open() {
        let now = at(2026, 10, 15, 9);
        let window = preset_window(DatePreset::Yesterday, &now);

        assert!(window.contains(&day_instant(2026, 10, 14)));
        assert!(!window.contains(&day_instant(2026, 10, 15)));
        assert!(!window.contains(&day_instant(2026, 10, 13)));
    }

    #[test]
    fn test_last_7_days_is_rolling() {
        // At 14:00 the window starts at 14:00 seven days ago, so that day's
        // midnight is already outside.
        let now = at(2026, 10, 15, 14);
        let window = preset_window(DatePreset::Last7Days, &now);

        assert!(window.contains(&day_instant(2026, 10, 9)));
        assert!(!window.contains(&day_instant(2026, 10, 8)));

        let midnight_now = day_instant(2026, 10, 15);
        let window = preset_window(DatePreset::Last7Days, &midnight_now);
        assert!(window.contains(&day_instant(2026, 10, 8)));
    }

    #[test]
    fn test_last_30_days() {
        let now = at(2026, 10, 15, 14);
        let window = preset_window(DatePreset::Last30Days, &now);
        assert!(window.contains(&day_instant(2026, 9, 16)));
        assert!(!window.contains(&day_instant(2026, 9, 15)));
    }

    #[test]
    fn test_month_windows() {
        let now = at(2026, 3, 10, 12);

        let this_month = preset_window(DatePreset::ThisMonth, &now);
        assert!(this_month.contains(&day_instant(2026, 3, 1)));
        assert!(!this_month.contains(&day_instant(2026, 2, 28)));

        let last_month = preset_window(DatePreset::LastMonth, &now);
        assert!(last_month.contains(&day_instant(2026, 2, 1)));
        assert!(last_month.contains(&day_instant(2026, 2, 28)));
        assert!(!last_month.contains(&day_instant(2026, 3, 1)));
        assert!(!last_month.contains(&day_instant(2026, 1, 31)));
    }

    #[test]
    fn test_last_month_across_year_boundary() {
        let now = at(2026, 1, 5, 12);
        let window = preset_window(DatePreset::LastMonth, &now);
        assert!(window.contains(&day_instant(2025, 12, 31)));
        assert!(!window.contains(&day_instant(2026, 1, 1)));
    }
}
