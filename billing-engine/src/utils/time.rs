//! Business time zone helpers
//!
//! Records carry a bare calendar date. Whenever a date is compared against an
//! instant ("now", "7 days ago") it is placed at local midnight in the
//! business time zone.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};
use shared::ErrorCode;

/// Zone used when the configured one cannot be parsed
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidDate, format!("Invalid date format: {}", date))
            .with_detail("date", date.to_string())
    })
}

/// Parse an IANA zone name, falling back to [`DEFAULT_TIMEZONE`]
pub fn parse_timezone(name: &str) -> Tz {
    name.trim().parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse business time zone '{}': {}, falling back to {}",
            name,
            e,
            DEFAULT_TIMEZONE
        );
        DEFAULT_TIMEZONE
    })
}

/// Current instant in the business zone
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Local midnight at the start of `date`
///
/// DST gap fallback: if midnight does not exist locally, the UTC midnight is used.
pub fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First and last day of the month before the one containing `date`
pub fn previous_month(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let last = month_start(date) - Duration::days(1);
    (month_start(last), last)
}
