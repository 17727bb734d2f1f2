// POSIX-millisecond helpers for building history query ranges.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::models::TimeRange;

pub const DAY_IN_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// A week in milliseconds.
pub const WEEK_IN_MILLIS: i64 = DAY_IN_MILLIS * 7;

/// 48 hours in milliseconds.
pub const TWO_DAYS_IN_MILLIS: i64 = DAY_IN_MILLIS * 2;

/// Milliseconds since 1970-01-01T00:00:00Z.
pub fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn week_ago_millis() -> i64 {
    current_millis() - WEEK_IN_MILLIS
}

/// 48 hours ago, plus one millisecond.
///
/// Day buckets are laid out from the range start while the bucket start is
/// still inside the (inclusive) range end. The extra millisecond pushes the
/// third bucket start past `now`, so exactly two buckets come back.
pub fn two_days_ago_millis() -> i64 {
    current_millis() - TWO_DAYS_IN_MILLIS + 1
}

/// Converts POSIX milliseconds to a UTC timestamp, saturating at chrono's range.
pub fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Whole local calendar days between today and `date_time`. Time of day is ignored.
pub fn days_in_past<Tz: TimeZone>(date_time: &DateTime<Tz>) -> u32 {
    days_in_past_from(Local::now().date_naive(), date_time)
}

/// Same as [`days_in_past`] with an explicit `today`. Dates after `today` give 0.
pub fn days_in_past_from<Tz: TimeZone>(today: NaiveDate, date_time: &DateTime<Tz>) -> u32 {
    let date = date_time.with_timezone(&Local).date_naive();
    u32::try_from((today - date).num_days()).unwrap_or(0)
}

impl TimeRange {
    /// `[two_days_ago_millis(), current_millis()]`
    pub fn last_two_days() -> Self {
        let start_ms = two_days_ago_millis();
        let end_ms = current_millis();
        Self { start_ms, end_ms }
    }
}
