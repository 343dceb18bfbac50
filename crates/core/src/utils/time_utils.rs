use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// First instant of the UTC calendar month containing `now`.
///
/// Monthly analytics use the window `[start_of_month(now), now]`.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    match NaiveDate::from_ymd_opt(now.year(), now.month(), 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        Some(first_instant) => Utc.from_utc_datetime(&first_instant),
        None => now,
    }
}

/// Whether `instant` falls within the inclusive range `[start, end]`.
pub fn within_inclusive(instant: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    instant >= start && instant <= end
}
