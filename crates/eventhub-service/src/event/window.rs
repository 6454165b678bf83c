//! Calendar-day boundaries used by the upcoming and live listings.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;

/// Start of `day` in `tz`, as UTC.
///
/// When midnight does not exist locally (a DST gap) the first valid instant
/// of the day is used instead.
fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> AppResult<DateTime<Utc>> {
    let midnight = day.and_time(NaiveTime::MIN);

    (0..=2)
        .find_map(|hours| {
            tz.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map(|start| start.with_timezone(&Utc))
        .ok_or_else(|| AppError::internal(format!("No valid local start for {day}")))
}

/// The half-open window `[today 00:00, tomorrow 00:00)` around `now`, in
/// `now`'s timezone, converted to UTC.
pub fn day_window<Tz: TimeZone>(now: &DateTime<Tz>) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let tz = now.timezone();
    let today = now.date_naive();
    let tomorrow = today
        .succ_opt()
        .ok_or_else(|| AppError::internal("Date out of range"))?;

    Ok((start_of_day(&tz, today)?, start_of_day(&tz, tomorrow)?))
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn test_utc_window_is_calendar_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let (start, end) = day_window(&now).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_offset_window_uses_local_midnight() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        // 01:30 local on the 1st is still the previous day in UTC.
        let now = tz.with_ymd_and_hms(2025, 6, 1, 1, 30, 0).unwrap();
        let (start, end) = day_window(&now).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2025, 5, 31, 22, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 1, 22, 0, 0).unwrap());
        assert!(start <= now.with_timezone(&Utc) && now.with_timezone(&Utc) < end);
    }

    #[test]
    fn test_window_spans_year_end() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let (start, end) = day_window(&now).unwrap();

        assert_eq!(end - start, Duration::days(1));
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }
}
