use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parses a `YYYY-M-D` calendar date, with or without zero padding.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let parts = datestr.split('-').collect::<Vec<_>>();
    if parts.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = parts[0].parse::<i32>();
    let month = parts[1].parse::<u32>();
    let day = parts[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };
    if !(1970..=2100).contains(&year) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

/// Calendar date of an instant in the given zone.
pub fn local_date(ts: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

/// Materializes a wall-clock time in the given zone. Total over DST
/// transitions: an ambiguous time resolves to the earlier offset, a skipped
/// time is pushed forward an hour.
pub fn at_time(date: NaiveDate, time: NaiveTime, tz: &Tz) -> DateTime<Tz> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => Utc.from_utc_datetime(&naive).with_timezone(tz),
        },
    }
}

/// The date at 23:59:59 in the given zone.
pub fn end_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    at_time(date, last_second, tz)
}
