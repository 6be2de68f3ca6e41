//! Conversions between calendar datetimes and unix timestamps in seconds

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};


/// format accepted by [date_to_timestamp]
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// format produced by [timestamp_to_date]
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// look up the IANA time zone `name`, or the system time zone if `name` is
/// `None`
pub fn time_zone(name: Option<&str>) -> Result<TimeZone, jiff::Error> {
    match name {
        Some(name) => TimeZone::get(name),
        None => {
            let tz = TimeZone::system();
            log::debug!("using system time zone {:?}", tz.iana_name());
            Ok(tz)
        }
    }
}

/// seconds since the unix epoch of `date`, formatted like
/// 2015-02-13T18:59:12, interpreted as a wall clock time in `tz`
pub fn date_to_timestamp(
    date: &str,
    tz: &TimeZone,
) -> Result<i64, jiff::Error> {
    let dt = DateTime::strptime(INPUT_FORMAT, date.trim())?;
    let zoned = dt.to_zoned(tz.clone())?;
    Ok(zoned.timestamp().as_second())
}

/// wall clock time in `tz` of `timestamp` seconds since the unix epoch
pub fn timestamp_to_date(
    timestamp: i64,
    tz: &TimeZone,
) -> Result<String, jiff::Error> {
    let ts = Timestamp::from_second(timestamp)?;
    Ok(ts.to_zoned(tz.clone()).strftime(OUTPUT_FORMAT).to_string())
}
