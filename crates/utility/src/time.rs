use chrono::{DateTime, NaiveDateTime};

/// Format used for timestamps in exported json files.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Converts Unix epoch seconds ("ticks") to a UTC timestamp without time zone,
/// which is what postgres expects for a `TIMESTAMP` column.
///
/// Returns `None` if the ticks are out of the range chrono can represent.
pub fn from_epoch_ticks(ticks: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(ticks, 0).map(|date_time| date_time.naive_utc())
}
