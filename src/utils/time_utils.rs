use chrono::{DateTime, Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const S_IN_MIN: i64 = 60;
    pub const S_IN_H: i64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: i64 = Self::S_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Parse a `YYYY-MM-DD` string. Returns None for anything that is not a real calendar date.
pub fn parse_standard_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), TimeUtils::STANDARD_TIME_FORMAT).ok()
}

/// Midnight UTC of `date`, as seconds since the Unix epoch
pub fn date_to_epoch_sec(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Calendar date of an epoch timestamp after shifting by the exchange's UTC offset.
/// Index quotes are stamped at the session open, so shifting first keeps
/// e.g. a 09:15 IST bar on its own trading day.
pub fn epoch_sec_to_exchange_date(epoch_sec: i64, gmt_offset_sec: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_sec + gmt_offset_sec, 0).map(|dt| dt.date_naive())
}

/// Chart x coordinate: whole days since the Unix epoch
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    (date_to_epoch_sec(date) / TimeUtils::S_IN_D) as f64
}

/// Inverse of `date_to_plot_x`, formatted for axis labels
pub fn plot_x_to_date_string(x: f64) -> String {
    // Far zoom puts grid marks outside any representable date
    (x.round() as i64)
        .checked_mul(TimeUtils::S_IN_D)
        .and_then(|epoch_sec| DateTime::from_timestamp(epoch_sec, 0))
        .map(|dt| dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    // How many seconds ago was the event described by `past_timestamp_ms` ?
    let now_timestamp_ms = local_now_as_timestamp_ms();
    (now_timestamp_ms - past_timestamp_ms) / TimeUtils::MS_IN_S
}
