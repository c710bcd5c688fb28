use chrono::{DateTime, Datelike, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Calendar date of a provider timestamp (Unix seconds, UTC).
pub fn epoch_sec_to_date(epoch_sec: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_sec, 0).map(|dt| dt.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

// Plot x coordinates are whole days since the Common Era, so one bar is one
// unit and the axis formatter can round-trip back to a date.

pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_conversion_lands_on_utc_date() {
        // 2024-01-15 14:30:00 UTC
        let date = epoch_sec_to_date(1_705_329_000).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn plot_x_round_trips() {
        let date = NaiveDate::from_ymd_opt(2022, 2, 24).unwrap();
        assert_eq!(plot_x_to_date(date_to_plot_x(date)), Some(date));
    }
}
