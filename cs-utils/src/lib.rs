//! Shared utility functions for ClimateScope crates.

/// Timestamp utility functions for the `last_updated` column.
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Accepted layouts for `last_updated`, tried in order.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Parse a `last_updated` stamp such as "2024-05-16 13:15".
    ///
    /// A bare "YYYY-MM-DD" date is accepted and taken as midnight.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(dt);
            }
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid midnight for {}", date))
    }

    /// Format a timestamp as "YYYY-MM-DD HH:MM" for chart axes.
    pub fn format_timestamp(dt: &NaiveDateTime) -> String {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }

}

/// Display formatting for dashboard metrics.
pub mod format {
    /// Format a metric with one decimal place; a missing value renders as "nan".
    pub fn one_decimal(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.1}", v),
            None => "nan".to_string(),
        }
    }

}
