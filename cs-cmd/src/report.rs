//! Plain-text reports over a weather dataset.

use cs_core::DashboardConfig;
use cs_data::{AlertThresholds, DataError, Dataset, DatasetLoader, TemperatureUnit};
use cs_utils::format::one_decimal;
use log::info;
use std::fmt::Write;
use std::path::Path;
use std::rc::Rc;

/// Load `csv` if given, otherwise the configured path and its fallbacks.
pub fn load_dataset(csv: Option<&Path>, config: &DashboardConfig) -> Result<Rc<Dataset>, DataError> {
    let loader = match csv {
        Some(path) => DatasetLoader::new(path),
        None => config.loader(),
    };
    let dataset = loader.load()?;
    info!(
        "Loaded {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// One country per line, sorted.
pub fn countries_report(dataset: &Dataset) -> anyhow::Result<String> {
    Ok(dataset.countries()?.join("\n"))
}

pub fn summary_report(
    dataset: &Dataset,
    country: &str,
    unit: TemperatureUnit,
    with_trend: bool,
    thresholds: &AlertThresholds,
) -> anyhow::Result<String> {
    let slice = dataset.filter_country(country)?;
    let summary = slice.summarize(unit, thresholds)?;
    let symbol = unit.symbol();

    let mut out = String::new();
    writeln!(out, "Country: {} ({} rows)", summary.country, slice.len())?;
    writeln!(out, "Avg Temp (°{}): {}", symbol, one_decimal(summary.avg_temp))?;
    writeln!(out, "Max Temp (°{}): {}", symbol, one_decimal(summary.max_temp))?;
    writeln!(out, "Avg Wind (km/h): {}", one_decimal(summary.avg_wind))?;
    writeln!(out, "Common Weather: {}", summary.common_condition)?;
    for alert in &summary.alerts {
        writeln!(out, "Alert: {}", alert.message())?;
    }

    writeln!(out, "Conditions:")?;
    for entry in slice.condition_distribution() {
        writeln!(out, "  {}: {}", entry.label, entry.count)?;
    }

    if with_trend {
        match slice.trend(unit) {
            Ok(points) => {
                writeln!(out, "Trend:")?;
                for point in points {
                    writeln!(out, "  {}  {:.1}", point.date, point.value)?;
                }
            }
            Err(e) => writeln!(out, "Trend unavailable: {}", e)?,
        }
    }

    write!(out, "Insight: {}", summary.insight())?;
    Ok(out)
}

pub fn overview_report(dataset: &Dataset) -> String {
    let overview = dataset.overview();
    format!(
        "Rows: {}\nColumns: {}\nMissing Values: {}",
        overview.rows, overview.columns, overview.missing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const CSV: &str = "\
country,temperature_celsius,temperature_fahrenheit,wind_kph,condition_text,last_updated
India,30.0,86.0,10.0,Sunny,2024-05-18 10:00
India,36.0,96.8,12.0,Sunny,2024-05-16 10:00
India,40.0,104.0,14.0,Rainy,2024-05-17 10:00
Norway,10.0,50.0,35.0,Cloudy,
";

    fn dataset() -> Dataset {
        Dataset::from_csv_str(CSV).unwrap()
    }

    #[test]
    fn countries_are_sorted_lines() {
        assert_eq!(countries_report(&dataset()).unwrap(), "India\nNorway");
    }

    #[test]
    fn summary_includes_metrics_alerts_and_trend() {
        let report = summary_report(
            &dataset(),
            "India",
            TemperatureUnit::Celsius,
            true,
            &AlertThresholds::default(),
        )
        .unwrap();

        assert!(report.contains("Country: India (3 rows)"));
        assert!(report.contains("Avg Temp (°C): 35.3"));
        assert!(report.contains("Max Temp (°C): 40.0"));
        assert!(report.contains("Avg Wind (km/h): 12.0"));
        assert!(report.contains("Common Weather: Sunny"));
        assert!(report.contains("Alert: Heat Alert: Extremely high temperature detected!"));
        assert!(report.contains("  Sunny: 2\n  Rainy: 1"));

        let trend_start = report.find("Trend:").unwrap();
        let trend = &report[trend_start..];
        let first = trend.find("2024-05-16").unwrap();
        let last = trend.find("2024-05-18").unwrap();
        assert!(first < last);

        assert!(report.ends_with(
            "Insight: India experiences an average temperature of 35.3°C with predominantly sunny conditions."
        ));
    }

    #[test]
    fn summary_in_fahrenheit_has_no_heat_alert() {
        let report = summary_report(
            &dataset(),
            "India",
            TemperatureUnit::Fahrenheit,
            false,
            &AlertThresholds::default(),
        )
        .unwrap();
        assert!(report.contains("Max Temp (°F): 104.0"));
        assert!(!report.contains("Heat Alert"));
        assert!(!report.contains("Trend"));
    }

    #[test]
    fn summary_of_unknown_country_fails() {
        let err = summary_report(
            &dataset(),
            "Chile",
            TemperatureUnit::Celsius,
            false,
            &AlertThresholds::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No data available for Chile");
    }

    #[test]
    fn overview_counts_missing_cells() {
        assert_eq!(overview_report(&dataset()), "Rows: 4\nColumns: 6\nMissing Values: 1");
    }

    #[test]
    fn explicit_csv_overrides_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let config = DashboardConfig::default();
        let dataset = load_dataset(Some(file.path()), &config).unwrap();
        assert_eq!(dataset.row_count(), 4);
    }

    #[test]
    fn missing_csv_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = load_dataset(Some(&path), &DashboardConfig::default()).unwrap_err();
        assert_eq!(err, DataError::FileNotFound(path));
    }
}
