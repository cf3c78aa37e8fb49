//! Per-country weather summary.
//!
//! [`Dataset::filter_country`] selects the rows for one country; the
//! resulting [`CountrySlice`] computes the metric cards, advisory alerts,
//! trend series, condition distribution and preview grid.

use crate::columns;
use crate::dataset::{Dataset, Row};
use crate::error::{DataError, Result};
use crate::models::{ConditionCount, PreviewTable, TrendPoint};
use cs_utils::dates::{format_timestamp, parse_timestamp};
use cs_utils::format::one_decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Shown when no condition text is available.
pub const NO_CONDITION: &str = "N/A";

/// Temperature unit selected by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    /// Dataset column holding temperatures in this unit.
    pub fn column(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => columns::TEMPERATURE_CELSIUS,
            TemperatureUnit::Fahrenheit => columns::TEMPERATURE_FAHRENHEIT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(format!("unknown temperature unit: {}", other)),
        }
    }
}

/// Limits above which advisory alerts fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Max temperature in Celsius; only checked when viewing Celsius.
    pub heat_celsius: f64,
    /// Average wind speed in km/h.
    pub wind_kph: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            heat_celsius: 35.0,
            wind_kph: 30.0,
        }
    }
}

/// Advisory, non-blocking weather alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alert {
    HeatAlert,
    HighWindAlert,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::HeatAlert => "Heat Alert: Extremely high temperature detected!",
            Alert::HighWindAlert => "Strong wind conditions observed",
        }
    }
}

/// Metric cards and alerts for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub country: String,
    pub unit: TemperatureUnit,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_wind: Option<f64>,
    pub common_condition: String,
    pub alerts: Vec<Alert>,
}

impl WeatherSummary {
    /// One-sentence description of the country's weather.
    pub fn insight(&self) -> String {
        format!(
            "{} experiences an average temperature of {}°{} with predominantly {} conditions.",
            self.country,
            one_decimal(self.avg_temp),
            self.unit.symbol(),
            self.common_condition.to_lowercase()
        )
    }
}

/// Rows of a dataset belonging to one country.
#[derive(Debug, Clone)]
pub struct CountrySlice<'a> {
    dataset: &'a Dataset,
    country: String,
    rows: Vec<usize>,
}

impl Dataset {
    /// Select the rows whose `country` equals `country` exactly.
    pub fn filter_country(&self, country: &str) -> Result<CountrySlice<'_>> {
        if !self.has_column(columns::COUNTRY) {
            return Err(DataError::missing_column(columns::COUNTRY));
        }
        let rows: Vec<usize> = self
            .rows()
            .enumerate()
            .filter(|(_, r)| r.get(columns::COUNTRY) == Some(country))
            .map(|(i, _)| i)
            .collect();
        if rows.is_empty() {
            return Err(DataError::NoDataForCountry(country.to_string()));
        }
        Ok(CountrySlice {
            dataset: self,
            country: country.to_string(),
            rows,
        })
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Occurrence counts in order of first appearance.
fn counts_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut order: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value, 1));
            }
        }
    }
    order
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum TrendKey<'a> {
    Parsed(chrono::NaiveDateTime),
    Unparsed(&'a str),
}

impl<'a> CountrySlice<'a> {
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + '_ {
        self.rows.iter().filter_map(|&i| self.dataset.row(i))
    }

    fn require(&self, column: &str) -> Result<()> {
        if self.dataset.has_column(column) {
            Ok(())
        } else {
            Err(DataError::missing_column(column))
        }
    }

    fn numbers(&self, column: &str) -> Result<Vec<f64>> {
        self.require(column)?;
        Ok(self.rows().filter_map(|r| r.get_f64(column)).collect())
    }

    /// Most frequent condition text; ties go to the first one seen.
    pub fn common_condition(&self) -> String {
        let counts = counts_in_order(self.rows().filter_map(|r| r.get(columns::CONDITION_TEXT)));
        let mut best: Option<(&str, usize)> = None;
        for (value, count) in counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(v, _)| v.to_string())
            .unwrap_or_else(|| NO_CONDITION.to_string())
    }

    /// Compute the metric cards and advisory alerts.
    pub fn summarize(&self, unit: TemperatureUnit, thresholds: &AlertThresholds) -> Result<WeatherSummary> {
        let temps = self.numbers(unit.column())?;
        let winds = self.numbers(columns::WIND_KPH)?;

        let avg_temp = mean(&temps);
        let max_temp = max(&temps);
        let avg_wind = mean(&winds);

        let mut alerts = Vec::new();
        if unit == TemperatureUnit::Celsius && max_temp.is_some_and(|t| t > thresholds.heat_celsius) {
            alerts.push(Alert::HeatAlert);
        }
        if avg_wind.is_some_and(|w| w > thresholds.wind_kph) {
            alerts.push(Alert::HighWindAlert);
        }
        for alert in &alerts {
            log::info!("[ClimateScope] summary: {} -> {:?}", self.country, alert);
        }

        Ok(WeatherSummary {
            country: self.country.clone(),
            unit,
            avg_temp,
            max_temp,
            avg_wind,
            common_condition: self.common_condition(),
            alerts,
        })
    }

    /// Temperature over time, sorted by `last_updated`.
    ///
    /// Unparseable stamps sort after parseable ones, by their text; rows
    /// without a stamp or a numeric temperature are left out.
    pub fn trend(&self, unit: TemperatureUnit) -> Result<Vec<TrendPoint>> {
        self.require(columns::LAST_UPDATED)?;
        self.require(unit.column())?;

        let mut points: Vec<(TrendKey<'a>, TrendPoint)> = self
            .rows()
            .filter_map(|r| {
                let stamp = r.get(columns::LAST_UPDATED)?;
                let value = r.get_f64(unit.column())?;
                let (key, date) = match parse_timestamp(stamp) {
                    Ok(dt) => (TrendKey::Parsed(dt), format_timestamp(&dt)),
                    Err(_) => (TrendKey::Unparsed(stamp), stamp.to_string()),
                };
                Some((key, TrendPoint { date, value }))
            })
            .collect();
        points.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(points.into_iter().map(|(_, p)| p).collect())
    }

    /// Condition text counts, most frequent first; equal counts keep first-seen order.
    pub fn condition_distribution(&self) -> Vec<ConditionCount> {
        let mut counts = counts_in_order(self.rows().filter_map(|r| r.get(columns::CONDITION_TEXT)));
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(label, count)| ConditionCount {
                label: label.to_string(),
                count,
            })
            .collect()
    }

    /// The first `limit` rows of the slice, every column.
    pub fn preview(&self, limit: usize) -> PreviewTable {
        PreviewTable {
            headers: self.dataset.headers().to_vec(),
            rows: self
                .rows()
                .take(limit)
                .map(|r| {
                    r.cells()
                        .iter()
                        .map(|c| c.clone().unwrap_or_default())
                        .collect()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, f64, f64, &str, &str)]) -> Dataset {
        let mut csv = String::from(
            "country,temperature_celsius,temperature_fahrenheit,wind_kph,condition_text,last_updated\n",
        );
        for (country, c, wind, cond, stamp) in rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                country,
                c,
                c * 9.0 / 5.0 + 32.0,
                wind,
                cond,
                stamp
            ));
        }
        Dataset::from_csv_str(&csv).unwrap()
    }

    #[test]
    fn hot_celsius_triggers_heat_alert() {
        let ds = dataset(&[
            ("India", 30.0, 10.0, "Sunny", "2024-05-16 10:00"),
            ("India", 36.0, 10.0, "Sunny", "2024-05-17 10:00"),
            ("India", 40.0, 10.0, "Rainy", "2024-05-18 10:00"),
        ]);
        let summary = ds
            .filter_country("India")
            .unwrap()
            .summarize(TemperatureUnit::Celsius, &AlertThresholds::default())
            .unwrap();
        assert_eq!(summary.max_temp, Some(40.0));
        assert_eq!(summary.avg_temp, Some(106.0 / 3.0));
        assert_eq!(summary.alerts, vec![Alert::HeatAlert]);
        assert_eq!(summary.common_condition, "Sunny");
    }

    #[test]
    fn mild_celsius_has_no_alert() {
        let ds = dataset(&[
            ("India", 10.0, 5.0, "Sunny", "2024-05-16 10:00"),
            ("India", 20.0, 5.0, "Sunny", "2024-05-17 10:00"),
            ("India", 25.0, 5.0, "Sunny", "2024-05-18 10:00"),
        ]);
        let summary = ds
            .filter_country("India")
            .unwrap()
            .summarize(TemperatureUnit::Celsius, &AlertThresholds::default())
            .unwrap();
        assert_eq!(summary.max_temp, Some(25.0));
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn heat_alert_only_in_celsius() {
        let ds = dataset(&[("India", 40.0, 5.0, "Sunny", "2024-05-16 10:00")]);
        let summary = ds
            .filter_country("India")
            .unwrap()
            .summarize(TemperatureUnit::Fahrenheit, &AlertThresholds::default())
            .unwrap();
        assert_eq!(summary.max_temp, Some(104.0));
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn strong_average_wind_triggers_wind_alert() {
        let ds = dataset(&[
            ("Chad", 20.0, 25.0, "Windy", "2024-05-16 10:00"),
            ("Chad", 20.0, 40.0, "Windy", "2024-05-17 10:00"),
        ]);
        let summary = ds
            .filter_country("Chad")
            .unwrap()
            .summarize(TemperatureUnit::Celsius, &AlertThresholds::default())
            .unwrap();
        assert_eq!(summary.avg_wind, Some(32.5));
        assert_eq!(summary.alerts, vec![Alert::HighWindAlert]);
    }

    #[test]
    fn values_at_thresholds_do_not_alert() {
        let ds = dataset(&[
            ("Oman", 33.0, 28.0, "Sunny", "2024-05-16 10:00"),
            ("Oman", 35.0, 32.0, "Sunny", "2024-05-17 10:00"),
        ]);
        let summary = ds
            .filter_country("Oman")
            .unwrap()
            .summarize(TemperatureUnit::Celsius, &AlertThresholds::default())
            .unwrap();
        assert_eq!(summary.max_temp, Some(35.0));
        assert_eq!(summary.avg_wind, Some(30.0));
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn unknown_country_is_no_data() {
        let ds = dataset(&[("India", 20.0, 5.0, "Sunny", "2024-05-16 10:00")]);
        assert_eq!(
            ds.filter_country("Atlantis").unwrap_err(),
            DataError::NoDataForCountry("Atlantis".to_string())
        );
    }

    #[test]
    fn mode_tie_goes_to_first_seen() {
        let ds = dataset(&[
            ("Peru", 20.0, 5.0, "Rainy", "2024-05-16 10:00"),
            ("Peru", 20.0, 5.0, "Sunny", "2024-05-17 10:00"),
            ("Peru", 20.0, 5.0, "Sunny", "2024-05-18 10:00"),
            ("Peru", 20.0, 5.0, "Rainy", "2024-05-19 10:00"),
        ]);
        assert_eq!(ds.filter_country("Peru").unwrap().common_condition(), "Rainy");
    }

    #[test]
    fn missing_conditions_resolve_to_na() {
        let ds = Dataset::from_csv_str(
            "country,temperature_celsius,wind_kph,condition_text\nPeru,20,5,\nPeru,21,5,NA\n",
        )
        .unwrap();
        let slice = ds.filter_country("Peru").unwrap();
        assert_eq!(slice.common_condition(), NO_CONDITION);
        assert!(slice.condition_distribution().is_empty());
    }

    #[test]
    fn summarize_requires_temperature_column() {
        let ds = Dataset::from_csv_str("country,wind_kph,condition_text\nPeru,5,Sunny\n").unwrap();
        let err = ds
            .filter_country("Peru")
            .unwrap()
            .summarize(TemperatureUnit::Fahrenheit, &AlertThresholds::default())
            .unwrap_err();
        assert_eq!(err, DataError::missing_column("temperature_fahrenheit"));
    }

    #[test]
    fn distribution_is_count_descending() {
        let ds = dataset(&[
            ("Peru", 20.0, 5.0, "Mist", "2024-05-16 10:00"),
            ("Peru", 20.0, 5.0, "Sunny", "2024-05-17 10:00"),
            ("Peru", 20.0, 5.0, "Sunny", "2024-05-18 10:00"),
            ("Peru", 20.0, 5.0, "Cloudy", "2024-05-19 10:00"),
            ("Chad", 20.0, 5.0, "Sunny", "2024-05-19 10:00"),
        ]);
        let dist = ds.filter_country("Peru").unwrap().condition_distribution();
        let labels: Vec<(&str, usize)> = dist.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(labels, vec![("Sunny", 2), ("Mist", 1), ("Cloudy", 1)]);
    }

    #[test]
    fn trend_is_chronological() {
        let ds = dataset(&[
            ("Peru", 22.0, 5.0, "Sunny", "2024-05-18 09:00"),
            ("Peru", 20.0, 5.0, "Sunny", "2024-05-16 10:00"),
            ("Peru", 21.0, 5.0, "Sunny", "not a date"),
            ("Peru", 23.0, 5.0, "Sunny", "2024-05-17 23:45"),
        ]);
        let trend = ds.filter_country("Peru").unwrap().trend(TemperatureUnit::Celsius).unwrap();
        let dates: Vec<&str> = trend.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-05-16 10:00", "2024-05-17 23:45", "2024-05-18 09:00", "not a date"]
        );
        assert_eq!(trend[0].value, 20.0);
    }

    #[test]
    fn trend_without_last_updated_is_missing_column() {
        let ds = Dataset::from_csv_str(
            "country,temperature_celsius,wind_kph,condition_text\nPeru,20,5,Sunny\n",
        )
        .unwrap();
        assert_eq!(
            ds.filter_country("Peru").unwrap().trend(TemperatureUnit::Celsius),
            Err(DataError::missing_column("last_updated"))
        );
    }

    #[test]
    fn preview_takes_first_rows() {
        let ds = dataset(&[
            ("Peru", 1.0, 5.0, "Sunny", "2024-05-16 10:00"),
            ("Peru", 2.0, 5.0, "Sunny", "2024-05-16 11:00"),
            ("Peru", 3.0, 5.0, "Sunny", "2024-05-16 12:00"),
        ]);
        let preview = ds.filter_country("Peru").unwrap().preview(2);
        assert_eq!(preview.headers.len(), 6);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[1][1], "2");
    }

    #[test]
    fn insight_sentence() {
        let summary = WeatherSummary {
            country: "India".to_string(),
            unit: TemperatureUnit::Fahrenheit,
            avg_temp: Some(88.04),
            max_temp: Some(100.0),
            avg_wind: Some(10.0),
            common_condition: "Partly Cloudy".to_string(),
            alerts: Vec::new(),
        };
        assert_eq!(
            summary.insight(),
            "India experiences an average temperature of 88.0°F with predominantly partly cloudy conditions."
        );
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("celsius".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }
}
