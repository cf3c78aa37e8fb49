//! Weather dataset loading and per-country summaries.
//!
//! A [`Dataset`] is parsed once from CSV (an embedded string in the web app,
//! a file path in the CLI) and is read-only afterwards. Every summary is a
//! pure function of the dataset plus the viewer's selections:
//!
//! ```rust
//! use cs_data::{AlertThresholds, Dataset, TemperatureUnit};
//!
//! let csv = "\
//! country,temperature_celsius,temperature_fahrenheit,wind_kph,condition_text
//! India,36.0,96.8,12.0,Sunny
//! India,30.0,86.0,10.0,Sunny
//! ";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//! assert_eq!(dataset.countries().unwrap(), vec!["India".to_string()]);
//!
//! let slice = dataset.filter_country("India").unwrap();
//! let summary = slice
//!     .summarize(TemperatureUnit::Celsius, &AlertThresholds::default())
//!     .unwrap();
//! assert_eq!(summary.common_condition, "Sunny");
//! assert_eq!(summary.alerts.len(), 1);
//! ```

pub mod dataset;
pub mod error;
pub mod loader;
pub mod models;
mod overview;
pub mod summary;

pub use dataset::{Dataset, Row};
pub use error::{DataError, Result};
pub use loader::DatasetLoader;
pub use models::{ConditionCount, DatasetOverview, PreviewTable, TrendPoint};
pub use summary::{Alert, AlertThresholds, CountrySlice, TemperatureUnit, WeatherSummary};

/// Column names the dashboard reads.
pub mod columns {
    pub const COUNTRY: &str = "country";
    pub const TEMPERATURE_CELSIUS: &str = "temperature_celsius";
    pub const TEMPERATURE_FAHRENHEIT: &str = "temperature_fahrenheit";
    pub const WIND_KPH: &str = "wind_kph";
    pub const CONDITION_TEXT: &str = "condition_text";
    pub const LAST_UPDATED: &str = "last_updated";
}
