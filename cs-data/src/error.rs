//! Error types for dataset loading and summaries.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the data half of the dashboard.
///
/// Messages are shown to the viewer as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No candidate dataset file exists
    #[error("Error: {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but is not a usable CSV table
    #[error("Error loading data: {0}")]
    ParseError(String),

    /// A required column is absent
    #[error("Error: '{0}' column not found in dataset")]
    MissingColumn(String),

    /// The country column holds no values at all
    #[error("No country data available")]
    NoCountryData,

    /// The selected country matched no rows
    #[error("No data available for {0}")]
    NoDataForCountry(String),
}

impl DataError {
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        Self::ParseError(e.to_string())
    }
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_dashboard_wording() {
        let e = DataError::FileNotFound(PathBuf::from("GlobalWeatherRepository.csv"));
        assert_eq!(e.to_string(), "Error: GlobalWeatherRepository.csv not found");
        assert_eq!(
            DataError::missing_column("country").to_string(),
            "Error: 'country' column not found in dataset"
        );
        assert_eq!(
            DataError::NoDataForCountry("Chad".into()).to_string(),
            "No data available for Chad"
        );
    }
}
