//! In-memory weather table parsed from CSV.
//!
//! Cells are kept as trimmed text; numeric columns are parsed on demand.
//! Empty cells and the usual null markers (`NA`, `NaN`, `null`, ...) are
//! stored as `None` so missing-value accounting matches what a spreadsheet
//! user would expect.

use crate::error::{DataError, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Cell text treated as missing.
const NULL_MARKERS: [&str; 9] = ["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "<NA>"];

fn to_cell(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || NULL_MARKERS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// A parsed CSV table with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Option<String>],
}

impl<'a> Row<'a> {
    /// Text of the named cell, `None` when the column is absent or the cell is missing.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.cells.get(idx)?.as_deref()
    }

    /// Numeric value of the named cell; non-numeric text counts as missing.
    pub fn get_f64(&self, column: &str) -> Option<f64> {
        self.get(column)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| !v.is_nan())
    }

    /// All cells in header order.
    pub fn cells(&self) -> &'a [Option<String>] {
        self.cells
    }
}

impl Dataset {
    /// Parse a CSV string whose first line is the header row.
    ///
    /// # Example CSV
    /// ```text
    /// country,location_name,temperature_celsius,temperature_fahrenheit,wind_kph,condition_text,last_updated
    /// India,New Delhi,36.0,96.8,12.2,Sunny,2024-05-16 13:15
    /// ```
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(csv_data.as_bytes());

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DataError::ParseError("No columns to parse from file".to_string()));
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(to_cell).collect());
        }

        log::info!(
            "[ClimateScope] dataset: Parsed {} rows x {} columns",
            rows.len(),
            headers.len()
        );
        Ok(Self { headers, rows })
    }

    /// Read and parse a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DataError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(DataError::ParseError(e.to_string())),
        };
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| DataError::ParseError(e.to_string()))?;
        Self::from_csv_str(&contents)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn row(&self, idx: usize) -> Option<Row<'_>> {
        self.rows.get(idx).map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(move |cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Number of missing cells across the whole table.
    pub fn missing_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_none()).count())
            .sum()
    }

    /// Sorted distinct non-null values of the `country` column.
    pub fn countries(&self) -> Result<Vec<String>> {
        if !self.has_column(crate::columns::COUNTRY) {
            return Err(DataError::missing_column(crate::columns::COUNTRY));
        }
        let countries: BTreeSet<&str> = self
            .rows()
            .filter_map(|r| r.get(crate::columns::COUNTRY))
            .collect();
        if countries.is_empty() {
            return Err(DataError::NoCountryData);
        }
        Ok(countries.into_iter().map(str::to_string).collect())
    }
}
