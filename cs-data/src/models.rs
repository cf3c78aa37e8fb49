//! Summary result structs handed to the rendering layer.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use serde::Serialize;

/// One point of the temperature trend line chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    /// Raw `last_updated` text, used as the x-axis label.
    pub date: String,
    pub value: f64,
}

/// One bar of the weather condition distribution chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConditionCount {
    pub label: String,
    pub count: usize,
}

/// Dataset-wide shape and missing-value totals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub missing: usize,
}

/// The first rows of a filtered table, for the preview grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    /// Missing cells are rendered as empty strings.
    pub rows: Vec<Vec<String>>,
}
