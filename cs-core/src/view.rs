//! Declarative render output.
//!
//! A [`View`] is everything the host needs to draw one frame: which page,
//! which image, which metric cards and charts, which messages. It is a pure
//! function of controller state and the loaded dataset.

use crate::rotation::{RotationInterval, RotationMode};
use cs_data::{ConditionCount, DatasetOverview, PreviewTable, TemperatureUnit, TrendPoint, WeatherSummary};
use serde::Serialize;

pub const AUTH_TITLE: &str = "ClimateScope Authentication";
pub const AUTH_CAPTION: &str = "Login or Register to access the ClimateScope Dashboard";
pub const DASHBOARD_TITLE: &str = "ClimateScope Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Visualizing Global Weather Trends";
pub const DATASET_LOADED: &str = "Dataset loaded successfully";

/// Number of rows in the data preview grid.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum View {
    Auth(AuthView),
    Dashboard(Box<DashboardView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthView {
    pub hero_image: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub url: String,
    pub index: usize,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub image: ImageRequest,
    pub rotation: RotationMode,
    pub selected_interval: RotationInterval,
    pub welcome: String,
    pub data: DataSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DataSection {
    /// Loader or country-column failure; nothing below the image is computed.
    Unavailable { message: String },
    Ready(Box<DataPanel>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPanel {
    pub loaded_notice: String,
    pub countries: Vec<String>,
    pub selected_country: String,
    pub unit: TemperatureUnit,
    pub show_trend: bool,
    pub report: ReportSection,
    pub overview: DatasetOverview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportSection {
    /// The selected country has no rows (or lacks a required column).
    Empty { message: String },
    Ready(Box<CountryReport>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReport {
    pub preview: PreviewTable,
    pub metrics: Vec<Metric>,
    pub summary: WeatherSummary,
    pub trend: TrendSection,
    pub distribution: Vec<ConditionCount>,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendSection {
    Hidden,
    Chart { points: Vec<TrendPoint> },
    Unavailable { message: String },
}

/// Inputs of the two dashboard charts.
///
/// Independent of the rotation counter, so hosts can compare successive
/// values and skip redrawing on timer ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub unit: TemperatureUnit,
    /// `None` when the trend is hidden or unavailable.
    pub trend: Option<Vec<TrendPoint>>,
    pub distribution: Vec<ConditionCount>,
}

impl View {
    pub fn as_dashboard(&self) -> Option<&DashboardView> {
        match self {
            View::Dashboard(d) => Some(d),
            View::Auth(_) => None,
        }
    }

    /// Chart inputs, when a country report is shown.
    pub fn chart_data(&self) -> Option<ChartData> {
        let dashboard = self.as_dashboard()?;
        let panel = dashboard.panel()?;
        let report = dashboard.report()?;
        let trend = match &report.trend {
            TrendSection::Chart { points } => Some(points.clone()),
            TrendSection::Hidden | TrendSection::Unavailable { .. } => None,
        };
        Some(ChartData {
            unit: panel.unit,
            trend,
            distribution: report.distribution.clone(),
        })
    }
}

impl DashboardView {
    pub fn panel(&self) -> Option<&DataPanel> {
        match &self.data {
            DataSection::Ready(panel) => Some(panel),
            DataSection::Unavailable { .. } => None,
        }
    }

    pub fn report(&self) -> Option<&CountryReport> {
        match &self.panel()?.report {
            ReportSection::Ready(report) => Some(report),
            ReportSection::Empty { .. } => None,
        }
    }
}
