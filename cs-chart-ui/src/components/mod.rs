//! Reusable Dioxus RSX components for the ClimateScope dashboard.

mod auth_forms;
mod chart_container;
mod chart_header;
mod country_selector;
mod loading_spinner;
mod message_box;
mod metric_row;
mod overview_panel;
mod preview_grid;
mod rotation_control;
mod unit_selector;

pub use auth_forms::{AuthTabs, LoginForm, RegisterForm};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_selector::CountrySelector;
pub use loading_spinner::LoadingSpinner;
pub use message_box::{MessageBox, MessageLevel, NoticeBanner};
pub use metric_row::MetricRow;
pub use overview_panel::OverviewPanel;
pub use preview_grid::PreviewGrid;
pub use rotation_control::{RotatingImage, RotationControl};
pub use unit_selector::{TrendToggle, UnitSelector};
