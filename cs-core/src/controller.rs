//! Event dispatcher and renderer for one client connection.

use crate::config::DashboardConfig;
use crate::event::{Event, Notice};
use crate::rotation::{image_index, Rotation};
use crate::session::Session;
use crate::view::{
    AuthView, CountryReport, DashboardView, DataPanel, DataSection, ImageRequest, Metric,
    ReportSection, TrendSection, View, AUTH_CAPTION, AUTH_TITLE, DATASET_LOADED, PREVIEW_ROWS,
};
use cs_data::{AlertThresholds, DataError, Dataset, TemperatureUnit};
use cs_utils::format::one_decimal;
use serde::Serialize;

pub const LOGIN_SUCCESS: &str = "Login Successful";
pub const REGISTRATION_SUCCESS: &str = "Registration successful. Please login.";

/// The viewer's dashboard selections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    /// `None` means the first country in the list.
    pub country: Option<String>,
    pub unit: TemperatureUnit,
    pub show_trend: bool,
}

/// Owns the session plus dashboard UI state and applies events to them.
#[derive(Debug, Clone)]
pub struct Controller {
    session: Session,
    rotation: Rotation,
    selection: Selection,
    images: Vec<String>,
    thresholds: AlertThresholds,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl Controller {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            session: Session::with_credentials(config.seed_users.clone()),
            rotation: Rotation::new(),
            selection: Selection::default(),
            images: config.images.clone(),
            thresholds: config.thresholds(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Apply one event. Auth events are ignored once signed in and
    /// dashboard events are ignored until then.
    pub fn dispatch(&mut self, event: Event) -> Option<Notice> {
        if event.is_auth_event() == self.session.is_authenticated() {
            log::debug!("[ClimateScope] controller: Ignoring {} on this page", event.name());
            return None;
        }
        log::debug!("[ClimateScope] controller: {}", event.name());

        match event {
            Event::LoginSubmitted { username, password } => {
                Some(match self.session.login(&username, &password) {
                    Ok(_) => Notice::Success(LOGIN_SUCCESS.to_string()),
                    Err(e) => Notice::Error(e.to_string()),
                })
            }
            Event::RegisterSubmitted {
                username,
                email,
                password,
                confirm_password,
            } => Some(
                match self.session.register(&username, &email, &password, &confirm_password) {
                    Ok(()) => Notice::Success(REGISTRATION_SUCCESS.to_string()),
                    Err(e) => Notice::Error(e.to_string()),
                },
            ),
            Event::TimerTick => {
                self.rotation.tick(&mut self.session);
                None
            }
            Event::ToggleChanged { enabled } => {
                self.rotation.set_enabled(enabled, &mut self.session);
                None
            }
            Event::IntervalSelected { interval } => {
                self.rotation.select_interval(interval);
                None
            }
            Event::CountrySelected { country } => {
                self.selection.country = Some(country);
                None
            }
            Event::UnitChanged { unit } => {
                self.selection.unit = unit;
                None
            }
            Event::TrendToggled { show } => {
                self.selection.show_trend = show;
                None
            }
            Event::LogoutClicked => {
                self.session.logout();
                self.rotation.reset(&mut self.session);
                self.selection = Selection::default();
                None
            }
        }
    }

    /// Build the frame for the current state.
    pub fn render(&self, dataset: Result<&Dataset, &DataError>) -> View {
        let Some(user) = self.session.active_user() else {
            return View::Auth(AuthView {
                hero_image: self.images.first().cloned().unwrap_or_default(),
                title: AUTH_TITLE.to_string(),
                caption: AUTH_CAPTION.to_string(),
            });
        };

        View::Dashboard(Box::new(DashboardView {
            image: self.image(),
            rotation: self.rotation.mode(),
            selected_interval: self.rotation.selected_interval(),
            welcome: format!("Welcome {}", user),
            data: self.data_section(dataset),
        }))
    }

    /// Image currently selected by the rotation counter.
    pub fn image(&self) -> ImageRequest {
        let counter = self.session.rotation_counter();
        let index = image_index(counter, self.images.len());
        ImageRequest {
            url: self.images.get(index).cloned().unwrap_or_default(),
            index,
            caption: format!("Live Weather Image (Update #{})", counter),
        }
    }

    fn data_section(&self, dataset: Result<&Dataset, &DataError>) -> DataSection {
        let dataset = match dataset {
            Ok(d) => d,
            Err(e) => return DataSection::Unavailable { message: e.to_string() },
        };
        let countries = match dataset.countries() {
            Ok(c) => c,
            Err(e) => return DataSection::Unavailable { message: e.to_string() },
        };
        let selected_country = self
            .selection
            .country
            .clone()
            .or_else(|| countries.first().cloned())
            .unwrap_or_default();

        let report = match self.country_report(dataset, &selected_country) {
            Ok(report) => ReportSection::Ready(Box::new(report)),
            Err(e) => ReportSection::Empty { message: e.to_string() },
        };

        DataSection::Ready(Box::new(DataPanel {
            loaded_notice: DATASET_LOADED.to_string(),
            countries,
            selected_country,
            unit: self.selection.unit,
            show_trend: self.selection.show_trend,
            report,
            overview: dataset.overview(),
        }))
    }

    fn country_report(&self, dataset: &Dataset, country: &str) -> Result<CountryReport, DataError> {
        let unit = self.selection.unit;
        let slice = dataset.filter_country(country)?;
        let summary = slice.summarize(unit, &self.thresholds)?;

        let trend = if self.selection.show_trend {
            match slice.trend(unit) {
                Ok(points) => TrendSection::Chart { points },
                Err(e) => TrendSection::Unavailable { message: e.to_string() },
            }
        } else {
            TrendSection::Hidden
        };

        let metrics = vec![
            Metric {
                label: "Avg Temp".to_string(),
                value: one_decimal(summary.avg_temp),
            },
            Metric {
                label: "Max Temp".to_string(),
                value: one_decimal(summary.max_temp),
            },
            Metric {
                label: "Avg Wind (km/h)".to_string(),
                value: one_decimal(summary.avg_wind),
            },
            Metric {
                label: "Common Weather".to_string(),
                value: summary.common_condition.clone(),
            },
        ];

        Ok(CountryReport {
            preview: slice.preview(PREVIEW_ROWS),
            metrics,
            insight: summary.insight(),
            distribution: slice.condition_distribution(),
            trend,
            summary,
        })
    }
}
