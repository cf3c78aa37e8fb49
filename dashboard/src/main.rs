//! ClimateScope Dashboard
//!
//! Login/registration gate in front of a weather dashboard: a rotating
//! weather image, per-country metrics and alerts, a D3.js temperature trend
//! and a D3.js condition distribution.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/GlobalWeatherRepository.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse the CSV once into a shared `Dataset`.
//! 4. Every user action is dispatched as an event through `AppState`; the
//!    page is re-rendered from the resulting `View`.
//! 5. A background future sleeps for the active rotation interval and
//!    dispatches timer ticks.

use cs_chart_ui::components::{
    AuthTabs, ChartContainer, ChartHeader, CountrySelector, LoadingSpinner, MessageBox, MessageLevel, MetricRow,
    NoticeBanner, OverviewPanel, PreviewGrid, RotatingImage, RotationControl, TrendToggle, UnitSelector,
};
use cs_chart_ui::state::AppState;
use cs_chart_ui::{js_bridge, timer};
use cs_core::config::DEFAULT_DATA_FILE;
use cs_core::view::{
    AuthView, CountryReport, DataPanel, DataSection, DashboardView, ReportSection, TrendSection, DASHBOARD_SUBTITLE,
    DASHBOARD_TITLE,
};
use cs_core::{Event as DashboardEvent, RotationMode, TickSchedule, View};
use cs_data::{Alert, DataError, Dataset};
use dioxus::prelude::*;
use std::path::PathBuf;
use std::rc::Rc;

const WEATHER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/GlobalWeatherRepository.csv"));

const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

/// DOM ids for the D3 chart containers.
const TREND_CHART_ID: &str = "temperature-trend-chart";
const CONDITION_CHART_ID: &str = "condition-chart";

/// Wake-up period of the rotation timer loop.
const TIMER_SLICE_MS: u32 = 250;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("climatescope-root"))
        .launch(App);
}

fn load_embedded_dataset() -> Result<Rc<Dataset>, DataError> {
    if WEATHER_CSV.trim().is_empty() {
        return Err(DataError::FileNotFound(PathBuf::from(DEFAULT_DATA_FILE)));
    }
    Dataset::from_csv_str(WEATHER_CSV).map(Rc::new)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        let loaded = load_embedded_dataset();
        match &loaded {
            Ok(dataset) => log::info!(
                "[ClimateScope] dashboard: loaded {} rows x {} columns",
                dataset.row_count(),
                dataset.column_count()
            ),
            Err(e) => log::error!("[ClimateScope] dashboard: {}", e),
        }
        state.dataset.set(Some(loaded));
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Rotation timer ───
    // Wakes every slice and lets the schedule decide whether a tick is due,
    // so toggling or re-timing rotation takes effect on the next wake-up.
    use_future(move || async move {
        let mut schedule = TickSchedule::default();
        loop {
            timer::sleep_ms(TIMER_SLICE_MS).await;
            let due = schedule.advance(state.controller.peek().rotation(), TIMER_SLICE_MS);
            if due {
                state.tick();
            }
        }
    });

    // ─── Effect 2: Render charts when their inputs change ───
    // The memo only notifies when the chart data differs, so rotation ticks
    // do not redraw.
    let charts = use_memo(move || state.view().chart_data());
    use_effect(move || {
        let Some(charts) = charts() else {
            js_bridge::destroy_chart(TREND_CHART_ID);
            js_bridge::destroy_chart(CONDITION_CHART_ID);
            return;
        };

        match &charts.trend {
            Some(points) => {
                let data_json = serde_json::to_string(points).unwrap_or_default();
                let config_json = serde_json::json!({
                    "yAxisLabel": format!("Temperature (°{})", charts.unit.symbol()),
                    "color": "#E53935",
                })
                .to_string();
                js_bridge::render_line_chart(TREND_CHART_ID, &data_json, &config_json);
            }
            None => js_bridge::destroy_chart(TREND_CHART_ID),
        }

        let data_json = serde_json::to_string(&charts.distribution).unwrap_or_default();
        let config_json = serde_json::json!({
            "yAxisLabel": "Observations",
            "color": "#1E88E5",
        })
        .to_string();
        js_bridge::render_bar_chart(CONDITION_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let view = state.view();
    let notice = state.notice.read().clone();

    rsx! {
        document::Script { src: D3_SRC }
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(notice) = notice {
                NoticeBanner { notice }
            }

            {render_view(view)}
        }
    }
}

fn render_view(view: View) -> Element {
    match view {
        View::Auth(auth) => rsx! { AuthPage { view: auth } },
        View::Dashboard(dashboard) => rsx! { DashboardPage { view: *dashboard } },
    }
}

#[component]
fn AuthPage(view: AuthView) -> Element {
    rsx! {
        img {
            src: "{view.hero_image}",
            alt: "Weather",
            style: "width: 100%; max-height: 280px; object-fit: cover; border-radius: 4px;",
        }
        h1 { style: "text-align: center;", "{view.title}" }
        p { style: "text-align: center; color: #666;", "{view.caption}" }
        AuthTabs {}
    }
}

#[component]
fn DashboardPage(view: DashboardView) -> Element {
    let mut state = use_context::<AppState>();
    let loading = (state.loading)();
    let rotating = matches!(view.rotation, RotationMode::Rotating(_));

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center;",
            div {
                h1 { style: "margin: 8px 0 0 0;", "{DASHBOARD_TITLE}" }
                p { style: "margin: 0; color: #666;", "{DASHBOARD_SUBTITLE}" }
            }
            button {
                onclick: move |_| state.dispatch(DashboardEvent::LogoutClicked),
                "Logout"
            }
        }

        RotationControl { enabled: rotating, selected: view.selected_interval }
        RotatingImage { image: view.image.clone() }

        h2 { style: "font-size: 18px;", "{view.welcome}" }

        if loading {
            LoadingSpinner {}
        } else {
            {render_data(view.data.clone())}
        }
    }
}

fn render_data(data: DataSection) -> Element {
    match data {
        DataSection::Unavailable { message } => rsx! {
            MessageBox { level: MessageLevel::Error, message }
        },
        DataSection::Ready(panel) => rsx! { DataPanelView { panel: *panel } },
    }
}

#[component]
fn DataPanelView(panel: DataPanel) -> Element {
    let report = match panel.report {
        ReportSection::Empty { message } => rsx! {
            MessageBox { level: MessageLevel::Warning, message }
        },
        ReportSection::Ready(report) => rsx! {
            CountryReportView { report: *report, show_trend: panel.show_trend }
        },
    };

    rsx! {
        MessageBox { level: MessageLevel::Success, message: panel.loaded_notice.clone() }
        CountrySelector { countries: panel.countries.clone(), selected: panel.selected_country.clone() }
        UnitSelector { selected: panel.unit }
        {report}
        OverviewPanel { overview: panel.overview }
    }
}

#[component]
fn CountryReportView(report: CountryReport, show_trend: bool) -> Element {
    rsx! {
        h3 { "Data Preview" }
        PreviewGrid { table: report.preview.clone() }

        h3 { "Key Weather Metrics" }
        MetricRow { metrics: report.metrics.clone() }

        for alert in report.summary.alerts.iter().copied() {
            MessageBox {
                level: alert_level(alert),
                message: alert.message().to_string(),
            }
        }

        TrendToggle { show: show_trend }
        {render_trend(&report)}

        ChartHeader {
            title: "Weather Condition Distribution".to_string(),
            unit_description: "Observations".to_string(),
        }
        ChartContainer { id: CONDITION_CHART_ID.to_string(), min_height: 280 }

        h3 { "Auto Insight" }
        MessageBox { level: MessageLevel::Info, message: report.insight.clone() }
    }
}

fn alert_level(alert: Alert) -> MessageLevel {
    match alert {
        Alert::HeatAlert => MessageLevel::Error,
        Alert::HighWindAlert => MessageLevel::Warning,
    }
}

fn render_trend(report: &CountryReport) -> Element {
    match &report.trend {
        TrendSection::Hidden => rsx! {},
        TrendSection::Chart { .. } => rsx! {
            ChartHeader {
                title: "Temperature Trend".to_string(),
                unit_description: format!("Temperature (°{})", report.summary.unit.symbol()),
            }
            ChartContainer { id: TREND_CHART_ID.to_string() }
        },
        TrendSection::Unavailable { message } => rsx! {
            MessageBox { level: MessageLevel::Warning, message: message.clone() }
        },
    }
}
