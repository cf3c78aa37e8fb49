//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and route every user action through
//! [`AppState::dispatch`].

use cs_core::{Controller, DashboardConfig, Event, Notice, View};
use cs_data::{DataError, Dataset};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session, rotation and selections for this connection
    pub controller: Signal<Controller>,
    /// Parsed dataset, or the load failure (None until loaded)
    pub dataset: Signal<Option<Result<Rc<Dataset>, DataError>>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Message produced by the last event, if any
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(&DashboardConfig::default())
    }

    pub fn with_config(config: &DashboardConfig) -> Self {
        Self {
            controller: Signal::new(Controller::new(config)),
            dataset: Signal::new(None),
            loading: Signal::new(true),
            notice: Signal::new(None),
        }
    }

    /// Apply an event and keep whatever message it produced.
    pub fn dispatch(&mut self, event: Event) {
        let notice = self.controller.write().dispatch(event);
        if let Some(Notice::Error(message)) = &notice {
            log::warn!("[ClimateScope] ui: {}", message);
        }
        self.notice.set(notice);
    }

    /// Apply a timer tick without clearing the current message.
    pub fn tick(&mut self) {
        self.controller.write().dispatch(Event::TimerTick);
    }

    /// Render the current frame.
    pub fn view(&self) -> View {
        let controller = self.controller.read();
        match &*self.dataset.read() {
            Some(Ok(dataset)) => controller.render(Ok(dataset.as_ref())),
            Some(Err(e)) => controller.render(Err(e)),
            None => controller.render(Err(&DataError::ParseError("dataset still loading".to_string()))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
