//! Replays recorded dashboard events against a fresh session.

use anyhow::Context;
use cs_core::{Controller, DashboardConfig, Event};
use cs_data::{DataError, Dataset};
use std::fmt::Write;
use std::path::Path;

pub fn read_events(path: &Path) -> anyhow::Result<Vec<Event>> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_events(&json)
}

pub fn parse_events(json: &str) -> anyhow::Result<Vec<Event>> {
    serde_json::from_str(json).context("Failed to parse events")
}

/// Apply `events` in order, one outcome line each, then the final view as JSON.
pub fn replay(
    config: &DashboardConfig,
    events: Vec<Event>,
    dataset: Result<&Dataset, &DataError>,
) -> anyhow::Result<String> {
    let mut controller = Controller::new(config);
    let mut out = String::new();

    for (idx, event) in events.into_iter().enumerate() {
        let name = event.name();
        match controller.dispatch(event) {
            Some(notice) if notice.is_error() => writeln!(out, "{:>3} {:<18} error: {}", idx + 1, name, notice.message())?,
            Some(notice) => writeln!(out, "{:>3} {:<18} ok: {}", idx + 1, name, notice.message())?,
            None => writeln!(out, "{:>3} {:<18} applied", idx + 1, name)?,
        }
    }

    let view = controller.render(dataset);
    out.push_str(&serde_json::to_string_pretty(&view)?);
    Ok(out)
}
