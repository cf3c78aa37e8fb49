//! Typed UI events and the messages they produce.

use crate::rotation::RotationInterval;
use cs_data::TemperatureUnit;
use serde::{Deserialize, Serialize};

/// Everything that can change dashboard state.
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type": "login_submitted", "username": "subhadip", "password": "subhadip123"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    LoginSubmitted {
        username: String,
        password: String,
    },
    RegisterSubmitted {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    TimerTick,
    ToggleChanged {
        enabled: bool,
    },
    IntervalSelected {
        interval: RotationInterval,
    },
    CountrySelected {
        country: String,
    },
    UnitChanged {
        unit: TemperatureUnit,
    },
    TrendToggled {
        show: bool,
    },
    LogoutClicked,
}

impl Event {
    /// Events only meaningful on the login/register page.
    pub fn is_auth_event(&self) -> bool {
        matches!(self, Event::LoginSubmitted { .. } | Event::RegisterSubmitted { .. })
    }

    /// Variant name, safe to log (carries no field values).
    pub fn name(&self) -> &'static str {
        match self {
            Event::LoginSubmitted { .. } => "LoginSubmitted",
            Event::RegisterSubmitted { .. } => "RegisterSubmitted",
            Event::TimerTick => "TimerTick",
            Event::ToggleChanged { .. } => "ToggleChanged",
            Event::IntervalSelected { .. } => "IntervalSelected",
            Event::CountrySelected { .. } => "CountrySelected",
            Event::UnitChanged { .. } => "UnitChanged",
            Event::TrendToggled { .. } => "TrendToggled",
            Event::LogoutClicked => "LogoutClicked",
        }
    }
}

/// One-shot message surfaced after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_deserialize_from_tagged_json() {
        let events: Vec<Event> = serde_json::from_str(
            r#"[
                {"type": "login_submitted", "username": "subhadip", "password": "subhadip123"},
                {"type": "toggle_changed", "enabled": true},
                {"type": "interval_selected", "interval": "Minute1"},
                {"type": "unit_changed", "unit": "Fahrenheit"},
                {"type": "timer_tick"},
                {"type": "logout_clicked"}
            ]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 6);
        assert!(events[0].is_auth_event());
        assert_eq!(
            events[2],
            Event::IntervalSelected {
                interval: RotationInterval::Minute1
            }
        );
        assert_eq!(events[4], Event::TimerTick);
    }

    #[test]
    fn notice_serializes_with_kind() {
        let json = serde_json::to_string(&Notice::Error("Invalid username or password".into())).unwrap();
        assert_eq!(json, r#"{"kind":"error","message":"Invalid username or password"}"#);
    }
}
