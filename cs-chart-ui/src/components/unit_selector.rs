//! Temperature unit radio group and trend toggle.

use crate::state::AppState;
use cs_core::Event as DashboardEvent;
use cs_data::TemperatureUnit;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct UnitSelectorProps {
    pub selected: TemperatureUnit,
}

#[component]
pub fn UnitSelector(props: UnitSelectorProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Select Temperature Unit: " }
            for unit in TemperatureUnit::ALL {
                label {
                    input {
                        r#type: "radio",
                        name: "temperature-unit",
                        value: "{unit.label()}",
                        checked: unit == props.selected,
                        onchange: move |_| state.dispatch(DashboardEvent::UnitChanged { unit }),
                    }
                    " {unit.label()}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TrendToggleProps {
    pub show: bool,
}

/// Checkbox that shows or hides the temperature trend chart.
#[component]
pub fn TrendToggle(props: TrendToggleProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        label {
            style: "display: block; margin: 8px 0;",
            input {
                r#type: "checkbox",
                checked: props.show,
                onchange: move |evt: Event<FormData>| {
                    state.dispatch(DashboardEvent::TrendToggled { show: evt.checked() })
                },
            }
            " Show Temperature Trend"
        }
    }
}
