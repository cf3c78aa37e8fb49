//! Dropdown selector for choosing a country.

use crate::state::AppState;
use cs_core::Event as DashboardEvent;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    pub countries: Vec<String>,
    pub selected: String,
}

/// Country dropdown selector.
/// Dispatches `CountrySelected` on change.
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(DashboardEvent::CountrySelected { country: evt.value() });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "country-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Country: "
            }
            select {
                id: "country-select",
                onchange: on_change,
                for country in props.countries.iter() {
                    option {
                        value: "{country}",
                        selected: *country == props.selected,
                        "{country}"
                    }
                }
            }
        }
    }
}
