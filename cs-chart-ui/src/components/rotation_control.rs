//! Image rotation toggle, interval picker and the rotating image itself.

use crate::state::AppState;
use cs_core::view::ImageRequest;
use cs_core::{Event as DashboardEvent, RotationInterval};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RotationControlProps {
    pub enabled: bool,
    pub selected: RotationInterval,
}

/// Checkbox to enable rotation plus a dropdown of refresh intervals.
#[component]
pub fn RotationControl(props: RotationControlProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_toggle = move |evt: Event<FormData>| {
        state.dispatch(DashboardEvent::ToggleChanged { enabled: evt.checked() });
    };

    let on_interval = move |evt: Event<FormData>| {
        if let Some(interval) = RotationInterval::from_label(&evt.value()) {
            state.dispatch(DashboardEvent::IntervalSelected { interval });
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: props.enabled,
                    onchange: on_toggle,
                }
                " Enable Image Rotation"
            }
            label {
                "Select Image Refresh Interval: "
                select {
                    disabled: !props.enabled,
                    onchange: on_interval,
                    for interval in RotationInterval::ALL {
                        option {
                            value: "{interval.label()}",
                            selected: interval == props.selected,
                            "{interval.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct RotatingImageProps {
    pub image: ImageRequest,
}

#[component]
pub fn RotatingImage(props: RotatingImageProps) -> Element {
    rsx! {
        figure {
            style: "margin: 8px 0;",
            img {
                src: "{props.image.url}",
                alt: "{props.image.caption}",
                style: "width: 100%; max-height: 360px; object-fit: cover; border-radius: 4px;",
            }
            figcaption {
                style: "text-align: center; color: #666; font-size: 13px;",
                "{props.image.caption}"
            }
        }
    }
}
