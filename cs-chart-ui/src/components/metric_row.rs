//! Row of metric cards.

use cs_core::view::Metric;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricRowProps {
    pub metrics: Vec<Metric>,
}

#[component]
pub fn MetricRow(props: MetricRowProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 12px 0; flex-wrap: wrap;",
            for metric in props.metrics.iter() {
                div {
                    key: "{metric.label}",
                    style: "flex: 1; min-width: 140px; padding: 12px; border: 1px solid #ddd; border-radius: 4px;",
                    div { style: "font-size: 12px; color: #666;", "{metric.label}" }
                    div { style: "font-size: 22px; font-weight: bold;", "{metric.value}" }
                }
            }
        }
    }
}
