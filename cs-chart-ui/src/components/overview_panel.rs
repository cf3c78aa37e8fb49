//! Whole-dataset statistics.

use cs_data::DatasetOverview;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OverviewPanelProps {
    pub overview: DatasetOverview,
}

#[component]
pub fn OverviewPanel(props: OverviewPanelProps) -> Element {
    let overview = props.overview;
    rsx! {
        div {
            style: "margin: 16px 0;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Dataset Overview" }
            ul {
                style: "margin: 0; padding-left: 20px;",
                li { "Rows: {overview.rows}" }
                li { "Columns: {overview.columns}" }
                li { "Missing Values: {overview.missing}" }
            }
        }
    }
}
