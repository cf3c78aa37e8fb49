//! Tabular preview of the first rows of the selected country.

use cs_data::PreviewTable;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PreviewGridProps {
    pub table: PreviewTable,
}

#[component]
pub fn PreviewGrid(props: PreviewGridProps) -> Element {
    rsx! {
        div {
            style: "overflow-x: auto; margin: 8px 0;",
            table {
                style: "border-collapse: collapse; font-size: 12px; width: 100%;",
                thead {
                    tr {
                        for header in props.table.headers.iter() {
                            th {
                                style: "border-bottom: 2px solid #ccc; padding: 4px 8px; text-align: left;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for row in props.table.rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td {
                                    style: "border-bottom: 1px solid #eee; padding: 4px 8px;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
