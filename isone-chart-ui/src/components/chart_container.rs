//! Container div that a D3 chart draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the bridge looks up before drawing
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
    /// CSS width, e.g. "100%" for the map or "48%" in the region grid
    #[props(default = "100%".to_string())]
    pub width: String,
}

/// Empty target for a D3 chart; the SVG replaces its contents on each draw.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: {}; box-sizing: border-box; padding: 4px;",
        props.min_height, props.width
    );

    rsx! {
        div {
            id: "{props.id}",
            class: "chart-container",
            style: "{style}",
        }
    }
}
