//! Chart header component with title, axis description and optional help.

use crate::components::LegendTooltip;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Axis or unit explanation (e.g., "USD per MWh")
    #[props(default = String::new())]
    pub unit_description: String,
    /// Show the fractional energy help badge next to the title
    #[props(default = false)]
    pub legend_help: bool,
}

/// Header for chart sections showing title and optional unit description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
                if props.legend_help {
                    LegendTooltip {}
                }
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.unit_description}"
                }
            }
        }
    }
}
