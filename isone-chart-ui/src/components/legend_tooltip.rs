//! Help text explaining the map legend.

use dioxus::prelude::*;

const FRACTIONAL_ENERGY_HELP: &str = "Fractional energy is a state's daily energy load divided by \
the total load of all New England states that day, averaged over the selected range.";

/// A "?" badge that reveals the fractional energy explanation on hover.
#[component]
pub fn LegendTooltip() -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        span {
            style: "position: relative; display: inline-block; margin-left: 6px; cursor: help;",
            onmouseenter: move |_| visible.set(true),
            onmouseleave: move |_| visible.set(false),
            span {
                style: "display: inline-block; width: 16px; height: 16px; border-radius: 50%; background: #1565C0; color: white; font-size: 11px; text-align: center; line-height: 16px;",
                "?"
            }
            if visible() {
                div {
                    style: "position: absolute; top: 20px; left: 0; width: 260px; padding: 8px; background: white; border: 1px solid #ccc; border-radius: 4px; font-size: 12px; color: #333; z-index: 10; box-shadow: 0 2px 6px rgba(0,0,0,0.15);",
                    "{FRACTIONAL_ENERGY_HELP}"
                }
            }
        }
    }
}
