//! Radio pair choosing peak-hour or minimum-hour demand.

use crate::state::AppState;
use dioxus::prelude::*;
use isone_dashboard::Metric;

#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.filter)().metric();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.set_metric(metric),
        Err(e) => log::warn!("{e}"),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Demand: " }
            for (metric, text) in [(Metric::Peak, "Average at Peak Hour"), (Metric::Min, "Average at Min Hour")] {
                label {
                    input {
                        r#type: "radio",
                        name: "avg_peak",
                        value: "{metric}",
                        checked: current == metric,
                        onchange: on_change,
                    }
                    " {text}"
                }
            }
        }
    }
}
