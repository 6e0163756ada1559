//! ISO New England 2023 Energy Market Dashboard
//!
//! A choropleth of average fractional energy per state, a real-time price
//! histogram per load zone, and a day-of-week demand chart per load zone,
//! all driven by one day-of-year range slider and a peak/min demand radio.
//!
//! Data flow:
//! 1. `build.rs` copies the fixtures into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: parse every fixture. Any failure shows an error and no charts.
//! 4. The filter controller draws the full year, then redraws on every
//!    slider or radio change.

use dioxus::prelude::*;
use isone_chart_ui::components::{
    ChartContainer, ChartHeader, DayRangeSlider, ErrorDisplay, LoadingSpinner, MetricSelector,
};
use isone_chart_ui::d3_renderer::{
    day_of_week_container_id, histogram_container_id, D3Renderer, MAP_CONTAINER_ID,
};
use isone_chart_ui::js_bridge;
use isone_chart_ui::state::AppState;
use isone_dashboard::{Dashboard, DashboardConfig, FilterController};
use isone_market::{FixtureTexts, MarketData, MarketError};

const ENERGY_CSV: &str = include_str!(concat!(
    env!("OUT_DIR"),
    "/fractional-energy-by-state.csv"
));
const GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/new-england.json"));

/// Load zone exports keyed by file name.
const ZONE_CSVS: [(&str, &str); 8] = [
    ("2023_ME-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_ME-filt.csv"))),
    ("2023_NH-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_NH-filt.csv"))),
    ("2023_VT-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_VT-filt.csv"))),
    ("2023_CT-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_CT-filt.csv"))),
    ("2023_RI-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_RI-filt.csv"))),
    ("2023_SEMA-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_SEMA-filt.csv"))),
    ("2023_NEMA-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_NEMA-filt.csv"))),
    ("2023_WCMA-filt.csv", include_str!(concat!(env!("OUT_DIR"), "/2023_WCMA-filt.csv"))),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("energy-dashboard-root"))
        .launch(App);
}

fn embedded_zone(file: &str) -> Result<String, MarketError> {
    ZONE_CSVS
        .iter()
        .find(|(name, _)| *name == file)
        .map(|(_, text)| text.to_string())
        .ok_or_else(|| MarketError::FixtureRead {
            path: file.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "fixture not embedded"),
        })
}

/// Parse the embedded fixtures into a dashboard session.
fn load_dashboard(config: DashboardConfig) -> Result<Dashboard, MarketError> {
    let zones = config
        .fixtures
        .regions
        .iter()
        .map(|region| embedded_zone(&region.file))
        .collect::<Result<Vec<_>, _>>()?;
    let texts = FixtureTexts {
        energy: ENERGY_CSV.to_string(),
        geometry: GEOJSON.to_string(),
        prices: zones.clone(),
        demand: zones,
    };
    let data = MarketData::from_texts(&config.fixtures, &texts)?;
    Ok(Dashboard::new(data, config))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse fixtures once on mount and draw the initial frame ───
    use_effect(move || match load_dashboard(DashboardConfig::default()) {
        Ok(dashboard) => {
            js_bridge::init_charts();
            let renderer = D3Renderer::new(
                &dashboard.data().geometry,
                dashboard.config().demand_axis_ceiling,
            );
            state.install(FilterController::new(dashboard, renderer));
        }
        Err(e) => {
            log::error!("Failed to load market data: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load market data: {}", e)));
            state.loading.set(false);
        }
    });

    let regions: Vec<String> = state
        .controller
        .read()
        .as_ref()
        .map(|c| c.dashboard().data().region_names().map(String::from).collect())
        .unwrap_or_default();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { "ISO New England Energy Markets, 2023" }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Average Fractional Energy by State".to_string(),
                    unit_description: "Share of New England's daily energy load".to_string(),
                    legend_help: true,
                }
                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    min_height: 460,
                }

                div {
                    style: "margin: 12px 0; padding: 8px 0; border-top: 1px solid #e0e0e0; border-bottom: 1px solid #e0e0e0;",
                    DayRangeSlider {}
                    MetricSelector {}
                }

                ChartHeader {
                    title: "Real-Time Prices by Load Zone".to_string(),
                    unit_description: "Distribution of daily average LMP over the selected days".to_string(),
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between;",
                    for (i, region) in regions.iter().enumerate() {
                        ChartContainer {
                            key: "hist-{region}",
                            id: histogram_container_id(i),
                            width: "49%".to_string(),
                        }
                    }
                }

                ChartHeader {
                    title: "Demand by Day of Week".to_string(),
                    unit_description: "Mean MWh supplied per weekday over the selected days".to_string(),
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between;",
                    for (i, region) in regions.iter().enumerate() {
                        ChartContainer {
                            key: "dow-{region}",
                            id: day_of_week_container_id(i),
                            width: "49%".to_string(),
                        }
                    }
                }
            }
        }
    }
}
