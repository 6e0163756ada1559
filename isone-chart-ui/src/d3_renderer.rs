//! `Renderer` implementation that draws through the D3.js bridge.

use crate::js_bridge;
use isone_dashboard::Renderer;
use isone_data::{HistogramBin, LegendDomain, RegionalAverages, WeekdayMean};
use isone_market::geometry::RegionGeometryCollection;
use serde_json::json;

/// DOM id of the choropleth map container.
pub const MAP_CONTAINER_ID: &str = "choropleth-map";

pub const HISTOGRAM_X_LABEL: &str = "Daily Average Price per MWh in US Dollars";
pub const HISTOGRAM_Y_LABEL: &str = "Frequency in days";
pub const DEMAND_Y_LABEL: &str = "Avg MWh Supplied";

pub fn histogram_container_id(region_index: usize) -> String {
    format!("price-histogram-{region_index}")
}

pub fn day_of_week_container_id(region_index: usize) -> String {
    format!("day-of-week-chart-{region_index}")
}

/// Draws dashboard frames into the map and per-region chart containers.
pub struct D3Renderer {
    /// GeoJSON of the state boundaries, sent with every map draw
    geometry_json: serde_json::Value,
    demand_axis_ceiling: f64,
}

impl D3Renderer {
    pub fn new(geometry: &RegionGeometryCollection, demand_axis_ceiling: f64) -> Self {
        D3Renderer {
            geometry_json: geometry.to_geojson_value(),
            demand_axis_ceiling,
        }
    }
}

impl Renderer for D3Renderer {
    fn draw_map(&mut self, averages: &RegionalAverages, legend: LegendDomain) {
        let data = json!({
            "averages": averages,
            "positions": legend.color_positions(averages),
            "geometry": self.geometry_json,
        });
        let config = json!({
            "legendMin": legend.min,
            "legendMax": legend.max,
            "noDataColor": "#ccc",
            "legendTitle": "Average Fractional Energy",
        });
        js_bridge::render_choropleth(MAP_CONTAINER_ID, &data.to_string(), &config.to_string());
    }

    fn draw_histogram(&mut self, region_index: usize, title: &str, bins: &[HistogramBin]) {
        let data = serde_json::to_string(bins).unwrap_or_default();
        let config = json!({
            "title": title,
            "xAxisLabel": HISTOGRAM_X_LABEL,
            "yAxisLabel": HISTOGRAM_Y_LABEL,
            "color": "#69b3a2",
        });
        js_bridge::render_histogram(
            &histogram_container_id(region_index),
            &data,
            &config.to_string(),
        );
    }

    fn draw_day_of_week_chart(&mut self, region_index: usize, title: &str, bars: &[WeekdayMean]) {
        let data = serde_json::to_string(bars).unwrap_or_default();
        let config = json!({
            "title": title,
            "yAxisLabel": DEMAND_Y_LABEL,
            "yMax": self.demand_axis_ceiling,
            "labels": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            "color": "#1f77b4",
        });
        js_bridge::render_day_of_week_chart(
            &day_of_week_container_id(region_index),
            &data,
            &config.to_string(),
        );
    }
}
