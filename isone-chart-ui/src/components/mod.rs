//! Reusable Dioxus RSX components for the energy dashboard.

mod chart_container;
mod chart_header;
mod day_range_slider;
mod error_display;
mod legend_tooltip;
mod loading_spinner;
mod metric_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use day_range_slider::DayRangeSlider;
pub use error_display::ErrorDisplay;
pub use legend_tooltip::LegendTooltip;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
