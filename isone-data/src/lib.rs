//! Aggregation of raw market records into chart series.
//!
//! Every function here is pure: it takes the complete raw collections plus
//! an inclusive day-of-year window and returns freshly derived values.
//! Nothing is cached between calls.

pub mod histogram;
pub mod regional;
pub mod weekday;
pub mod window;

pub use histogram::{price_histogram, price_histograms, HistogramBin, HISTOGRAM_BIN_TARGET};
pub use regional::{regional_averages, LegendDomain, RegionalAverages, MAP_LEGEND_DOMAIN};
pub use weekday::{weekday_label, weekday_means, Metric, WeekdayMean, DEMAND_AXIS_CEILING};
pub use window::DayWindow;
