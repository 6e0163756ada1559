use isone_data::{HistogramBin, LegendDomain, RegionalAverages, WeekdayMean};
use serde::Serialize;

/// Drawing surface for the three chart kinds.
///
/// `region_index` is the region's position in the catalogue and selects the
/// chart container to draw into.
pub trait Renderer {
    fn draw_map(&mut self, averages: &RegionalAverages, legend: LegendDomain);
    fn draw_histogram(&mut self, region_index: usize, title: &str, bins: &[HistogramBin]);
    fn draw_day_of_week_chart(&mut self, region_index: usize, title: &str, bars: &[WeekdayMean]);
}

/// One captured draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum DrawRequest {
    Map {
        averages: RegionalAverages,
        legend: LegendDomain,
    },
    Histogram {
        region_index: usize,
        title: String,
        bins: Vec<HistogramBin>,
    },
    DayOfWeek {
        region_index: usize,
        title: String,
        bars: Vec<WeekdayMean>,
    },
}

/// Renderer that records draw calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub requests: Vec<DrawRequest>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<DrawRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_map(&mut self, averages: &RegionalAverages, legend: LegendDomain) {
        self.requests.push(DrawRequest::Map {
            averages: averages.clone(),
            legend,
        });
    }

    fn draw_histogram(&mut self, region_index: usize, title: &str, bins: &[HistogramBin]) {
        self.requests.push(DrawRequest::Histogram {
            region_index,
            title: title.to_string(),
            bins: bins.to_vec(),
        });
    }

    fn draw_day_of_week_chart(&mut self, region_index: usize, title: &str, bars: &[WeekdayMean]) {
        self.requests.push(DrawRequest::DayOfWeek {
            region_index,
            title: title.to_string(),
            bars: bars.to_vec(),
        });
    }
}
