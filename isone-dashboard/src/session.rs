use crate::config::DashboardConfig;
use crate::filter::FilterState;
use crate::render::Renderer;
use isone_data::{
    price_histograms, regional_averages, weekday_means, HistogramBin, LegendDomain,
    RegionalAverages, WeekdayMean,
};
use isone_market::MarketData;
use isone_utils::dates::format_range_label;
use serde::Serialize;

/// Price histogram of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionHistogram {
    pub region: String,
    pub title: String,
    pub bins: Vec<HistogramBin>,
}

/// Day-of-week demand chart of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionWeekdayChart {
    pub region: String,
    pub title: String,
    pub axis_ceiling: f64,
    pub bars: Vec<WeekdayMean>,
}

/// Everything drawn for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub filter: FilterState,
    pub range_label: String,
    pub legend: LegendDomain,
    pub regional_averages: RegionalAverages,
    pub histograms: Vec<RegionHistogram>,
    pub weekday_charts: Vec<RegionWeekdayChart>,
}

impl DashboardFrame {
    /// Issue the frame's draw calls: the map, then each histogram, then each
    /// day-of-week chart.
    pub fn render_into<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_map(&self.regional_averages, self.legend);
        for (i, histogram) in self.histograms.iter().enumerate() {
            renderer.draw_histogram(i, &histogram.title, &histogram.bins);
        }
        for (i, chart) in self.weekday_charts.iter().enumerate() {
            renderer.draw_day_of_week_chart(i, &chart.title, &chart.bars);
        }
    }
}

/// A loaded dashboard: market data plus its configuration.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: MarketData,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(data: MarketData, config: DashboardConfig) -> Self {
        log::info!(
            "dashboard ready: {} regions, {} energy rows, year {}",
            data.regions.len(),
            data.energy.len(),
            config.year
        );
        Dashboard { data, config }
    }

    /// Fetch the configured fixtures from `source` and build a session.
    #[cfg(feature = "api")]
    pub async fn load(
        source: &isone_market::loader::FixtureSource,
        config: DashboardConfig,
    ) -> isone_market::Result<Self> {
        let data = isone_market::loader::load_market_data(source, &config.fixtures)
            .await
            .inspect_err(|e| log::error!("fixture load failed: {e}"))?;
        Ok(Dashboard::new(data, config))
    }

    pub fn data(&self) -> &MarketData {
        &self.data
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn year(&self) -> i32 {
        self.config.year
    }

    pub fn initial_filter(&self) -> FilterState {
        FilterState::initial(self.config.year)
    }

    /// Recompute every chart series from the raw data for `filter`.
    pub fn compute(&self, filter: &FilterState) -> DashboardFrame {
        let window = filter.window();
        let metric = filter.metric();
        log::debug!(
            "recomputing days {}..={} ({})",
            window.min_day,
            window.max_day,
            metric
        );

        let histograms = self
            .data
            .regions
            .iter()
            .zip(price_histograms(&self.data.prices, window, self.config.histogram_bins))
            .map(|(region, bins)| RegionHistogram {
                region: region.name.clone(),
                title: histogram_title(&region.name),
                bins,
            })
            .collect();
        let weekday_charts = self
            .data
            .regions
            .iter()
            .zip(&self.data.demand)
            .map(|(region, demand)| RegionWeekdayChart {
                region: region.name.clone(),
                title: format!("{} ({})", region.name, metric.measured_at()),
                axis_ceiling: self.config.demand_axis_ceiling,
                bars: weekday_means(demand, window, metric),
            })
            .collect();

        DashboardFrame {
            filter: *filter,
            range_label: format_range_label(window.min_day, window.max_day, self.config.year),
            legend: self.config.legend_domain,
            regional_averages: regional_averages(&self.data.energy, window),
            histograms,
            weekday_charts,
        }
    }
}

fn histogram_title(region: &str) -> String {
    format!("Region: {region} (USD vs. # of Days)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawRequest, RecordingRenderer};
    use isone_data::Metric;
    use isone_market::region::{FixtureManifest, Region};
    use isone_market::FixtureTexts;

    const ZONE: &str = "Date,Avg_RT_LMP,Min_Demand,Peak_Demand
2023-01-02,30,900,1300
2023-01-03,50,950,1400
2023-02-01,90,1000,2000
";

    fn dashboard() -> Dashboard {
        let config = DashboardConfig {
            fixtures: FixtureManifest {
                regions: vec![
                    Region::new("Maine", "ME", 2023),
                    Region::new("Vermont", "VT", 2023),
                ],
                ..FixtureManifest::default()
            },
            ..DashboardConfig::default()
        };
        let texts = FixtureTexts {
            energy: "Date,Maine,Vermont\n2023-01-02,0.2,0.1\n2023-02-01,0.4,\n".to_string(),
            geometry: r#"{"type":"FeatureCollection","features":[]}"#.to_string(),
            prices: vec![ZONE.to_string(), ZONE.to_string()],
            demand: vec![ZONE.to_string(), ZONE.to_string()],
        };
        let data = MarketData::from_texts(&config.fixtures, &texts).unwrap();
        Dashboard::new(data, config)
    }

    #[test]
    fn test_compute_titles_and_series() {
        let dashboard = dashboard();
        let frame = dashboard.compute(&FilterState::new(1, 31, Metric::Min).unwrap());
        assert_eq!(frame.range_label, "Range: Jan 1st, 2023 - Jan 31st, 2023");
        assert_eq!(frame.regional_averages["Maine"], 0.2);
        assert_eq!(frame.histograms[1].title, "Region: Vermont (USD vs. # of Days)");
        assert_eq!(frame.histograms[0].bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert_eq!(frame.weekday_charts[0].title, "Maine (Measured at Min Hour)");
        assert_eq!(frame.weekday_charts[0].axis_ceiling, 4500.0);
        // Monday Jan 2 and Tuesday Jan 3
        let bars = &frame.weekday_charts[0].bars;
        assert_eq!(bars.len(), 2);
        assert_eq!((bars[0].day_of_week, bars[0].mean), (1, 900.0));
    }

    #[test]
    fn test_full_year_frame() {
        let dashboard = dashboard();
        let frame = dashboard.compute(&dashboard.initial_filter());
        assert!((frame.regional_averages["Maine"] - 0.3).abs() < 1e-12);
        assert_eq!(frame.regional_averages["Vermont"], 0.1);
        assert_eq!(frame.weekday_charts[1].title, "Vermont (Measured at Peak Hour)");
    }

    #[test]
    fn test_render_order() {
        let dashboard = dashboard();
        let frame = dashboard.compute(&dashboard.initial_filter());
        let mut renderer = RecordingRenderer::new();
        frame.render_into(&mut renderer);

        let kinds: Vec<&str> = renderer
            .requests
            .iter()
            .map(|r| match r {
                DrawRequest::Map { .. } => "map",
                DrawRequest::Histogram { .. } => "histogram",
                DrawRequest::DayOfWeek { .. } => "dow",
            })
            .collect();
        assert_eq!(kinds, vec!["map", "histogram", "histogram", "dow", "dow"]);
    }
}
