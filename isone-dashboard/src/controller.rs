use crate::filter::{FilterError, FilterState};
use crate::render::Renderer;
use crate::session::{Dashboard, DashboardFrame};
use isone_data::Metric;

/// Owns the current filter and redraws the dashboard whenever it changes.
///
/// Every accepted change recomputes all three chart kinds from the raw data
/// and issues their draw calls before returning.
pub struct FilterController<R: Renderer> {
    dashboard: Dashboard,
    filter: FilterState,
    frame: DashboardFrame,
    renderer: R,
}

impl<R: Renderer> FilterController<R> {
    /// Draws the initial full-year, peak-hour frame.
    pub fn new(dashboard: Dashboard, mut renderer: R) -> Self {
        let filter = dashboard.initial_filter();
        let frame = dashboard.compute(&filter);
        frame.render_into(&mut renderer);
        FilterController {
            dashboard,
            filter,
            frame,
            renderer,
        }
    }

    /// Apply a new day range. Invalid ranges are rejected and nothing is
    /// recomputed or drawn.
    pub fn set_range(&mut self, min_day: u32, max_day: u32) -> Result<(), FilterError> {
        let filter = self.filter.with_range(min_day, max_day).inspect_err(|e| {
            log::warn!("rejected day range: {e}");
        })?;
        self.apply(filter);
        Ok(())
    }

    pub fn set_metric(&mut self, metric: Metric) {
        let filter = self.filter.with_metric(metric);
        self.apply(filter);
    }

    /// Recompute and redraw without changing the filter.
    pub fn refresh(&mut self) {
        self.apply(self.filter);
    }

    fn apply(&mut self, filter: FilterState) {
        self.filter = filter;
        self.frame = self.dashboard.compute(&filter);
        self.frame.render_into(&mut self.renderer);
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn frame(&self) -> &DashboardFrame {
        &self.frame
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::render::{DrawRequest, RecordingRenderer};
    use isone_market::region::{FixtureManifest, Region};
    use isone_market::{FixtureTexts, MarketData};

    fn controller() -> FilterController<RecordingRenderer> {
        let config = DashboardConfig {
            fixtures: FixtureManifest {
                regions: vec![Region::new("Maine", "ME", 2023)],
                ..FixtureManifest::default()
            },
            ..DashboardConfig::default()
        };
        let zone = "Date,Avg_RT_LMP,Min_Demand,Peak_Demand\n2023-01-02,30,900,1300\n";
        let texts = FixtureTexts {
            energy: "Date,Maine\n2023-01-10,0.1\n2023-01-20,0.3\n2023-01-30,0.5\n".to_string(),
            geometry: r#"{"type":"FeatureCollection","features":[]}"#.to_string(),
            prices: vec![zone.to_string()],
            demand: vec![zone.to_string()],
        };
        let data = MarketData::from_texts(&config.fixtures, &texts).unwrap();
        FilterController::new(Dashboard::new(data, config), RecordingRenderer::new())
    }

    #[test]
    fn test_new_draws_initial_frame() {
        let controller = controller();
        assert_eq!(controller.filter(), FilterState::initial(2023));
        // map + one histogram + one day-of-week chart
        assert_eq!(controller.renderer().requests.len(), 3);
    }

    #[test]
    fn test_set_range_redraws() {
        let mut controller = controller();
        controller.renderer_mut().take();
        controller.set_range(1, 25).unwrap();
        assert_eq!(controller.renderer().requests.len(), 3);
        match &controller.renderer().requests[0] {
            DrawRequest::Map { averages, .. } => {
                assert!((averages["Maine"] - 0.2).abs() < 1e-12)
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_inverted_range_is_rejected_without_redraw() {
        let mut controller = controller();
        controller.renderer_mut().take();
        let before = controller.frame().clone();
        assert!(matches!(
            controller.set_range(30, 10),
            Err(FilterError::Inverted { .. })
        ));
        assert!(controller.renderer().requests.is_empty());
        assert_eq!(controller.frame(), &before);
        assert_eq!(controller.filter(), FilterState::initial(2023));
    }

    #[test]
    fn test_empty_window_draws_no_data() {
        let mut controller = controller();
        controller.set_range(1, 5).unwrap();
        assert!(controller.frame().regional_averages.is_empty());
    }

    #[test]
    fn test_set_metric_keeps_range() {
        let mut controller = controller();
        controller.set_range(1, 25).unwrap();
        controller.set_metric(Metric::Min);
        assert_eq!(controller.filter().min_day(), 1);
        assert_eq!(controller.filter().max_day(), 25);
        assert_eq!(
            controller.frame().weekday_charts[0].title,
            "Maine (Measured at Min Hour)"
        );
        assert_eq!(controller.frame().weekday_charts[0].bars[0].mean, 900.0);
    }

    #[test]
    fn test_refresh_redraws_same_frame() {
        let mut controller = controller();
        let before = controller.frame().clone();
        controller.renderer_mut().take();
        controller.refresh();
        assert_eq!(controller.frame(), &before);
        assert_eq!(controller.renderer().requests.len(), 3);
    }
}
