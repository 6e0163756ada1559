//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::d3_renderer::D3Renderer;
use dioxus::prelude::*;
use isone_dashboard::{FilterController, FilterState, Metric};
use isone_market::region::DEFAULT_MARKET_YEAR;

/// Shared application state for the energy dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the fixtures are still being parsed
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Mirror of the controller's filter, read by the input components
    pub filter: Signal<FilterState>,
    /// Year the day-of-year slider refers to
    pub year: Signal<i32>,
    /// Filter controller (None until the fixtures are loaded)
    pub controller: Signal<Option<FilterController<D3Renderer>>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(FilterState::initial(DEFAULT_MARKET_YEAR)),
            year: Signal::new(DEFAULT_MARKET_YEAR),
            controller: Signal::new(None),
        }
    }

    /// Install a ready controller; it has already drawn its first frame.
    pub fn install(&mut self, controller: FilterController<D3Renderer>) {
        self.filter.set(controller.filter());
        self.year.set(controller.dashboard().year());
        self.controller.set(Some(controller));
        self.loading.set(false);
    }

    /// Forward a slider change to the controller.
    ///
    /// A rejected range is logged and leaves the controller's filter in place.
    pub fn set_range(&mut self, min_day: u32, max_day: u32) {
        let mut controller = self.controller.write();
        let Some(controller) = controller.as_mut() else {
            return;
        };
        match controller.set_range(min_day, max_day) {
            Ok(()) => self.filter.set(controller.filter()),
            Err(e) => log::warn!("{e}"),
        }
    }

    /// Forward a metric change to the controller.
    pub fn set_metric(&mut self, metric: Metric) {
        let mut controller = self.controller.write();
        if let Some(controller) = controller.as_mut() {
            controller.set_metric(metric);
            self.filter.set(controller.filter());
        }
    }
}
