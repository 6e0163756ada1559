//! Interactive state of the ISO-NE energy dashboard.
//!
//! A [`Dashboard`] session owns the loaded market data and configuration.
//! A [`FilterController`] holds the current [`FilterState`] and, on every
//! accepted change, recomputes a [`DashboardFrame`] and pushes it through a
//! [`Renderer`].

pub mod config;
pub mod controller;
pub mod filter;
pub mod render;
pub mod session;

pub use config::DashboardConfig;
pub use controller::FilterController;
pub use filter::{FilterError, FilterState, MAX_DAY_OF_YEAR};
pub use isone_data::Metric;
pub use render::{DrawRequest, RecordingRenderer, Renderer};
pub use session::{Dashboard, DashboardFrame, RegionHistogram, RegionWeekdayChart};
