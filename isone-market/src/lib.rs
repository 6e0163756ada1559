//! Record types, fixture parsing and loading for the ISO New England
//! market dashboard.
//!
//! Parsing is pure and works on fixture text, so the web app can feed it
//! embedded strings. Native callers enable the `api` feature to read the
//! fixtures from a directory or an HTTP base URL.

pub mod error;
pub mod geometry;
#[cfg(feature = "api")]
pub mod loader;
pub mod market_data;
pub mod records;
pub mod region;

pub use error::{MarketError, Result};
pub use market_data::{FixtureTexts, MarketData};
