use anyhow::{Context, Result};
use isone_data::{LegendDomain, DEMAND_AXIS_CEILING, HISTOGRAM_BIN_TARGET, MAP_LEGEND_DOMAIN};
use isone_market::region::{FixtureManifest, DEFAULT_MARKET_YEAR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dashboard settings. Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Calendar year the fixtures cover
    pub year: i32,
    pub fixtures: FixtureManifest,
    pub legend_domain: LegendDomain,
    /// Top of the day-of-week chart's y axis, MWh
    pub demand_axis_ceiling: f64,
    pub histogram_bins: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_MARKET_YEAR,
            fixtures: FixtureManifest::default(),
            legend_domain: MAP_LEGEND_DOMAIN,
            demand_axis_ceiling: DEMAND_AXIS_CEILING,
            histogram_bins: HISTOGRAM_BIN_TARGET,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid dashboard configuration")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded dashboard configuration from {}", path.display());
        Ok(config)
    }
}
