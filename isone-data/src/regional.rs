use crate::window::DayWindow;
use isone_market::records::RegionalEnergyRecord;
use isone_utils::dates::day_of_year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean fractional energy per state over a window.
///
/// A state with no present values in the window has no entry, which the map
/// draws as "no data".
pub type RegionalAverages = BTreeMap<String, f64>;

/// Value range the map's color scale spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendDomain {
    pub min: f64,
    pub max: f64,
}

/// Fixed legend for the choropleth, independent of the data shown.
pub const MAP_LEGEND_DOMAIN: LegendDomain = LegendDomain { min: 0.0, max: 0.5 };

impl Default for LegendDomain {
    fn default() -> Self {
        MAP_LEGEND_DOMAIN
    }
}

impl LegendDomain {
    /// Position of `value` on the color scale, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Color-scale position of every state in `averages`.
    pub fn color_positions(&self, averages: &RegionalAverages) -> BTreeMap<String, f64> {
        averages
            .iter()
            .map(|(state, &average)| (state.clone(), self.normalize(average)))
            .collect()
    }
}

/// Average each state's fractional energy over the days in `window`.
///
/// Absent values are skipped rather than counted as zero.
pub fn regional_averages(records: &[RegionalEnergyRecord], window: DayWindow) -> RegionalAverages {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| window.contains(day_of_year(&r.date)))
    {
        for (region, value) in &record.values {
            if let Some(v) = value {
                let entry = sums.entry(region.as_str()).or_insert((0.0, 0));
                entry.0 += v;
                entry.1 += 1;
            }
        }
    }
    sums.into_iter()
        .map(|(region, (sum, count))| (region.to_string(), sum / count as f64))
        .collect()
}
