use crate::window::DayWindow;
use isone_market::records::DemandObservation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fixed top of the day-of-week demand axis, in MWh.
pub const DEMAND_AXIS_CEILING: f64 = 4500.0;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Which demand column the day-of-week charts show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Demand at the day's peak hour
    #[default]
    Peak,
    /// Demand at the day's minimum hour
    Min,
}

impl Metric {
    pub fn select(&self, observation: &DemandObservation) -> Option<f64> {
        match self {
            Metric::Peak => observation.peak_demand,
            Metric::Min => observation.min_demand,
        }
    }

    /// Chart title suffix, e.g. "Measured at Peak Hour".
    pub fn measured_at(&self) -> &'static str {
        match self {
            Metric::Peak => "Measured at Peak Hour",
            Metric::Min => "Measured at Min Hour",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Peak => "peak",
            Metric::Min => "min",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "peak" | "avg_peak" => Ok(Metric::Peak),
            "min" | "avg_min" => Ok(Metric::Min),
            other => Err(format!("unknown metric {other:?}, expected \"peak\" or \"min\"")),
        }
    }
}

/// Mean demand for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayMean {
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u32,
    pub label: &'static str,
    pub mean: f64,
    /// Observations that contributed to the mean
    pub count: usize,
}

/// Short English name of a day of week, "Mon" for 1 through "Sun" for 7.
pub fn weekday_label(day_of_week: u32) -> &'static str {
    match day_of_week {
        1..=7 => WEEKDAY_LABELS[(day_of_week - 1) as usize],
        _ => "",
    }
}

/// Average the selected demand metric per day of week over a window.
///
/// Days of week with no present values in the window are left out. The
/// result is ordered Monday first.
pub fn weekday_means(
    observations: &[DemandObservation],
    window: DayWindow,
    metric: Metric,
) -> Vec<WeekdayMean> {
    let mut groups: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for observation in observations
        .iter()
        .filter(|o| window.contains(o.day_of_year))
    {
        if let Some(value) = metric.select(observation) {
            let entry = groups.entry(observation.day_of_week).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(day_of_week, (sum, count))| WeekdayMean {
            day_of_week,
            label: weekday_label(day_of_week),
            mean: sum / count as f64,
            count,
        })
        .collect()
}
