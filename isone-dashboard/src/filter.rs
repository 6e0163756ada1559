use isone_data::{DayWindow, Metric};
use isone_utils::dates::days_in_year;
use serde::Serialize;
use thiserror::Error;

/// Largest day-of-year a range may reach (leap years).
pub const MAX_DAY_OF_YEAR: u32 = 366;

/// Rejected filter input. Nothing is recomputed when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("day range {min_day}..={max_day} is outside 1..=366")]
    OutOfBounds { min_day: u32, max_day: u32 },

    #[error("day range is inverted: min {min_day} is after max {max_day}")]
    Inverted { min_day: u32, max_day: u32 },
}

/// Current day range and demand metric.
///
/// Always satisfies `1 <= min_day <= max_day <= 366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterState {
    min_day: u32,
    max_day: u32,
    metric: Metric,
}

impl FilterState {
    pub fn new(min_day: u32, max_day: u32, metric: Metric) -> Result<Self, FilterError> {
        if min_day < 1 || max_day > MAX_DAY_OF_YEAR {
            return Err(FilterError::OutOfBounds { min_day, max_day });
        }
        if min_day > max_day {
            return Err(FilterError::Inverted { min_day, max_day });
        }
        Ok(FilterState {
            min_day,
            max_day,
            metric,
        })
    }

    /// The whole of `year` at peak hour.
    pub fn initial(year: i32) -> Self {
        FilterState {
            min_day: 1,
            max_day: days_in_year(year),
            metric: Metric::Peak,
        }
    }

    pub fn with_range(self, min_day: u32, max_day: u32) -> Result<Self, FilterError> {
        FilterState::new(min_day, max_day, self.metric)
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        FilterState { metric, ..self }
    }

    pub fn min_day(&self) -> u32 {
        self.min_day
    }

    pub fn max_day(&self) -> u32 {
        self.max_day
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn window(&self) -> DayWindow {
        DayWindow::new(self.min_day, self.max_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let filter = FilterState::new(10, 20, Metric::Min).unwrap();
        assert_eq!(filter.window(), DayWindow::new(10, 20));
        assert_eq!(filter.metric(), Metric::Min);
    }

    #[test]
    fn test_single_day_range() {
        assert!(FilterState::new(366, 366, Metric::Peak).is_ok());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            FilterState::new(200, 100, Metric::Peak),
            Err(FilterError::Inverted {
                min_day: 200,
                max_day: 100
            })
        );
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        assert!(matches!(
            FilterState::new(0, 10, Metric::Peak),
            Err(FilterError::OutOfBounds { .. })
        ));
        assert!(matches!(
            FilterState::new(1, 367, Metric::Peak),
            Err(FilterError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_initial_covers_year() {
        let filter = FilterState::initial(2023);
        assert_eq!((filter.min_day(), filter.max_day()), (1, 365));
        assert_eq!(filter.metric(), Metric::Peak);
        assert_eq!(FilterState::initial(2024).max_day(), 366);
    }

    #[test]
    fn test_with_metric_keeps_range() {
        let filter = FilterState::new(5, 9, Metric::Peak)
            .unwrap()
            .with_metric(Metric::Min);
        assert_eq!((filter.min_day(), filter.max_day()), (5, 9));
        assert_eq!(filter.metric(), Metric::Min);
    }
}
