use isone_utils::dates::days_in_year;
use serde::{Deserialize, Serialize};

/// Inclusive day-of-year interval `[min_day, max_day]`.
///
/// No ordering is enforced here; an inverted window simply matches nothing.
/// Validation of user input happens where the window is built from a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub min_day: u32,
    pub max_day: u32,
}

impl DayWindow {
    pub fn new(min_day: u32, max_day: u32) -> Self {
        DayWindow { min_day, max_day }
    }

    /// Every day of `year`.
    pub fn full_year(year: i32) -> Self {
        DayWindow::new(1, days_in_year(year))
    }

    pub fn contains(&self, day_of_year: u32) -> bool {
        self.min_day <= day_of_year && day_of_year <= self.max_day
    }
}
