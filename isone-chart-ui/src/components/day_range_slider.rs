//! Two-handle day-of-year range slider with its date caption.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use isone_utils::dates::{days_in_year, format_range_label};

const MIN_HANDLE_ID: &str = "range-min-day";
const MAX_HANDLE_ID: &str = "range-max-day";

/// Which of the two slider inputs moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handle {
    Min,
    Max,
}

/// Apply a drag of `handle` to `day`, stopping it at the other handle.
fn resolve_drag(handle: Handle, day: u32, (min_day, max_day): (u32, u32)) -> (u32, u32) {
    match handle {
        Handle::Min => (day.min(max_day), max_day),
        Handle::Max => (min_day, day.max(min_day)),
    }
}

/// Range slider over the days of the current year.
///
/// Built from two `<input type=range>` handles. A handle dragged past the
/// other stops at it, and the input element is moved back to match.
#[component]
pub fn DayRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let filter = (state.filter)();
    let year = (state.year)();
    let last_day = days_in_year(year);
    let (min_day, max_day) = (filter.min_day(), filter.max_day());
    let label = format_range_label(min_day, max_day, year);

    let mut on_drag = move |handle: Handle, value: String| {
        let Ok(day) = value.parse::<u32>() else {
            return;
        };
        let (min, max) = resolve_drag(handle, day, (min_day, max_day));
        state.set_range(min, max);
        let (id, kept) = match handle {
            Handle::Min => (MIN_HANDLE_ID, min),
            Handle::Max => (MAX_HANDLE_ID, max),
        };
        if kept != day {
            js_bridge::set_input_value(id, kept);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                id: "range-label",
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "{label}"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    "From day "
                    input {
                        r#type: "range",
                        min: "1",
                        max: "{last_day}",
                        id: MIN_HANDLE_ID,
                        value: "{min_day}",
                        oninput: move |evt: Event<FormData>| on_drag(Handle::Min, evt.value()),
                    }
                }
                label {
                    "To day "
                    input {
                        r#type: "range",
                        min: "1",
                        max: "{last_day}",
                        id: MAX_HANDLE_ID,
                        value: "{max_day}",
                        oninput: move |evt: Event<FormData>| on_drag(Handle::Max, evt.value()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_within_range() {
        assert_eq!(resolve_drag(Handle::Min, 40, (10, 90)), (40, 90));
        assert_eq!(resolve_drag(Handle::Max, 60, (10, 90)), (10, 60));
    }

    #[test]
    fn test_drag_past_other_handle_stops_at_it() {
        assert_eq!(resolve_drag(Handle::Min, 120, (10, 90)), (90, 90));
        assert_eq!(resolve_drag(Handle::Max, 5, (10, 90)), (10, 10));
        // already touching: the filter does not change, so only the DOM is corrected
        assert_eq!(resolve_drag(Handle::Min, 200, (90, 90)), (90, 90));
    }
}
