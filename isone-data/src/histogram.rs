use crate::window::DayWindow;
use isone_market::records::PriceObservation;
use serde::{Deserialize, Serialize};

/// Number of bins the price histograms aim for.
pub const HISTOGRAM_BIN_TARGET: usize = 20;

/// One bar of a price histogram.
///
/// Bins cover `[lower_bound, upper_bound)`, except the last which also
/// includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

/// A "nice" step: `factor * 10^power` with factor in {1, 2, 5, 10}.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickStep {
    factor: f64,
    power: i32,
}

impl TickStep {
    fn for_span(start: f64, stop: f64, count: usize) -> Self {
        let raw = (stop - start) / count.max(1) as f64;
        let power = raw.log10().floor() as i32;
        let error = raw / 10f64.powi(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        TickStep { factor, power }
    }

    /// Multiples of the step lying strictly inside `(start, stop)`.
    ///
    /// Small steps are applied as divisions so thresholds like 0.1 stay exact.
    fn ticks_within(&self, start: f64, stop: f64) -> Vec<f64> {
        let inside = |t: &f64| start < *t && *t < stop;
        if self.power >= 0 {
            let step = self.factor * 10f64.powi(self.power);
            multiples(start / step, stop / step)
                .map(|k| k * step)
                .filter(inside)
                .collect()
        } else {
            let inverse = 10f64.powi(-self.power) / self.factor;
            multiples(start * inverse, stop * inverse)
                .map(|k| k / inverse)
                .filter(inside)
                .collect()
        }
    }
}

fn multiples(from: f64, to: f64) -> impl Iterator<Item = f64> {
    (from.ceil() as i64..=to.floor() as i64).map(|k| k as f64)
}

/// Bin `values` into equal-width "nice" bins spanning their own extent.
///
/// An empty input spans `[0, 1]`; identical values produce a single bin.
pub fn bin_values(values: &[f64], target_bins: usize) -> Vec<HistogramBin> {
    let (lo, hi) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    };
    if lo >= hi {
        return vec![HistogramBin {
            lower_bound: lo,
            upper_bound: hi,
            count: values.len(),
        }];
    }

    let thresholds = TickStep::for_span(lo, hi, target_bins).ticks_within(lo, hi);
    let mut edges = Vec::with_capacity(thresholds.len() + 2);
    edges.push(lo);
    edges.extend_from_slice(&thresholds);
    edges.push(hi);

    let mut bins: Vec<HistogramBin> = edges
        .windows(2)
        .map(|pair| HistogramBin {
            lower_bound: pair[0],
            upper_bound: pair[1],
            count: 0,
        })
        .collect();
    for &v in values {
        // bisect right: a value equal to a threshold starts the next bin
        let idx = thresholds.partition_point(|&t| t <= v);
        bins[idx].count += 1;
    }
    bins
}

/// Histogram of a region's average real-time prices over a window.
pub fn price_histogram(observations: &[PriceObservation], window: DayWindow) -> Vec<HistogramBin> {
    price_histogram_with_target(observations, window, HISTOGRAM_BIN_TARGET)
}

pub fn price_histogram_with_target(
    observations: &[PriceObservation],
    window: DayWindow,
    target_bins: usize,
) -> Vec<HistogramBin> {
    let prices: Vec<f64> = observations
        .iter()
        .filter(|o| window.contains(o.day_of_year))
        .filter_map(|o| o.avg_real_time_price)
        .collect();
    bin_values(&prices, target_bins)
}

/// One histogram per region, in region order.
pub fn price_histograms(
    all_regions: &[Vec<PriceObservation>],
    window: DayWindow,
    target_bins: usize,
) -> Vec<Vec<HistogramBin>> {
    all_regions
        .iter()
        .map(|observations| price_histogram_with_target(observations, window, target_bins))
        .collect()
}
