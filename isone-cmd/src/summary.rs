//! Plain-text tables of one dashboard frame.

use crate::DashboardArgs;
use isone_dashboard::DashboardFrame;
use std::fmt::Write;

/// Load, compute and print a frame for the requested filter.
pub async fn run_summary(args: &DashboardArgs) -> anyhow::Result<()> {
    let (dashboard, filter) = args.load().await?;
    let frame = dashboard.compute(&filter);
    print!("{}", format_summary(&frame));
    Ok(())
}

/// Render every series of `frame` as aligned text tables.
pub fn format_summary(frame: &DashboardFrame) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_summary(&mut out, frame);
    out
}

fn write_summary(out: &mut String, frame: &DashboardFrame) -> std::fmt::Result {
    writeln!(out, "{}", frame.range_label)?;
    writeln!(out, "Demand metric: {}", frame.filter.metric())?;
    writeln!(out)?;

    writeln!(
        out,
        "Average fractional energy (legend {} - {})",
        frame.legend.min, frame.legend.max
    )?;
    if frame.regional_averages.is_empty() {
        writeln!(out, "  no data in range")?;
    }
    for (state, average) in &frame.regional_averages {
        writeln!(out, "  {:<16} {:>8.4}", state, average)?;
    }
    writeln!(out)?;

    for histogram in &frame.histograms {
        writeln!(out, "{}", histogram.title)?;
        for bin in &histogram.bins {
            writeln!(
                out,
                "  {:>9.2} - {:>9.2}  {:>4}",
                bin.lower_bound, bin.upper_bound, bin.count
            )?;
        }
    }
    writeln!(out)?;

    write!(out, "{:<26}", "Avg MWh supplied")?;
    for day in 1..=7 {
        write!(out, " {:>7}", isone_data::weekday_label(day))?;
    }
    writeln!(out)?;
    for chart in &frame.weekday_charts {
        write!(out, "{:<26}", chart.region)?;
        for day in 1..=7 {
            match chart.bars.iter().find(|b| b.day_of_week == day) {
                Some(bar) => write!(out, " {:>7.0}", bar.mean)?,
                None => write!(out, " {:>7}", "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::args;
    use isone_dashboard::Metric;

    #[tokio::test]
    async fn test_summary_of_bundled_fixtures() {
        let (dashboard, filter) = args(Some(1), Some(31), Metric::Min)
            .load()
            .await
            .unwrap();
        let text = format_summary(&dashboard.compute(&filter));
        assert!(text.starts_with("Range: Jan 1st, 2023 - Jan 31st, 2023\n"));
        assert!(text.contains("Demand metric: min"));
        assert!(text.contains("Region: Worcester Massachusetts (USD vs. # of Days)"));
        assert!(text.contains("  Vermont "));
        assert!(text.contains("South East Massachusetts"));
    }

    #[tokio::test]
    async fn test_empty_range_reports_no_data() {
        // the 2023 exports stop at day 365
        let (dashboard, filter) = args(Some(366), Some(366), Metric::Peak)
            .load()
            .await
            .unwrap();
        let frame = dashboard.compute(&filter);
        assert!(frame.regional_averages.is_empty());
        assert!(frame.weekday_charts.iter().all(|chart| chart.bars.is_empty()));

        let text = format_summary(&frame);
        assert!(text.starts_with("Range: Dec 31st, 2023 - Dec 31st, 2023\n"));
        assert!(text.contains("no data in range"));
        assert!(text.contains(&format!("{:<26} {:>7}", "Maine", "-")));
        assert!(text.contains("Region: Maine (USD vs. # of Days)"));
    }
}
