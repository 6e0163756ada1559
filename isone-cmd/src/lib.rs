//! Command implementations for the ISO-NE dashboard CLI.
//!
//! Both subcommands load the fixtures once, apply a single filter and
//! compute one dashboard frame; they differ only in how it is written out.

use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use isone_dashboard::{Dashboard, DashboardConfig, FilterState, Metric};
use isone_market::loader::FixtureSource;
use isone_utils::dates::days_in_year;
use log::info;
use std::path::PathBuf;

pub mod export;
pub mod summary;

/// Where the fixtures come from and which filter to apply.
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Directory holding the fixture files
    #[arg(short = 'd', long, conflicts_with = "base_url")]
    pub data_dir: Option<PathBuf>,

    /// HTTP base URL serving the fixture files
    #[arg(long)]
    pub base_url: Option<String>,

    /// JSON dashboard configuration (defaults apply to omitted fields)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First day of year to include (default 1)
    #[arg(long)]
    pub min_day: Option<u32>,

    /// Last day of year to include (default: end of the configured year)
    #[arg(long)]
    pub max_day: Option<u32>,

    /// Demand measured at the peak or the minimum hour
    #[arg(short, long, default_value = "peak")]
    pub metric: Metric,
}

impl DashboardArgs {
    fn source(&self) -> anyhow::Result<FixtureSource> {
        match (&self.data_dir, &self.base_url) {
            (Some(dir), _) => Ok(FixtureSource::Directory(dir.clone())),
            (None, Some(url)) => Ok(FixtureSource::remote(url)),
            (None, None) => bail!("one of --data-dir or --base-url is required"),
        }
    }

    fn dashboard_config(&self) -> anyhow::Result<DashboardConfig> {
        match &self.config {
            Some(path) => DashboardConfig::from_json_file(path),
            None => Ok(DashboardConfig::default()),
        }
    }

    /// Validate the requested filter against the configured year.
    pub fn filter(&self, year: i32) -> anyhow::Result<FilterState> {
        let min_day = self.min_day.unwrap_or(1);
        let max_day = self.max_day.unwrap_or_else(|| days_in_year(year));
        Ok(FilterState::new(min_day, max_day, self.metric)?)
    }

    /// Load the fixtures and validate the filter.
    ///
    /// The filter is checked before any fixture is fetched.
    pub async fn load(&self) -> anyhow::Result<(Dashboard, FilterState)> {
        let config = self.dashboard_config()?;
        let filter = self.filter(config.year)?;
        let source = self.source()?;
        info!(
            "loading {} regions for {}",
            config.fixtures.regions.len(),
            config.year
        );
        let dashboard = Dashboard::load(&source, config)
            .await
            .context("failed to load market data")?;
        Ok((dashboard, filter))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print regional averages, price histograms and day-of-week demand
    Summary {
        #[command(flatten)]
        args: DashboardArgs,
    },

    /// Write the computed dashboard frame and its draw calls as JSON
    Export {
        #[command(flatten)]
        args: DashboardArgs,

        /// Output path for the JSON document
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { args } => summary::run_summary(&args).await,
        Command::Export { args, output } => export::run_export(&args, &output).await,
    }
}
