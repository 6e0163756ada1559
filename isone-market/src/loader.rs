use crate::error::{MarketError, Result};
use crate::market_data::{FixtureTexts, MarketData};
use crate::region::FixtureManifest;
use futures::future::try_join_all;
use reqwest::Client;
use std::path::PathBuf;

/// Where fixture files are read from.
#[derive(Debug, Clone)]
pub enum FixtureSource {
    /// A local directory holding every fixture by file name
    Directory(PathBuf),
    /// An HTTP base URL; fixtures are fetched as `{base_url}/{file}`
    Remote { base_url: String, client: Client },
}

impl FixtureSource {
    pub fn remote(base_url: &str) -> Self {
        FixtureSource::Remote {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Fetch one fixture as text.
    pub async fn fetch_text(&self, file: &str) -> Result<String> {
        match self {
            FixtureSource::Directory(dir) => {
                let path = dir.join(file);
                log::debug!("reading {}", path.display());
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| MarketError::FixtureRead {
                        path: path.display().to_string(),
                        source,
                    })
            }
            FixtureSource::Remote { base_url, client } => {
                let url = format!("{base_url}/{file}");
                log::debug!("fetching {url}");
                let response = client.get(url).send().await?.error_for_status()?;
                Ok(response.text().await?)
            }
        }
    }
}

/// Fetch every fixture named by `manifest` concurrently and parse them.
///
/// The energy table, the geometry, the price files and the demand files
/// are four groups joined together. The first failure in any group fails
/// the whole load and nothing is returned.
pub async fn load_market_data(
    source: &FixtureSource,
    manifest: &FixtureManifest,
) -> Result<MarketData> {
    let prices = try_join_all(
        manifest
            .regions
            .iter()
            .map(|region| source.fetch_text(&region.file)),
    );
    let demand = try_join_all(
        manifest
            .regions
            .iter()
            .map(|region| source.fetch_text(&region.file)),
    );
    let (energy, geometry, prices, demand) = tokio::try_join!(
        source.fetch_text(&manifest.energy_file),
        source.fetch_text(&manifest.geometry_file),
        prices,
        demand,
    )?;
    log::info!(
        "fetched {} fixtures for {} regions",
        2 + prices.len() + demand.len(),
        manifest.regions.len()
    );

    MarketData::from_texts(
        manifest,
        &FixtureTexts {
            energy,
            geometry,
            prices,
            demand,
        },
    )
}
