use crate::error::{MarketError, Result};
use crate::geometry::RegionGeometryCollection;
use crate::records::{
    parse_demand_csv, parse_energy_csv, parse_price_csv, DemandObservation, PriceObservation,
    RegionalEnergyRecord,
};
use crate::region::{FixtureManifest, Region};

/// Raw fixture contents, one string per file.
///
/// `prices[i]` and `demand[i]` belong to `regions[i]` of the manifest they
/// were fetched with. They are usually the same text fetched twice.
#[derive(Debug, Clone, Default)]
pub struct FixtureTexts {
    pub energy: String,
    pub geometry: String,
    pub prices: Vec<String>,
    pub demand: Vec<String>,
}

/// Everything the dashboard reads at startup, parsed and immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    pub regions: Vec<Region>,
    pub energy: Vec<RegionalEnergyRecord>,
    pub geometry: RegionGeometryCollection,
    pub prices: Vec<Vec<PriceObservation>>,
    pub demand: Vec<Vec<DemandObservation>>,
}

impl MarketData {
    /// Parse all fixture texts; any failure fails the whole load.
    pub fn from_texts(manifest: &FixtureManifest, texts: &FixtureTexts) -> Result<Self> {
        let expected = manifest.regions.len();
        for found in [texts.prices.len(), texts.demand.len()] {
            if found != expected {
                return Err(MarketError::RegionCountMismatch { expected, found });
            }
        }

        let energy = parse_energy_csv(&texts.energy, &manifest.energy_file)?;
        let geometry = RegionGeometryCollection::from_geojson(&texts.geometry)?;
        let prices = manifest
            .regions
            .iter()
            .zip(&texts.prices)
            .map(|(region, text)| parse_price_csv(text, &region.file))
            .collect::<Result<Vec<_>>>()?;
        let demand = manifest
            .regions
            .iter()
            .zip(&texts.demand)
            .map(|(region, text)| parse_demand_csv(text, &region.file))
            .collect::<Result<Vec<_>>>()?;

        Ok(MarketData {
            regions: manifest.regions.clone(),
            energy,
            geometry,
            prices,
            demand,
        })
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY: &str = "Date,Maine\n2023-01-01,0.2\n";
    const GEO: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Maine"},"geometry":null}]}"#;
    const ZONE: &str = "Date,Avg_RT_LMP,Min_Demand,Peak_Demand\n2023-01-01,30,900,1300\n";

    fn manifest(codes: &[&str]) -> FixtureManifest {
        FixtureManifest {
            regions: codes.iter().map(|c| Region::new(c, c, 2023)).collect(),
            ..FixtureManifest::default()
        }
    }

    #[test]
    fn test_from_texts() {
        let texts = FixtureTexts {
            energy: ENERGY.to_string(),
            geometry: GEO.to_string(),
            prices: vec![ZONE.to_string(), ZONE.to_string()],
            demand: vec![ZONE.to_string(), ZONE.to_string()],
        };
        let data = MarketData::from_texts(&manifest(&["ME", "NH"]), &texts).unwrap();
        assert_eq!(data.prices.len(), 2);
        assert_eq!(data.demand[1][0].peak_demand, Some(1300.0));
        assert_eq!(data.energy[0].value("Maine"), Some(0.2));
        assert_eq!(data.region_names().collect::<Vec<_>>(), vec!["ME", "NH"]);
    }

    #[test]
    fn test_region_count_mismatch() {
        let texts = FixtureTexts {
            energy: ENERGY.to_string(),
            geometry: GEO.to_string(),
            prices: vec![ZONE.to_string()],
            demand: vec![ZONE.to_string()],
        };
        let err = MarketData::from_texts(&manifest(&["ME", "NH"]), &texts).unwrap_err();
        assert!(matches!(
            err,
            MarketError::RegionCountMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_one_bad_file_fails_the_whole_load() {
        let texts = FixtureTexts {
            energy: ENERGY.to_string(),
            geometry: GEO.to_string(),
            prices: vec![ZONE.to_string(), "Date\n2023-01-01\n".to_string()],
            demand: vec![ZONE.to_string(), ZONE.to_string()],
        };
        assert!(MarketData::from_texts(&manifest(&["ME", "NH"]), &texts).is_err());
    }
}
