use serde::{Deserialize, Serialize};

/// Year of the bundled ISO-NE market exports.
pub const DEFAULT_MARKET_YEAR: i32 = 2023;

/// An ISO-NE load zone with its price/demand export.
///
/// The position of a region in the catalogue is its index in every
/// per-region collection (prices, demand, charts).
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Display name, e.g. "South East Massachusetts"
    pub name: String,
    /// Load zone code, e.g. "SEMA"
    pub code: String,
    /// Fixture file holding the zone's daily prices and demand
    pub file: String,
}

impl Region {
    pub fn new(name: &str, code: &str, year: i32) -> Self {
        Region {
            name: name.to_string(),
            code: code.to_string(),
            file: Region::fixture_file_name(year, code),
        }
    }

    /// File name of a zone's filtered daily export, e.g. "2023_ME-filt.csv".
    pub fn fixture_file_name(year: i32, code: &str) -> String {
        format!("{year}_{code}-filt.csv")
    }

    /// The eight ISO New England load zones, in dashboard order.
    pub fn new_england(year: i32) -> Vec<Region> {
        vec![
            Region::new("Maine", "ME", year),
            Region::new("New Hampshire", "NH", year),
            Region::new("Vermont", "VT", year),
            Region::new("Connecticut", "CT", year),
            Region::new("Rhode Island", "RI", year),
            Region::new("South East Massachusetts", "SEMA", year),
            Region::new("North East Massachusetts", "NEMA", year),
            Region::new("Worcester Massachusetts", "WCMA", year),
        ]
    }
}

/// Names of every fixture the dashboard reads at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureManifest {
    /// Wide CSV: `Date` plus one fractional-energy column per state
    pub energy_file: String,
    /// GeoJSON feature collection of state boundaries
    pub geometry_file: String,
    /// Ordered region catalogue; each entry names its price/demand CSV
    pub regions: Vec<Region>,
}

impl Default for FixtureManifest {
    fn default() -> Self {
        Self {
            energy_file: "fractional-energy-by-state.csv".to_string(),
            geometry_file: "new-england.json".to_string(),
            regions: Region::new_england(DEFAULT_MARKET_YEAR),
        }
    }
}
