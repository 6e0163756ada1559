//! State boundary polygons for the choropleth map.
//!
//! The aggregation engine never looks inside a geometry; it is carried from
//! the GeoJSON fixture to the renderer untouched.

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A named polygon or multipolygon for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionGeometry {
    /// Matches a column of the fractional-energy fixture, e.g. "Maine"
    pub name: String,
    /// Raw GeoJSON geometry object
    pub geometry: Value,
}

/// All state geometries, in fixture order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RegionGeometryCollection {
    pub features: Vec<RegionGeometry>,
}

#[derive(Deserialize)]
struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<GeoJsonFeature>,
}

#[derive(Deserialize)]
struct GeoJsonFeature {
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    geometry: Value,
}

impl RegionGeometryCollection {
    /// Parse a GeoJSON `FeatureCollection` whose features carry `properties.name`.
    pub fn from_geojson(json_data: &str) -> Result<Self> {
        let collection: GeoJsonFeatureCollection = serde_json::from_str(json_data)?;
        if collection.kind != "FeatureCollection" {
            return Err(MarketError::InvalidGeometry(format!(
                "expected a FeatureCollection, found {:?}",
                collection.kind
            )));
        }
        let features = collection
            .features
            .into_iter()
            .enumerate()
            .map(|(i, feature)| -> Result<RegionGeometry> {
                let name = feature
                    .properties
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        MarketError::InvalidGeometry(format!("feature {i} has no name property"))
                    })?;
                Ok(RegionGeometry {
                    name: name.to_string(),
                    geometry: feature.geometry,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        log::info!("loaded {} region geometries", features.len());
        Ok(RegionGeometryCollection { features })
    }

    /// Re-emit the collection as a GeoJSON value for the map renderer.
    pub fn to_geojson_value(&self) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .map(|f| {
                json!({
                    "type": "Feature",
                    "properties": { "name": f.name },
                    "geometry": f.geometry,
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }

    pub fn to_geojson(&self) -> String {
        self.to_geojson_value().to_string()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }
}
