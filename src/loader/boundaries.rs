//! Province boundary geometry, passed through untouched to map rendering.

use std::path::Path;
use std::str::FromStr;

use geojson::GeoJson;
use serde::Serialize;
use tracing::info;

use crate::error::LoadError;

/// Parsed province boundaries. Opaque to the report functions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProvinceBoundary {
    geojson: GeoJson,
}

impl ProvinceBoundary {
    pub fn new(geojson: GeoJson) -> Self {
        Self { geojson }
    }

    pub fn as_geojson(&self) -> &GeoJson {
        &self.geojson
    }

    pub fn into_geojson(self) -> GeoJson {
        self.geojson
    }

    /// Number of features, counting a bare geometry as zero.
    pub fn feature_count(&self) -> usize {
        match &self.geojson {
            GeoJson::FeatureCollection(fc) => fc.features.len(),
            GeoJson::Feature(_) => 1,
            GeoJson::Geometry(_) => 0,
        }
    }
}

impl FromStr for ProvinceBoundary {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse::<GeoJson>()?))
    }
}

/// Reads the boundary file at `path` without caching.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_boundaries(path: &Path) -> Result<ProvinceBoundary, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let boundary: ProvinceBoundary = content.parse()?;
    info!(features = boundary.feature_count(), "Boundary file loaded");
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVINCES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "CTP_KOR_NM": "서울특별시" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[126.9, 37.5], [127.1, 37.5], [127.1, 37.6], [126.9, 37.5]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let boundary: ProvinceBoundary = PROVINCES.parse().unwrap();
        assert_eq!(boundary.feature_count(), 1);
        assert!(matches!(boundary.as_geojson(), GeoJson::FeatureCollection(_)));
    }

    #[test]
    fn test_passthrough_preserves_properties() {
        let boundary: ProvinceBoundary = PROVINCES.parse().unwrap();
        let value = serde_json::to_value(&boundary).unwrap();
        assert_eq!(
            value["features"][0]["properties"]["CTP_KOR_NM"],
            "서울특별시"
        );
    }

    #[test]
    fn test_invalid_geojson() {
        let err = "{\"type\": \"Nope\"}".parse::<ProvinceBoundary>().unwrap_err();
        assert!(matches!(err, LoadError::GeoJson(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_boundaries(Path::new("/nonexistent/provinces.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
