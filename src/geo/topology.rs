//! World boundaries from the world-atlas TopoJSON.
//!
//! Arc decoding is left to the `topojson` crate, which turns the named object
//! into a GeoJSON feature collection; this module keeps only the `Polygon`
//! and `MultiPolygon` rings and the filtering the map needs.

use geojson::feature::Id;
use geojson::{Feature, Value};
use topojson::{to_geojson, TopoJson};

use super::GeoPoint;
use crate::config::DataConfig;
use crate::error::LoadError;
use crate::net::fetch::{fetch_text, FetchOptions};

/// Object name holding the country geometries in world-atlas files.
pub const COUNTRIES_OBJECT: &str = "countries";

/// Antarctica's ISO 3166 numeric code.
const ANTARCTICA_ID: u32 = 10;

/// Southern cut-off; shapes reaching below it are dropped.
const SOUTH_LIMIT: f64 = -60.0;

/// One country outline. Holes are kept as ordinary rings.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    pub id: Option<String>,
    pub name: Option<String>,
    pub rings: Vec<Vec<GeoPoint>>,
}

impl CountryShape {
    fn numeric_id(&self) -> Option<u32> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }

    pub fn is_antarctic(&self) -> bool {
        if self.numeric_id() == Some(ANTARCTICA_ID) {
            return true;
        }
        if self
            .name
            .as_deref()
            .map_or(false, |n| n.contains("Antarct"))
        {
            return true;
        }
        self.rings
            .iter()
            .flatten()
            .any(|p| p.lat < SOUTH_LIMIT)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldBoundaries {
    pub shapes: Vec<CountryShape>,
}

impl WorldBoundaries {
    /// Drop Antarctica and anything reaching below 60°S.
    pub fn without_antarctica(mut self) -> Self {
        let before = self.shapes.len();
        self.shapes.retain(|s| !s.is_antarctic());
        log::debug!(
            "Removed {} antarctic shapes",
            before - self.shapes.len()
        );
        self
    }

    /// (south-west, north-east) corners over every vertex.
    pub fn bounds(&self) -> Option<(GeoPoint, GeoPoint)> {
        let mut points = self.shapes.iter().flat_map(|s| s.rings.iter().flatten());
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                GeoPoint::new(min.lon.min(p.lon), min.lat.min(p.lat)),
                GeoPoint::new(max.lon.max(p.lon), max.lat.max(p.lat)),
            )
        });
        Some((min, max))
    }
}

/// Decode the named object of a TopoJSON document into country outlines.
pub fn decode_topology(text: &str, object: &str) -> Result<WorldBoundaries, LoadError> {
    let topology = match text.parse::<TopoJson>() {
        Ok(TopoJson::Topology(topology)) => topology,
        Ok(TopoJson::Geometry(_)) => {
            return Err(LoadError::Topology(
                "expected a Topology document, found a bare geometry".into(),
            ))
        }
        Err(e) => return Err(LoadError::Topology(e.to_string())),
    };

    let collection = to_geojson(&topology, &object.to_string())
        .map_err(|e| LoadError::Topology(format!("object `{}`: {}", object, e)))?;

    let shapes: Vec<CountryShape> = collection
        .features
        .iter()
        .filter_map(shape_from_feature)
        .collect();
    if shapes.is_empty() {
        return Err(LoadError::Topology(format!(
            "object `{}` holds no polygons",
            object
        )));
    }
    Ok(WorldBoundaries { shapes })
}

/// Fetch and decode the configured boundary file, minus Antarctica.
pub fn load_boundaries(config: &DataConfig) -> Result<WorldBoundaries, LoadError> {
    let fetched = fetch_text(&config.boundaries, &FetchOptions::from(config))?;
    let world = decode_topology(&fetched.body, COUNTRIES_OBJECT)?.without_antarctica();
    log::info!(
        "Loaded {} country shapes from {}",
        world.shapes.len(),
        fetched.source
    );
    Ok(world)
}

/// Rings of a polygonal feature; other geometry types yield `None`.
fn shape_from_feature(feature: &Feature) -> Option<CountryShape> {
    let rings: Vec<Vec<GeoPoint>> = match &feature.geometry.as_ref()?.value {
        Value::Polygon(rings) => rings.iter().map(|r| to_points(r)).collect(),
        Value::MultiPolygon(polygons) => polygons.iter().flatten().map(|r| to_points(r)).collect(),
        _ => return None,
    };

    let id = feature.id.as_ref().map(|id| match id {
        Id::String(s) => s.clone(),
        Id::Number(n) => n.to_string(),
    });
    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("name"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Some(CountryShape { id, name, rings })
}

fn to_points(ring: &[Vec<f64>]) -> Vec<GeoPoint> {
    ring.iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| GeoPoint::new(pos[0], pos[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPO: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [0.5, 0.5], "translate": [-10, -10] },
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "id": "276", "arcs": [[0]],
                      "properties": { "name": "Germany" } },
                    { "type": "MultiPolygon", "id": "392", "arcs": [[[1]], [[2]]],
                      "properties": { "name": "Japan" } },
                    { "type": "Polygon", "id": "010", "arcs": [[3]],
                      "properties": { "name": "Antarctica" } }
                ]
            }
        },
        "arcs": [
            [[20, 20], [4, 0], [0, 4], [-4, 0], [0, -4]],
            [[60, 20], [2, 0], [0, 2], [-2, -2]],
            [[80, 20], [2, 0], [0, 2], [-2, -2]],
            [[0, 0], [10, 0], [0, 1], [-10, -1]]
        ]
    }"#;

    fn temp_file(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "robotics-atlas-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn decodes_quantized_arcs() {
        let world = decode_topology(TOPO, COUNTRIES_OBJECT).unwrap();
        assert_eq!(world.shapes.len(), 3);

        let germany = &world.shapes[0];
        assert_eq!(germany.name.as_deref(), Some("Germany"));
        assert_eq!(germany.rings.len(), 1);
        assert_eq!(germany.rings[0][0], GeoPoint::new(0.0, 0.0));
        assert_eq!(germany.rings[0][1], GeoPoint::new(2.0, 0.0));
        assert_eq!(germany.rings[0][2], GeoPoint::new(2.0, 2.0));
    }

    #[test]
    fn multipolygons_keep_every_ring() {
        let world = decode_topology(TOPO, COUNTRIES_OBJECT).unwrap();
        let japan = &world.shapes[1];
        assert_eq!(japan.name.as_deref(), Some("Japan"));
        assert_eq!(japan.rings.len(), 2);
        assert_eq!(japan.rings[0][0], GeoPoint::new(20.0, 0.0));
        assert_eq!(japan.rings[1][0], GeoPoint::new(30.0, 0.0));
    }

    #[test]
    fn antarctica_is_removed() {
        let world = decode_topology(TOPO, COUNTRIES_OBJECT)
            .unwrap()
            .without_antarctica();
        assert_eq!(world.shapes.len(), 2);
        assert!(world.shapes.iter().all(|s| s.name.as_deref() != Some("Antarctica")));
    }

    #[test]
    fn far_south_shapes_are_removed() {
        let shape = CountryShape {
            id: None,
            name: Some("Somewhere".into()),
            rings: vec![vec![GeoPoint::new(0.0, -61.0), GeoPoint::new(1.0, -50.0)]],
        };
        assert!(shape.is_antarctic());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let world = decode_topology(TOPO, COUNTRIES_OBJECT)
            .unwrap()
            .without_antarctica();
        let (min, max) = world.bounds().unwrap();
        assert_eq!(min, GeoPoint::new(0.0, 0.0));
        assert_eq!(max, GeoPoint::new(31.0, 2.0));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            decode_topology("not json", COUNTRIES_OBJECT),
            Err(LoadError::Topology(_))
        ));
        assert!(decode_topology(r#"{"type":"FeatureCollection","features":[]}"#, COUNTRIES_OBJECT).is_err());
    }

    #[test]
    fn missing_object_is_an_error() {
        let err = decode_topology(TOPO, "land").unwrap_err();
        assert!(matches!(err, LoadError::Topology(_)));
        assert_eq!(err.phase(), "decode");
    }

    #[test]
    fn unreadable_boundary_file_is_a_fetch_error() {
        let config = DataConfig::default().with_boundaries("no/such/world.json");
        let err = load_boundaries(&config).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.phase(), "fetch");
    }

    #[test]
    fn loads_boundaries_from_file_without_antarctica() {
        let path = temp_file("world", TOPO);
        let config = DataConfig::default().with_boundaries(path.to_string_lossy());
        let world = load_boundaries(&config).unwrap();
        assert_eq!(world.shapes.len(), 2);
        assert!(world.shapes.iter().all(|s| !s.is_antarctic()));
        assert!(world.bounds().map_or(false, |(min, _)| min.lat >= SOUTH_LIMIT));
        std::fs::remove_file(&path).ok();
    }
}
