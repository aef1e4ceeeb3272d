//! Geography: country anchor coordinates, world boundaries and the
//! equirectangular projection used by the map view.

pub mod topology;
pub mod projection;

use std::collections::HashMap;

/// Longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn offset(self, dlon: f64, dlat: f64) -> Self {
        Self {
            lon: self.lon + dlon,
            lat: self.lat + dlat,
        }
    }
}

/// Built-in anchors. Aliases point at the same coordinate.
const BUILTIN: &[(&str, f64, f64)] = &[
    ("United States", -95.7129, 37.0902),
    ("USA", -95.7129, 37.0902),
    ("US", -95.7129, 37.0902),
    ("Japan", 138.2529, 36.2048),
    ("China", 104.1954, 35.8617),
    ("Germany", 10.4515, 51.1657),
    ("Brazil", -53.0, -10.0),
    ("India", 78.9629, 20.5937),
    ("Australia", 133.7751, -25.2744),
    ("South Korea", 127.7669, 35.9078),
    ("Korea", 127.7669, 35.9078),
    ("United Kingdom", -3.4360, 55.3781),
    ("UK", -3.4360, 55.3781),
    ("France", 2.2137, 46.2276),
    ("Switzerland", 8.2275, 46.8182),
    ("Sweden", 18.6435, 60.1282),
    ("Canada", -106.3468, 56.1304),
    ("Israel", 34.8516, 31.0461),
    ("Italy", 12.5674, 41.8719),
    ("Netherlands", 5.2913, 52.1326),
    ("Denmark", 9.5018, 56.2639),
    ("Taiwan", 120.9605, 23.6978),
    ("Norway", 8.4689, 60.4720),
    ("Finland", 25.7482, 61.9241),
    ("Spain", -3.7492, 40.4637),
    ("Singapore", 103.8198, 1.3521),
    ("Austria", 14.5501, 47.5162),
];

/// Lookup table from country name to its anchor coordinate.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    anchors: HashMap<String, GeoPoint>,
}

impl CountryTable {
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .map(|&(name, lon, lat)| (name.to_string(), GeoPoint::new(lon, lat))),
        )
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        Self {
            anchors: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, country: &str) -> Option<GeoPoint> {
        self.anchors.get(country).copied()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.anchors.contains_key(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_fallback_countries() {
        let table = CountryTable::builtin();
        for r in crate::data::fallback::records() {
            assert!(table.contains(&r.country), "no anchor for {}", r.country);
        }
    }

    #[test]
    fn aliases_share_coordinates() {
        let table = CountryTable::builtin();
        assert_eq!(table.get("USA"), table.get("United States"));
        assert_eq!(table.get("UK"), table.get("United Kingdom"));
        assert!(table.get("Atlantis").is_none());
    }
}
