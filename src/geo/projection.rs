//! Equirectangular projection fitted to a viewport, plus the graticule and
//! sphere outline drawn when no boundary data is available.

use super::GeoPoint;

/// Smallest extent (degrees) used when fitting, so a single point still fits.
const MIN_EXTENT: f64 = 1e-6;

/// Equirectangular projection: screen = translate + scale * (lon, -lat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Pixels per degree
    pub scale: f64,
    pub translate: [f64; 2],
}

impl Projection {
    /// Fit the box `[min, max]` into a `width × height` viewport, centered,
    /// preserving aspect ratio.
    pub fn fit(min: GeoPoint, max: GeoPoint, width: f64, height: f64) -> Self {
        let dx = (max.lon - min.lon).max(MIN_EXTENT);
        let dy = (max.lat - min.lat).max(MIN_EXTENT);
        let scale = (width / dx).min(height / dy);
        Self {
            scale,
            translate: [
                (width - scale * (min.lon + max.lon)) / 2.0,
                (height + scale * (min.lat + max.lat)) / 2.0,
            ],
        }
    }

    /// Fit the whole globe.
    pub fn fit_world(width: f64, height: f64) -> Self {
        Self::fit(
            GeoPoint::new(-180.0, -90.0),
            GeoPoint::new(180.0, 90.0),
            width,
            height,
        )
    }

    pub fn project(&self, p: GeoPoint) -> [f64; 2] {
        [
            self.translate[0] + self.scale * p.lon,
            self.translate[1] - self.scale * p.lat,
        ]
    }
}

/// Meridians and parallels every `step` degrees, as polylines.
pub fn graticule(step: f64) -> Vec<Vec<GeoPoint>> {
    let step = if step > 0.0 { step } else { 30.0 };
    let mut lines = Vec::new();

    let mut lon = -180.0;
    while lon <= 180.0 + 1e-9 {
        lines.push(sample(|t| GeoPoint::new(lon, -90.0 + 180.0 * t)));
        lon += step;
    }

    let mut lat = -90.0 + step;
    while lat < 90.0 - 1e-9 {
        lines.push(sample(|t| GeoPoint::new(-180.0 + 360.0 * t, lat)));
        lat += step;
    }

    lines
}

/// Outline of the globe: a closed rectangle in this projection.
pub fn sphere_outline() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(-180.0, -90.0),
        GeoPoint::new(180.0, -90.0),
        GeoPoint::new(180.0, 90.0),
        GeoPoint::new(-180.0, 90.0),
        GeoPoint::new(-180.0, -90.0),
    ]
}

fn sample(f: impl Fn(f64) -> GeoPoint) -> Vec<GeoPoint> {
    const SEGMENTS: usize = 36;
    (0..=SEGMENTS)
        .map(|i| f(i as f64 / SEGMENTS as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_world_centers_the_origin() {
        let proj = Projection::fit_world(960.0, 500.0);
        let [x, y] = proj.project(GeoPoint::new(0.0, 0.0));
        assert!((x - 480.0).abs() < 1e-9);
        assert!((y - 250.0).abs() < 1e-9);
        // width-limited: 960 / 360
        assert!((proj.scale - 960.0 / 360.0).abs() < 1e-9);
    }

    #[test]
    fn fit_maps_corners_inside_viewport() {
        let min = GeoPoint::new(-170.0, -55.0);
        let max = GeoPoint::new(180.0, 83.0);
        let proj = Projection::fit(min, max, 960.0, 500.0);
        for p in [min, max, GeoPoint::new(min.lon, max.lat)] {
            let [x, y] = proj.project(p);
            assert!((-1e-9..=960.0 + 1e-9).contains(&x), "x={}", x);
            assert!((-1e-9..=500.0 + 1e-9).contains(&y), "y={}", y);
        }
        // north is up
        assert!(proj.project(max)[1] < proj.project(min)[1]);
    }

    #[test]
    fn single_point_fit_is_finite() {
        let p = GeoPoint::new(10.0, 50.0);
        let proj = Projection::fit(p, p, 100.0, 100.0);
        let [x, y] = proj.project(p);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn graticule_line_counts() {
        let lines = graticule(30.0);
        // 13 meridians (-180..=180) + 5 parallels (-60..=60)
        assert_eq!(lines.len(), 18);
        assert!(lines.iter().all(|l| l.len() == 37));
        assert_eq!(sphere_outline().first(), sphere_outline().last());
    }
}
