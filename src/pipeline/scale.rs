//! Square-root radius scale from market cap to bubble radius.

use crate::config::ScaleConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    /// (min, max) of the displayed values; `None` when nothing is displayed.
    domain: Option<(f64, f64)>,
    min_radius: f64,
    max_radius: f64,
}

impl RadiusScale {
    /// Scale whose domain spans the finite values in `values`.
    pub fn fit(values: impl IntoIterator<Item = f64>, config: &ScaleConfig) -> Self {
        let domain = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });
        Self {
            domain,
            min_radius: config.min_radius.min(config.max_radius),
            max_radius: config.max_radius.max(config.min_radius),
        }
    }

    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min_radius, self.max_radius)
    }

    /// Mid-range radius, used when the domain has no spread.
    pub fn mid_radius(&self) -> f64 {
        (self.min_radius + self.max_radius) / 2.0
    }

    /// `min_r + (max_r - min_r) * sqrt((v - lo) / (hi - lo))`, clamped to
    /// the range. A degenerate domain yields the mid-range radius.
    pub fn radius(&self, value: f64) -> f64 {
        let Some((lo, hi)) = self.domain else {
            return self.mid_radius();
        };
        let span = hi - lo;
        if span <= 0.0 || !value.is_finite() {
            return self.mid_radius();
        }
        let t = ((value - lo) / span).clamp(0.0, 1.0);
        self.min_radius + (self.max_radius - self.min_radius) * t.sqrt()
    }

    /// Reference values for the legend: min, midpoint, max.
    pub fn legend_values(&self) -> Option<[f64; 3]> {
        self.domain.map(|(lo, hi)| [lo, (lo + hi) / 2.0, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(values: &[f64]) -> RadiusScale {
        RadiusScale::fit(values.iter().copied(), &ScaleConfig::default())
    }

    #[test]
    fn endpoints_map_to_range() {
        let s = scale(&[100.0, 400.0, 10_000.0]);
        assert_eq!(s.radius(100.0), 10.0);
        assert_eq!(s.radius(10_000.0), 40.0);
    }

    #[test]
    fn square_root_shape() {
        let s = scale(&[0.0, 100.0]);
        // sqrt(0.25) = 0.5 → halfway
        assert!((s.radius(25.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic_and_bounded() {
        let values = [3.0, 17.0, 17.5, 250.0, 1_000.0, 164_454.0, 2_900_000.0];
        let s = scale(&values);
        let (lo, hi) = s.range();
        for a in values {
            let ra = s.radius(a);
            assert!((lo..=hi).contains(&ra));
            for b in values {
                if a > b {
                    assert!(ra >= s.radius(b), "{} vs {}", a, b);
                }
            }
        }
    }

    #[test]
    fn degenerate_domain_is_mid_range() {
        let s = scale(&[5_000.0, 5_000.0, 5_000.0]);
        let r = s.radius(5_000.0);
        assert!(r.is_finite());
        assert_eq!(r, 25.0);

        let single = scale(&[42.0]);
        assert_eq!(single.radius(42.0), 25.0);

        let empty = scale(&[]);
        assert_eq!(empty.radius(1.0), 25.0);
        assert!(empty.legend_values().is_none());
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        let s = scale(&[10.0, 20.0]);
        assert_eq!(s.radius(-1_000.0), 10.0);
        assert_eq!(s.radius(1e12), 40.0);
        assert_eq!(s.radius(f64::NAN), 25.0);
    }

    #[test]
    fn legend_values_span_domain() {
        let s = scale(&[10.0, 30.0]);
        assert_eq!(s.legend_values(), Some([10.0, 20.0, 30.0]));
    }
}
