//! Dashboard configuration.
//!
//! Plain structs with `Default` values and `with_*` builder methods. Nothing
//! is read from the environment; `main` only overrides the dataset location
//! from its first argument.

use std::time::Duration;

/// Dataset shipped next to the binary.
pub const DEFAULT_DATASET: &str = "data/robotics_companies.csv";

/// Public world-boundaries TopoJSON.
pub const WORLD_ATLAS_URL: &str = "https://unpkg.com/world-atlas@2/countries-110m.json";

/// Where the two remote assets come from and how they are fetched.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Filesystem path or `http(s)` URL of the company CSV.
    pub dataset: String,
    /// URL (or path) of the world-boundaries TopoJSON.
    pub boundaries: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            boundaries: WORLD_ATLAS_URL.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: concat!("robotics-atlas/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DataConfig {
    pub fn with_dataset(mut self, location: impl Into<String>) -> Self {
        self.dataset = location.into();
        self
    }

    pub fn with_boundaries(mut self, location: impl Into<String>) -> Self {
        self.boundaries = location.into();
        self
    }
}

/// Marker placement parameters, in degrees of longitude/latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Per-axis jitter for a company that is alone in its country.
    pub single_jitter: f64,
    /// Per-axis jitter added on top of the spiral position.
    pub spiral_jitter: f64,
    /// Spiral base radius grows by this much per occupant.
    pub spiral_step: f64,
    pub spiral_min_radius: f64,
    pub spiral_max_radius: f64,
    /// Full turns spread across one country's occupants.
    pub spiral_turns: f64,
    /// Fixed seed for reproducible jitter; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            single_jitter: 3.0,
            spiral_jitter: 1.5,
            spiral_step: 1.5,
            spiral_min_radius: 5.0,
            spiral_max_radius: 15.0,
            spiral_turns: 2.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same spiral, no randomness.
    pub fn without_jitter(mut self) -> Self {
        self.single_jitter = 0.0;
        self.spiral_jitter = 0.0;
        self
    }
}

/// Bubble radius bounds in map units (960-wide reference canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min_radius: 10.0,
            max_radius: 40.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub layout: LayoutConfig,
    pub scale: ScaleConfig,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            layout: LayoutConfig::default(),
            scale: ScaleConfig::default(),
            window_size: [1280.0, 800.0],
        }
    }
}

impl DashboardConfig {
    pub fn with_dataset(mut self, location: impl Into<String>) -> Self {
        self.data = self.data.with_dataset(location);
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_marker_geometry() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.spiral_min_radius, 5.0);
        assert_eq!(layout.spiral_max_radius, 15.0);
        assert_eq!(layout.spiral_jitter, 1.5);
        assert!(layout.seed.is_none());

        let scale = ScaleConfig::default();
        assert!(scale.min_radius < scale.max_radius);
    }

    #[test]
    fn builder_overrides() {
        let cfg = DashboardConfig::default()
            .with_dataset("https://example.com/companies.csv")
            .with_layout(LayoutConfig::default().with_seed(7).without_jitter());
        assert_eq!(cfg.data.dataset, "https://example.com/companies.csv");
        assert_eq!(cfg.layout.seed, Some(7));
        assert_eq!(cfg.layout.single_jitter, 0.0);
        assert_eq!(cfg.data.boundaries, WORLD_ATLAS_URL);
    }
}
