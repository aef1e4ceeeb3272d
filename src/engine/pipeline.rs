use crate::config::{DashboardConfig, DataConfig, LayoutConfig, ScaleConfig};
use crate::data::loader::load_dataset;
use crate::data::{CompanyProductRecord, Dataset};
use crate::geo::{CountryTable, GeoPoint};
use crate::pipeline::aggregate::{aggregate, AggregatedEntity};
use crate::pipeline::filter::filter;
use crate::pipeline::jitter::{self, Jitter};
use crate::pipeline::layout::layout;
use crate::pipeline::pivot::{pivot, PivotTable};
use crate::pipeline::scale::RadiusScale;

use super::state::{AppState, ViewMode};

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub entity: AggregatedEntity,
    pub position: GeoPoint,
    /// Radius in reference pixels (960px-wide map).
    pub radius: f64,
}

#[derive(Debug, Clone)]
pub struct MapView {
    pub bubbles: Vec<Bubble>,
    pub scale: RadiusScale,
    /// Entities left off the map for lack of country coordinates.
    pub dropped: usize,
}

impl MapView {
    /// Topmost bubble accepted by `contains`. Smallest radius wins, matching
    /// paint order.
    pub fn hit<F>(&self, mut contains: F) -> Option<&Bubble>
    where
        F: FnMut(&Bubble) -> bool,
    {
        self.bubbles
            .iter()
            .filter(|b| contains(*b))
            .min_by(|a, b| a.radius.total_cmp(&b.radius))
    }
}

/// What the content area shows for a given state.
#[derive(Debug, Clone)]
pub enum DashboardView {
    /// The filters exclude every record.
    Empty,
    Map(MapView),
    Table(PivotTable),
}

/// Filter → Aggregate → Layout → Scale, or Filter → Pivot for the table.
pub struct DashboardEngine {
    countries: CountryTable,
    layout: LayoutConfig,
    scale: ScaleConfig,
}

impl DashboardEngine {
    pub fn new() -> Self {
        Self {
            countries: CountryTable::builtin(),
            layout: LayoutConfig::default(),
            scale: ScaleConfig::default(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new()
            .with_layout(config.layout.clone())
            .with_scale(config.scale)
    }

    pub fn with_countries(mut self, countries: CountryTable) -> Self {
        self.countries = countries;
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

    /// Load the configured dataset, substituting the built-in one on failure.
    pub fn load(config: &DataConfig) -> Dataset {
        load_dataset(config)
    }

    /// Derive the view for `state`. Randomness comes from the configured seed,
    /// or the thread RNG when none is set.
    pub fn compute(&self, state: &AppState) -> DashboardView {
        let mut jitter = jitter::from_seed(self.layout.seed);
        self.compute_with(state, jitter.as_mut())
    }

    pub fn compute_with(&self, state: &AppState, jitter: &mut dyn Jitter) -> DashboardView {
        let rows = filter(&state.dataset.records, &state.selection);
        if rows.is_empty() {
            log::debug!("No records match the current selection");
            return DashboardView::Empty;
        }

        match state.view {
            ViewMode::Table => {
                let table = pivot(rows.iter().copied(), &state.selection.countries);
                log::debug!(
                    "Pivot: {} groups x {} countries, {} gaps",
                    table.rows.len(),
                    table.columns.len(),
                    table.gap_count()
                );
                DashboardView::Table(table)
            }
            ViewMode::Map => DashboardView::Map(self.map_view(rows.iter().copied(), jitter)),
        }
    }

    fn map_view<'a>(
        &self,
        rows: impl IntoIterator<Item = &'a CompanyProductRecord>,
        jitter: &mut dyn Jitter,
    ) -> MapView {
        let entities = aggregate(rows);
        let placed = layout(entities, &self.countries, &self.layout, jitter);
        let scale = RadiusScale::fit(
            placed.placed.iter().map(|p| p.entity.market_cap_millions),
            &self.scale,
        );

        let mut bubbles: Vec<Bubble> = placed
            .placed
            .into_iter()
            .map(|p| Bubble {
                radius: scale.radius(p.entity.market_cap_millions),
                position: p.position,
                entity: p.entity,
            })
            .collect();
        // Paint order: large first so small bubbles stay on top
        bubbles.sort_by(|a, b| b.radius.total_cmp(&a.radius));

        MapView {
            bubbles,
            scale,
            dropped: placed.dropped.len(),
        }
    }
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::new()
    }
}
