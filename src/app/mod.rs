//! `DashboardApp`: the top-level egui application state.
//!
//! This module declares the `DashboardApp` struct and its constructor.
//! Methods are split across the sibling sub-modules:
//!
//! - `loading`: background dataset / boundary fetches
//! - `toolbar`: filter selectors, view and theme toggles
//! - `content`: notice banner, map / table area, stats panel

pub mod loading;
pub mod toolbar;
pub mod content;

use std::sync::mpsc;

use robotics_atlas::config::DashboardConfig;
use robotics_atlas::data::Dataset;
use robotics_atlas::engine::pipeline::{DashboardEngine, DashboardView};
use robotics_atlas::engine::state::AppState;
use robotics_atlas::error::LoadError;
use robotics_atlas::geo::topology::WorldBoundaries;
use robotics_atlas::render::map::MapPainter;

// ─── Application state ───────────────────────────────────────────────────────

pub struct DashboardApp {
    pub config: DashboardConfig,
    pub engine: DashboardEngine,
    pub state: AppState,
    /// Derived view for `state`; cleared on every transition.
    pub view: Option<DashboardView>,
    pub dataset_rx: Option<mpsc::Receiver<Dataset>>,
    pub boundaries_rx: Option<mpsc::Receiver<Result<WorldBoundaries, LoadError>>>,
    pub boundaries: Option<WorldBoundaries>,
    pub boundary_error: Option<String>,
    pub map_painter: MapPainter,
    pub show_stats: bool,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            engine: DashboardEngine::from_config(&config),
            config,
            state: AppState::default(),
            view: None,
            dataset_rx: None,
            boundaries_rx: None,
            boundaries: None,
            boundary_error: None,
            map_painter: MapPainter::new(),
            show_stats: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.dataset_rx.is_some()
    }

    /// Recompute the derived view if a transition cleared it.
    pub fn ensure_view(&mut self) {
        if self.view.is_none() {
            self.view = Some(self.engine.compute(&self.state));
        }
    }

    /// Replace the state and invalidate the derived view.
    pub fn set_state(&mut self, next: AppState) {
        self.state = next;
        self.view = None;
    }
}
