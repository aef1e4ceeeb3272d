//! Background loading for `DashboardApp`.
//!
//! The dataset and the world boundaries are fetched on their own threads;
//! each delivers exactly one result over a channel that `check_loads` polls
//! once per frame.

use std::sync::mpsc::{self, TryRecvError};
use eframe::egui;

use robotics_atlas::data::Dataset;
use robotics_atlas::engine::pipeline::DashboardEngine;
use robotics_atlas::error::LoadError;
use robotics_atlas::geo::topology::load_boundaries;

use super::DashboardApp;

impl DashboardApp {
    /// Kick off both fetches. Called once from the creation context.
    pub fn start_loads(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel();
        self.dataset_rx = Some(rx);
        let data = self.config.data.clone();
        let repaint = ctx.clone();
        std::thread::spawn(move || {
            let dataset = DashboardEngine::load(&data);
            // Receiver gone means the window closed; nothing to do
            let _ = tx.send(dataset);
            repaint.request_repaint();
        });

        let (tx, rx) = mpsc::channel();
        self.boundaries_rx = Some(rx);
        let data = self.config.data.clone();
        let repaint = ctx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(load_boundaries(&data));
            repaint.request_repaint();
        });
    }

    /// Poll both channels and fold any arrived result into app state.
    /// A worker that exits without sending counts as a failed load.
    pub fn check_loads(&mut self) {
        if let Some(rx) = &self.dataset_rx {
            let dataset = match rx.try_recv() {
                Ok(dataset) => Some(dataset),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Dataset loader exited without a result; using embedded data");
                    Some(Dataset::fallback("[fetch] loader thread exited"))
                }
            };
            if let Some(dataset) = dataset {
                self.dataset_rx = None;
                let next = self.state.with_dataset(dataset);
                self.set_state(next);
            }
        }

        if let Some(rx) = &self.boundaries_rx {
            let result = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(LoadError::Topology(
                    "boundary loader exited without a result".into(),
                ))),
            };
            if let Some(result) = result {
                self.boundaries_rx = None;
                match result {
                    Ok(world) => {
                        self.boundaries = Some(world);
                        self.boundary_error = None;
                    }
                    Err(e) => {
                        log::warn!(
                            "World boundaries unavailable [{}]: {}; drawing graticule only",
                            e.phase(),
                            e
                        );
                        self.boundary_error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
