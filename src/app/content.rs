//! Content-area rendering for `DashboardApp`.
//!
//! - `draw_notice`: dismissible fallback-data banner
//! - `draw_content`: spinner, empty state, map or pivot table
//! - `draw_stats_panel`: right-side dataset / view statistics

use eframe::egui;

use robotics_atlas::data::{Category, DataSource};
use robotics_atlas::engine::pipeline::DashboardView;
use robotics_atlas::pipeline::filter::observed_countries;
use robotics_atlas::render::table::paint_table;
use robotics_atlas::render::{category_color, Theme};

use super::DashboardApp;

impl DashboardApp {
    pub fn draw_notice(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = &self.state.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(254, 243, 199))
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(146, 64, 14), &notice.message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("\u{2715}").clicked();
                    });
                });
            });
        if dismissed {
            let next = self.state.dismiss_notice();
            self.set_state(next);
        }
    }

    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if self.is_loading() && self.state.dataset.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading company data…");
                });
            });
            return;
        }

        let theme = Theme::for_mode(self.state.dark_mode);
        let engine = &self.engine;
        let state = &self.state;
        let view = self.view.get_or_insert_with(|| engine.compute(state));

        match view {
            DashboardView::Empty => {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(theme.muted_text, "No data for this selection");
                });
            }
            DashboardView::Map(map) => {
                if self.boundaries_rx.is_some() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("Loading world map…");
                    });
                }
                self.map_painter
                    .paint(ui, map, self.boundaries.as_ref(), &theme);
            }
            DashboardView::Table(table) => paint_table(ui, table, &theme),
        }
    }

    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        let dataset = &self.state.dataset;

        ui.heading("Dataset");
        ui.separator();
        match &dataset.source {
            DataSource::Primary { location } if !location.is_empty() => {
                ui.label(format!("Source: {}", location));
            }
            DataSource::Primary { .. } => {
                ui.weak("Source: loading");
            }
            DataSource::Fallback { reason } => {
                ui.colored_label(egui::Color32::from_rgb(255, 160, 0), "Source: built-in sample");
                ui.weak(reason);
            }
        }
        ui.label(format!("Records: {}", dataset.len()));
        ui.label(format!("Countries: {}", observed_countries(&dataset.records).len()));

        ui.separator();
        ui.heading("View");
        match &self.view {
            Some(DashboardView::Map(map)) => {
                ui.label(format!("Companies on map: {}", map.bubbles.len()));
                if map.dropped > 0 {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 80, 80),
                        format!("Without coordinates: {}", map.dropped),
                    );
                }
            }
            Some(DashboardView::Table(table)) => {
                ui.label(format!("Product groups: {}", table.rows.len()));
                ui.label(format!("Countries: {}", table.columns.len()));
                ui.label(format!("Empty cells: {}", table.gap_count()));
            }
            Some(DashboardView::Empty) => {
                ui.weak("No matching records");
            }
            None => {}
        }

        ui.separator();
        ui.heading("Categories");
        for category in Category::ALL {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 6.0, category_color(category));
                ui.label(category.as_str());
            });
            ui.weak(category.description());
        }

        ui.separator();
        ui.heading("World map");
        if self.boundaries_rx.is_some() {
            ui.weak("Loading…");
        } else if let Some(world) = &self.boundaries {
            ui.label(format!("Country shapes: {}", world.shapes.len()));
        } else if let Some(error) = &self.boundary_error {
            ui.colored_label(egui::Color32::from_rgb(255, 160, 0), "Outline only");
            ui.weak(error);
        }
    }
}
