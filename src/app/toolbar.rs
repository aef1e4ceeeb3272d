//! Toolbar rendering for `DashboardApp`.
//!
//! Draws the category, product-group and country selectors, the map/matrix
//! view toggle, the stats toggle and the dark-mode toggle. Every control
//! produces a new `AppState`; nothing here mutates the selection in place.

use eframe::egui;

use robotics_atlas::data::Category;
use robotics_atlas::engine::state::AppState;
use robotics_atlas::pipeline::filter::{
    observed_countries, product_group_options, CategoryFilter, GroupFilter,
};

use super::DashboardApp;

impl DashboardApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        let state = &self.state;
        let mut next: Option<AppState> = None;

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.strong("Robotics Atlas");
            ui.separator();

            // Category
            let mut category = state.selection.category;
            egui::ComboBox::from_id_salt("category")
                .selected_text(category.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut category, CategoryFilter::All, CategoryFilter::All.label());
                    for c in Category::ALL {
                        ui.selectable_value(&mut category, CategoryFilter::Only(c), c.as_str());
                    }
                });
            if category != state.selection.category {
                next = Some(state.select_category(category));
            }

            // Product group: options narrow with category and countries
            let options = product_group_options(
                &state.dataset.records,
                state.selection.category,
                &state.selection.countries,
            );
            let mut group = state.selection.product_group.clone();
            egui::ComboBox::from_id_salt("product_group")
                .selected_text(group.label().to_string())
                .width(180.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut group, GroupFilter::All, GroupFilter::All.label());
                    for option in &options {
                        ui.selectable_value(&mut group, GroupFilter::Only(option.clone()), option);
                    }
                });
            if group != state.selection.product_group {
                next = Some(state.select_product_group(group));
            }

            // Countries: multi-select with toggle semantics
            let countries = &state.selection.countries;
            ui.menu_button(format!("{} \u{25BE}", countries.label()), |ui| {
                if ui.selectable_label(countries.is_all(), "All Countries").clicked() {
                    next = Some(state.toggle_country(None));
                }
                ui.separator();
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for country in observed_countries(&state.dataset.records) {
                        if ui
                            .selectable_label(countries.is_selected(&country), &country)
                            .clicked()
                        {
                            next = Some(state.toggle_country(Some(&country)));
                        }
                    }
                });
            });

            ui.separator();

            let target = state.view.toggle();
            if ui.button(format!("Show {}", target.label())).clicked() {
                next = Some(state.toggle_view());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Dark mode toggle
                let dark_label = if state.dark_mode { "\u{263E}" } else { "\u{2600}" };
                if ui.button(dark_label).clicked() {
                    next = Some(state.toggle_theme());
                }
                ui.toggle_value(&mut self.show_stats, "Stats");
            });
        });

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.weak(self.state.selection.category.description());
        });

        if let Some(next) = next {
            self.set_state(next);
        }
    }
}
