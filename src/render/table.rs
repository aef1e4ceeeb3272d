//! Pivot table: product groups down, countries across.

use egui::RichText;

use super::Theme;
use crate::pipeline::pivot::{PivotCell, PivotTable};

pub const GAP_LABEL: &str = "No companies";

pub fn paint_table(ui: &mut egui::Ui, table: &PivotTable, theme: &Theme) {
    if table.is_empty() {
        ui.colored_label(theme.muted_text, "No product groups for this selection");
        return;
    }

    ui.label(
        RichText::new(format!(
            "{} product groups × {} countries · {} gaps",
            table.rows.len(),
            table.columns.len(),
            table.gap_count()
        ))
        .color(theme.muted_text),
    );
    ui.add_space(6.0);

    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("pivot_table")
            .striped(true)
            .min_col_width(72.0)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Product Group");
                for column in &table.columns {
                    ui.strong(format!("{} ({})", column.country, column.total));
                }
                ui.end_row();

                for (r, group) in table.rows.iter().enumerate() {
                    ui.label(group);
                    for c in 0..table.columns.len() {
                        cell(ui, table.cell(r, c), theme);
                    }
                    ui.end_row();
                }
            });
    });
}

fn cell(ui: &mut egui::Ui, value: PivotCell, theme: &Theme) {
    let (fill, text) = match value {
        PivotCell::Gap => (
            theme.gap_bg,
            RichText::new(GAP_LABEL).color(theme.gap_text).italics(),
        ),
        PivotCell::Count(n) => (
            theme.cell_bg,
            RichText::new(n.to_string()).color(theme.text_color).strong(),
        ),
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(3.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
