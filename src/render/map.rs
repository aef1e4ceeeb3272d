//! Painter-drawn bubble map.
//!
//! Boundaries, graticule and bubbles are drawn directly with `egui::Painter`
//! in an equirectangular projection fitted to the allocated rect. Bubble
//! radii come from the engine in reference pixels and are rescaled to the
//! actual canvas width.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Shape, Stroke, Vec2};

use super::{category_color, format_market_cap, tooltip_rows, with_alpha, Theme, REFERENCE_WIDTH};
use crate::engine::pipeline::{Bubble, MapView};
use crate::geo::projection::{graticule, sphere_outline, Projection};
use crate::geo::topology::WorldBoundaries;
use crate::geo::GeoPoint;

/// Only this many of the largest bubbles get a name label.
const LABELLED_BUBBLES: usize = 8;

pub struct MapPainter {
    hovered: Option<(String, String)>,
}

impl MapPainter {
    pub fn new() -> Self {
        Self { hovered: None }
    }

    /// Draw `view` into the remaining space of `ui`. `boundaries` is `None`
    /// while loading or after a failed boundary fetch; the globe outline and
    /// graticule stand in for it.
    pub fn paint(
        &mut self,
        ui: &mut egui::Ui,
        view: &MapView,
        boundaries: Option<&WorldBoundaries>,
        theme: &Theme,
    ) {
        let size = ui.available_size().max(Vec2::new(320.0, 200.0));
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, Rounding::ZERO, theme.page_bg);

        let projection = match boundaries.and_then(WorldBoundaries::bounds) {
            Some((min, max)) => Projection::fit(min, max, rect.width() as f64, rect.height() as f64),
            None => Projection::fit_world(rect.width() as f64, rect.height() as f64),
        };
        let to_screen = |p: GeoPoint| -> Pos2 {
            let [x, y] = projection.project(p);
            rect.min + Vec2::new(x as f32, y as f32)
        };

        match boundaries {
            Some(world) => {
                let stroke = Stroke::new(0.6, theme.land_stroke);
                for shape in &world.shapes {
                    for ring in &shape.rings {
                        let points: Vec<Pos2> = ring.iter().map(|p| to_screen(*p)).collect();
                        if points.len() > 2 {
                            painter.add(Shape::closed_line(points, stroke));
                        }
                    }
                }
            }
            None => {
                let outline: Vec<Pos2> = sphere_outline().into_iter().map(to_screen).collect();
                painter.add(Shape::convex_polygon(
                    outline,
                    theme.ocean,
                    Stroke::new(1.0, theme.land_stroke),
                ));
                let stroke = Stroke::new(0.5, theme.graticule);
                for line in graticule(30.0) {
                    let points: Vec<Pos2> = line.into_iter().map(to_screen).collect();
                    painter.add(Shape::line(points, stroke));
                }
            }
        }

        let factor = rect.width() / REFERENCE_WIDTH;
        let screen_radius = |b: &Bubble| (b.radius as f32 * factor).max(2.0);

        let hovered = response.hover_pos().and_then(|pos| {
            view.hit(|b| to_screen(b.position).distance(pos) <= screen_radius(b))
        });
        self.hovered = hovered.map(|b| (b.entity.company.clone(), b.entity.country.clone()));

        // Bubbles arrive largest first
        for bubble in &view.bubbles {
            let center = to_screen(bubble.position);
            let is_hovered = self.is_hovered(bubble);
            let base = category_color(bubble.entity.primary_category);
            let fill = with_alpha(base, if is_hovered { 235 } else { 180 });
            let stroke = if is_hovered {
                Stroke::new(2.0, theme.highlight)
            } else {
                Stroke::new(1.0, theme.bubble_stroke)
            };
            painter.circle(center, screen_radius(bubble), fill, stroke);
        }

        for bubble in view.bubbles.iter().take(LABELLED_BUBBLES) {
            let center = to_screen(bubble.position);
            painter.text(
                center + Vec2::new(0.0, screen_radius(bubble) + 2.0),
                Align2::CENTER_TOP,
                &bubble.entity.company,
                FontId::proportional(11.0),
                theme.text_color,
            );
        }

        paint_legend(&painter, rect, view, factor, theme);

        if view.dropped > 0 {
            painter.text(
                rect.right_bottom() + Vec2::new(-8.0, -8.0),
                Align2::RIGHT_BOTTOM,
                format!("{} not shown: unknown location", view.dropped),
                FontId::proportional(11.0),
                theme.muted_text,
            );
        }

        if let Some(bubble) = hovered {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            response.on_hover_ui_at_pointer(|ui| {
                ui.strong(&bubble.entity.company);
                egui::Grid::new("bubble_tooltip").num_columns(2).show(ui, |ui| {
                    for (label, value) in tooltip_rows(&bubble.entity) {
                        ui.label(egui::RichText::new(label).color(Color32::GRAY));
                        ui.label(value);
                        ui.end_row();
                    }
                });
            });
        }
    }

    fn is_hovered(&self, bubble: &Bubble) -> bool {
        self.hovered
            .as_ref()
            .map_or(false, |(company, country)| {
                *company == bubble.entity.company && *country == bubble.entity.country
            })
    }
}

impl Default for MapPainter {
    fn default() -> Self {
        Self::new()
    }
}

/// Three nested reference circles (min, mid, max) in the bottom-left corner.
fn paint_legend(painter: &egui::Painter, rect: Rect, view: &MapView, factor: f32, theme: &Theme) {
    let Some(values) = view.scale.legend_values() else {
        return;
    };
    let (_, max_r) = view.scale.range();
    let max_r = max_r as f32 * factor;
    let base = rect.left_bottom() + Vec2::new(16.0 + max_r, -28.0);

    painter.text(
        base + Vec2::new(-max_r, -2.0 * max_r - 8.0),
        Align2::LEFT_BOTTOM,
        "Market Cap",
        FontId::proportional(11.0),
        theme.muted_text,
    );

    let stroke = Stroke::new(1.0, theme.muted_text);
    for value in values {
        let r = view.scale.radius(value) as f32 * factor;
        let center = base - Vec2::new(0.0, r);
        painter.circle_stroke(center, r, stroke);
        let label_y = base.y - 2.0 * r;
        painter.line_segment(
            [Pos2::new(base.x, label_y), Pos2::new(base.x + max_r + 8.0, label_y)],
            Stroke::new(0.5, theme.muted_text),
        );
        painter.text(
            Pos2::new(base.x + max_r + 10.0, label_y),
            Align2::LEFT_CENTER,
            format_market_cap(value),
            FontId::proportional(10.0),
            theme.text_color,
        );
    }
}
