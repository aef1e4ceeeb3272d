//! egui presentation: the bubble map, the pivot table and shared styling.

pub mod map;
pub mod table;

use egui::Color32;

use crate::data::Category;
use crate::pipeline::aggregate::AggregatedEntity;

/// Width of the canvas bubble radii are expressed against.
pub const REFERENCE_WIDTH: f32 = 960.0;

/// Colours for one appearance mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub page_bg: Color32,
    pub ocean: Color32,
    pub land_stroke: Color32,
    pub graticule: Color32,
    pub text_color: Color32,
    pub muted_text: Color32,
    pub bubble_stroke: Color32,
    pub highlight: Color32,
    pub cell_bg: Color32,
    pub gap_bg: Color32,
    pub gap_text: Color32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            page_bg: Color32::from_rgb(250, 250, 252),
            ocean: Color32::from_rgb(232, 240, 248),
            land_stroke: Color32::from_rgb(190, 190, 198),
            graticule: Color32::from_rgb(210, 214, 222),
            text_color: Color32::from_rgb(38, 38, 46),
            muted_text: Color32::from_rgb(120, 120, 130),
            bubble_stroke: Color32::WHITE,
            highlight: Color32::from_rgb(25, 25, 38),
            cell_bg: Color32::from_rgb(219, 234, 254),
            gap_bg: Color32::from_rgb(254, 242, 242),
            gap_text: Color32::from_rgb(185, 28, 28),
        }
    }

    pub fn dark() -> Self {
        Self {
            page_bg: Color32::from_rgb(24, 24, 30),
            ocean: Color32::from_rgb(28, 34, 46),
            land_stroke: Color32::from_rgb(80, 80, 92),
            graticule: Color32::from_rgb(48, 54, 66),
            text_color: Color32::from_rgb(200, 200, 210),
            muted_text: Color32::from_rgb(140, 140, 150),
            bubble_stroke: Color32::from_rgb(24, 24, 30),
            highlight: Color32::from_rgb(230, 230, 240),
            cell_bg: Color32::from_rgb(30, 58, 98),
            gap_bg: Color32::from_rgb(60, 28, 32),
            gap_text: Color32::from_rgb(252, 165, 165),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Brain => Color32::from_rgb(0xdc, 0x26, 0x26),
        Category::Body => Color32::from_rgb(0x16, 0xa3, 0x4a),
        Category::Integrator => Color32::from_rgb(0xca, 0x8a, 0x04),
    }
}

/// Market cap in millions as `$2.9T`, `$164.5B` or `$250M`.
pub fn format_market_cap(millions: f64) -> String {
    if !millions.is_finite() {
        return "n/a".to_string();
    }
    if millions >= 1_000_000.0 {
        format!("${:.1}T", millions / 1_000_000.0)
    } else if millions >= 1_000.0 {
        format!("${:.1}B", millions / 1_000.0)
    } else {
        format!("${:.0}M", millions)
    }
}

/// Label/value rows shown in a bubble's hover card.
pub fn tooltip_rows(entity: &AggregatedEntity) -> Vec<(&'static str, String)> {
    let categories = if entity.categories.len() > 1 {
        "Categories"
    } else {
        "Category"
    };
    vec![
        ("Country", entity.country.clone()),
        ("Market Cap", format_market_cap(entity.market_cap_millions)),
        (categories, entity.categories_label()),
        ("Product Groups", entity.product_groups_label()),
        ("Products", entity.products_label()),
    ]
}

pub(crate) fn with_alpha(c: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}
