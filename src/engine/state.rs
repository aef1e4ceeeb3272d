//! Application state as an immutable value.
//!
//! Every user action produces a new `AppState`; the previous one is never
//! mutated, so a render always sees a consistent (dataset, selection, view)
//! triple.

use std::sync::Arc;

use crate::data::{DataSource, Dataset};
use crate::pipeline::filter::{CategoryFilter, FilterSelection, GroupFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Map,
    Table,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Map => ViewMode::Table,
            ViewMode::Table => ViewMode::Map,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Map => "Map",
            ViewMode::Table => "Matrix",
        }
    }
}

/// A dismissible banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub selection: FilterSelection,
    pub view: ViewMode,
    pub dark_mode: bool,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            selection: FilterSelection::default(),
            view: ViewMode::default(),
            dark_mode: false,
            notice: None,
        }
        .with_notice_for_source()
    }

    /// Swap in a freshly loaded dataset. The selection is re-validated
    /// against the new records.
    #[must_use]
    pub fn with_dataset(&self, dataset: Dataset) -> Self {
        let selection = self.selection.clone().normalize(&dataset.records);
        Self {
            dataset: Arc::new(dataset),
            selection,
            notice: None,
            ..self.clone()
        }
        .with_notice_for_source()
    }

    fn with_notice_for_source(mut self) -> Self {
        if let DataSource::Fallback { reason } = &self.dataset.source {
            self.notice = Some(Notice {
                message: format!(
                    "Could not load the company dataset ({}). Showing built-in sample data.",
                    reason
                ),
            });
        }
        self
    }

    #[must_use]
    pub fn select_category(&self, category: CategoryFilter) -> Self {
        let mut next = self.clone();
        next.selection.category = category;
        next.selection = next.selection.normalize(&next.dataset.records);
        next
    }

    #[must_use]
    pub fn select_product_group(&self, group: GroupFilter) -> Self {
        let mut next = self.clone();
        next.selection.product_group = group;
        next
    }

    /// Flip one country in the picker; `None` selects "All Countries".
    #[must_use]
    pub fn toggle_country(&self, country: Option<&str>) -> Self {
        let mut next = self.clone();
        next.selection.countries = match country {
            Some(name) => self.selection.countries.toggle(name),
            None => Default::default(),
        };
        next.selection = next.selection.normalize(&next.dataset.records);
        next
    }

    #[must_use]
    pub fn toggle_view(&self) -> Self {
        Self {
            view: self.view.toggle(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn toggle_theme(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn dismiss_notice(&self) -> Self {
        Self {
            notice: None,
            ..self.clone()
        }
    }
}

impl Default for AppState {
    /// Empty primary dataset, used before the first load completes.
    fn default() -> Self {
        Self::new(Dataset::primary(Vec::new(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, CompanyProductRecord};
    use crate::pipeline::filter::CountrySelection;

    fn dataset() -> Dataset {
        Dataset::primary(
            vec![
                CompanyProductRecord::new("Fanuc", "Japan", 30.0, Category::Integrator, "Arms", "Robots"),
                CompanyProductRecord::new("Sony", "Japan", 90.0, Category::Brain, "CMOS", "Sensors"),
                CompanyProductRecord::new("Nvidia", "USA", 2_900.0, Category::Brain, "Jetson", "Compute"),
            ],
            "test.csv",
        )
    }

    #[test]
    fn view_toggle_keeps_selection() {
        let state = AppState::new(dataset())
            .select_category(CategoryFilter::Only(Category::Brain))
            .toggle_country(Some("Japan"));
        let toggled = state.toggle_view();
        assert_eq!(toggled.view, ViewMode::Table);
        assert_eq!(toggled.selection, state.selection);
        assert_eq!(toggled.toggle_view().view, ViewMode::Map);
    }

    #[test]
    fn transitions_do_not_mutate_previous_state() {
        let state = AppState::new(dataset());
        let next = state.select_category(CategoryFilter::Only(Category::Body));
        assert_eq!(state.selection.category, CategoryFilter::All);
        assert_eq!(next.selection.category, CategoryFilter::Only(Category::Body));
        assert!(Arc::ptr_eq(&state.dataset, &next.dataset));
    }

    #[test]
    fn category_change_resets_unavailable_group() {
        let state = AppState::new(dataset())
            .select_product_group(GroupFilter::Only("Robots".into()))
            .select_category(CategoryFilter::Only(Category::Brain));
        assert_eq!(state.selection.product_group, GroupFilter::All);
    }

    #[test]
    fn country_toggle_and_reset() {
        let state = AppState::new(dataset()).toggle_country(Some("USA"));
        assert_eq!(state.selection.countries, CountrySelection::from_names(["USA"]));
        let state = state.toggle_country(Some("USA"));
        assert!(state.selection.countries.is_all());
        let state = state.toggle_country(Some("Japan")).toggle_country(None);
        assert!(state.selection.countries.is_all());
    }

    #[test]
    fn fallback_dataset_raises_dismissible_notice() {
        let state = AppState::new(Dataset::fallback("[fetch] connection refused"));
        let notice = state.notice.clone().expect("notice");
        assert!(notice.message.contains("connection refused"));
        assert!(state.dismiss_notice().notice.is_none());

        let primary = state.with_dataset(dataset());
        assert!(primary.notice.is_none());
    }

    #[test]
    fn theme_toggle() {
        let state = AppState::default();
        assert!(!state.dark_mode);
        assert!(state.toggle_theme().dark_mode);
    }
}
