//! Filter engine: reduces the record set to the rows matching the current
//! category, product-group and country selections.
//!
//! The three predicates are independent equality/membership tests joined by
//! AND, so the order they run in does not matter.

use std::collections::BTreeSet;

use crate::data::{Category, CompanyProductRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CategoryFilter::All => "All robotics companies across categories",
            CategoryFilter::Only(c) => c.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(String),
}

impl GroupFilter {
    pub fn matches(&self, group: &str) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(g) => g == group,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GroupFilter::All => "All Product Groups",
            GroupFilter::Only(g) => g,
        }
    }
}

/// Country picker state: the `All` sentinel or a non-empty set of names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountrySelection {
    #[default]
    All,
    Some(BTreeSet<String>),
}

impl CountrySelection {
    /// Build from names; an empty list means `All`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if set.is_empty() {
            CountrySelection::All
        } else {
            CountrySelection::Some(set)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CountrySelection::All)
    }

    pub fn contains(&self, country: &str) -> bool {
        match self {
            CountrySelection::All => true,
            CountrySelection::Some(set) => set.contains(country),
        }
    }

    /// Whether `country` is individually ticked (never true under `All`).
    pub fn is_selected(&self, country: &str) -> bool {
        match self {
            CountrySelection::All => false,
            CountrySelection::Some(set) => set.contains(country),
        }
    }

    pub fn selected(&self) -> Option<&BTreeSet<String>> {
        match self {
            CountrySelection::All => None,
            CountrySelection::Some(set) => Some(set),
        }
    }

    /// Picker toggle: an individual pick leaves `All` and flips membership;
    /// removing the last remaining country reverts to `All`.
    #[must_use]
    pub fn toggle(&self, country: &str) -> Self {
        match self {
            CountrySelection::All => CountrySelection::from_names([country]),
            CountrySelection::Some(set) => {
                let mut set = set.clone();
                if !set.remove(country) {
                    set.insert(country.to_string());
                }
                CountrySelection::from_names(set)
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            CountrySelection::All => "All Countries".to_string(),
            CountrySelection::Some(set) if set.len() == 1 => {
                set.iter().next().cloned().unwrap_or_default()
            }
            CountrySelection::Some(set) => format!("{} countries", set.len()),
        }
    }
}

/// The user's current filter choices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub product_group: GroupFilter,
    pub countries: CountrySelection,
}

impl FilterSelection {
    pub fn matches(&self, record: &CompanyProductRecord) -> bool {
        self.category.matches(record.category)
            && self.product_group.matches(&record.product_group)
            && self.countries.contains(&record.country)
    }

    /// Reset the product group to `All` when it is no longer offered under
    /// the current category and country choices.
    #[must_use]
    pub fn normalize(mut self, records: &[CompanyProductRecord]) -> Self {
        if let GroupFilter::Only(group) = &self.product_group {
            let options = product_group_options(records, self.category, &self.countries);
            if !options.iter().any(|g| g == group) {
                log::debug!("Product group `{}` no longer available; resetting", group);
                self.product_group = GroupFilter::All;
            }
        }
        self
    }
}

/// Rows matching every predicate of `selection`, in input order.
pub fn filter<'a>(
    records: &'a [CompanyProductRecord],
    selection: &FilterSelection,
) -> Vec<&'a CompanyProductRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Product groups on offer under the given category and country choices.
pub fn product_group_options(
    records: &[CompanyProductRecord],
    category: CategoryFilter,
    countries: &CountrySelection,
) -> Vec<String> {
    records
        .iter()
        .filter(|r| category.matches(r.category) && countries.contains(&r.country))
        .filter(|r| !r.product_group.is_empty())
        .map(|r| r.product_group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every country in the dataset, sorted.
pub fn observed_countries(records: &[CompanyProductRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category::{Body, Brain, Integrator};

    fn rec(company: &str, country: &str, cat: Category, group: &str) -> CompanyProductRecord {
        CompanyProductRecord::new(company, country, 100.0, cat, "p", group)
    }

    fn sample() -> Vec<CompanyProductRecord> {
        vec![
            rec("Siemens", "Germany", Brain, "Sensors"),
            rec("Fanuc", "Japan", Integrator, "Robots"),
            rec("Nidec", "Japan", Body, "Motion"),
            rec("Tesla", "USA", Integrator, "Robots"),
            rec("Tesla", "USA", Body, "Power"),
        ]
    }

    #[test]
    fn all_selection_keeps_everything() {
        let records = sample();
        let out = filter(&records, &FilterSelection::default());
        assert_eq!(out.len(), records.len());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let records = sample();
        let sel = FilterSelection {
            category: CategoryFilter::Only(Integrator),
            product_group: GroupFilter::Only("Robots".into()),
            countries: CountrySelection::from_names(["Japan"]),
        };
        let out = filter(&records, &sel);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Fanuc");

        // Exhaustive check against the predicate definition
        for r in &records {
            let expected = r.category == Integrator
                && r.product_group == "Robots"
                && r.country == "Japan";
            assert_eq!(out.iter().any(|o| std::ptr::eq(*o, r)), expected);
        }
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let records = sample();
        let sel = FilterSelection {
            category: CategoryFilter::Only(Brain),
            countries: CountrySelection::from_names(["USA"]),
            ..Default::default()
        };
        assert!(filter(&records, &sel).is_empty());
    }

    #[test]
    fn country_toggle_semantics() {
        let all = CountrySelection::All;
        let japan = all.toggle("Japan");
        assert_eq!(japan, CountrySelection::from_names(["Japan"]));
        assert!(!japan.is_all());

        let two = japan.toggle("USA");
        assert_eq!(two.selected().map(|s| s.len()), Some(2));
        assert_eq!(two.label(), "2 countries");

        let back = two.toggle("Japan");
        assert_eq!(back, CountrySelection::from_names(["USA"]));
        assert_eq!(back.label(), "USA");

        // removing the last one reverts to All
        assert!(back.toggle("USA").is_all());
        assert!(CountrySelection::from_names(Vec::<String>::new()).is_all());
    }

    #[test]
    fn all_contains_everything_but_selects_nothing() {
        let all = CountrySelection::All;
        assert!(all.contains("Atlantis"));
        assert!(!all.is_selected("Atlantis"));
    }

    #[test]
    fn group_options_follow_other_filters() {
        let records = sample();
        let opts = product_group_options(&records, CategoryFilter::Only(Integrator), &CountrySelection::All);
        assert_eq!(opts, vec!["Robots".to_string()]);

        let opts = product_group_options(
            &records,
            CategoryFilter::All,
            &CountrySelection::from_names(["USA"]),
        );
        assert_eq!(opts, vec!["Power".to_string(), "Robots".to_string()]);
    }

    #[test]
    fn normalize_resets_unavailable_group() {
        let records = sample();
        let sel = FilterSelection {
            category: CategoryFilter::Only(Brain),
            product_group: GroupFilter::Only("Robots".into()),
            countries: CountrySelection::All,
        }
        .normalize(&records);
        assert_eq!(sel.product_group, GroupFilter::All);

        let kept = FilterSelection {
            product_group: GroupFilter::Only("Robots".into()),
            ..Default::default()
        }
        .normalize(&records);
        assert_eq!(kept.product_group, GroupFilter::Only("Robots".into()));
    }

    #[test]
    fn observed_countries_sorted_unique() {
        assert_eq!(observed_countries(&sample()), vec!["Germany", "Japan", "USA"]);
    }
}
