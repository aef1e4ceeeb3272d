//! Pivot counter: distinct companies per (product group, country) cell.
//!
//! Zero cells are kept as explicit `Gap`s; showing where no company
//! operates is the point of the table.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::filter::CountrySelection;
use crate::data::CompanyProductRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotCell {
    /// No company in this product group and country.
    Gap,
    /// Number of distinct companies, always at least one.
    Count(usize),
}

impl PivotCell {
    pub fn count(self) -> usize {
        match self {
            PivotCell::Gap => 0,
            PivotCell::Count(n) => n,
        }
    }

    pub fn is_gap(self) -> bool {
        matches!(self, PivotCell::Gap)
    }

    fn from_count(n: usize) -> Self {
        if n == 0 {
            PivotCell::Gap
        } else {
            PivotCell::Count(n)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotColumn {
    pub country: String,
    /// Distinct companies in this country across all product groups.
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    /// Product groups, sorted.
    pub rows: Vec<String>,
    /// Countries, most companies first.
    pub columns: Vec<PivotColumn>,
    /// `cells[row][column]`
    cells: Vec<Vec<PivotCell>>,
}

impl PivotTable {
    pub fn cell(&self, row: usize, column: usize) -> PivotCell {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(PivotCell::Gap)
    }

    /// Lookup by name; unknown names read as a gap.
    pub fn count(&self, product_group: &str, country: &str) -> usize {
        let row = self.rows.iter().position(|g| g == product_group);
        let col = self.columns.iter().position(|c| c.country == country);
        match (row, col) {
            (Some(r), Some(c)) => self.cell(r, c).count(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_gap()).count()
    }
}

/// Build the product-group × country matrix from filtered rows.
///
/// Columns are the selected countries, or every country present in `records`
/// under `All`, ordered by descending company count then by name.
pub fn pivot<'a, I>(records: I, countries: &CountrySelection) -> PivotTable
where
    I: IntoIterator<Item = &'a CompanyProductRecord>,
{
    let mut by_cell: BTreeMap<(&str, &str), HashSet<&str>> = BTreeMap::new();
    let mut by_country: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    let mut groups: BTreeSet<&str> = BTreeSet::new();

    for r in records {
        by_country
            .entry(r.country.as_str())
            .or_default()
            .insert(r.company.as_str());
        if r.product_group.is_empty() {
            continue;
        }
        groups.insert(r.product_group.as_str());
        by_cell
            .entry((r.product_group.as_str(), r.country.as_str()))
            .or_default()
            .insert(r.company.as_str());
    }

    let column_names: Vec<&str> = match countries.selected() {
        Some(set) => set.iter().map(String::as_str).collect(),
        None => by_country.keys().copied().collect(),
    };

    let mut columns: Vec<PivotColumn> = column_names
        .into_iter()
        .map(|country| PivotColumn {
            country: country.to_string(),
            total: by_country.get(country).map_or(0, HashSet::len),
        })
        .collect();
    // Names arrive sorted, and the sort is stable, so ties stay alphabetical
    columns.sort_by_key(|c| Reverse(c.total));

    let cells = groups
        .iter()
        .map(|group| {
            columns
                .iter()
                .map(|col| {
                    let n = by_cell
                        .get(&(*group, col.country.as_str()))
                        .map_or(0, HashSet::len);
                    PivotCell::from_count(n)
                })
                .collect()
        })
        .collect();

    PivotTable {
        rows: groups.into_iter().map(str::to_string).collect(),
        columns,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    fn rec(company: &str, country: &str, group: &str) -> CompanyProductRecord {
        CompanyProductRecord::new(company, country, 1.0, Category::Brain, "p", group)
    }

    #[test]
    fn counts_distinct_companies_not_rows() {
        let records = vec![
            rec("Sony", "Japan", "Sensors"),
            rec("Sony", "Japan", "Sensors"),
            rec("Keyence", "Japan", "Sensors"),
            rec("Fanuc", "Japan", "Robots"),
        ];
        let table = pivot(&records, &CountrySelection::All);
        assert_eq!(table.count("Sensors", "Japan"), 2);
        assert_eq!(table.count("Robots", "Japan"), 1);
        assert_eq!(table.columns[0].total, 3);
    }

    #[test]
    fn zero_cells_are_gaps() {
        let records = vec![rec("Sony", "Japan", "Sensors"), rec("Tesla", "USA", "Robots")];
        let table = pivot(&records, &CountrySelection::All);
        let sensors = table.rows.iter().position(|g| g == "Sensors").unwrap();
        let usa = table.columns.iter().position(|c| c.country == "USA").unwrap();
        assert_eq!(table.cell(sensors, usa), PivotCell::Gap);
        assert_eq!(table.gap_count(), 2);

        // every cell agrees with a direct count over the rows
        for (ri, group) in table.rows.iter().enumerate() {
            for (ci, col) in table.columns.iter().enumerate() {
                let expected: HashSet<&str> = records
                    .iter()
                    .filter(|r| &r.product_group == group && r.country == col.country)
                    .map(|r| r.company.as_str())
                    .collect();
                let cell = table.cell(ri, ci);
                assert_eq!(cell.count(), expected.len());
                assert_eq!(cell.is_gap(), expected.is_empty());
            }
        }
    }

    #[test]
    fn columns_sorted_by_total_with_stable_ties() {
        let mut records = Vec::new();
        for i in 0..10 {
            records.push(rec(&format!("us{}", i), "USA", "Robots"));
            records.push(rec(&format!("jp{}", i), "Japan", "Robots"));
        }
        for i in 0..3 {
            records.push(rec(&format!("de{}", i), "Germany", "Robots"));
        }

        let first = pivot(&records, &CountrySelection::All);
        let order: Vec<&str> = first.columns.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(order, vec!["Japan", "USA", "Germany"]);

        // input order does not change the result
        records.reverse();
        let second = pivot(&records, &CountrySelection::All);
        assert_eq!(first, second);
    }

    #[test]
    fn selected_countries_become_columns_even_when_empty() {
        let records = vec![rec("Sony", "Japan", "Sensors")];
        let sel = CountrySelection::from_names(["Japan", "France"]);
        let table = pivot(&records, &sel);
        let names: Vec<&str> = table.columns.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Japan", "France"]);
        assert_eq!(table.count("Sensors", "France"), 0);
        assert!(table.cell(0, 1).is_gap());
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = pivot(&Vec::<CompanyProductRecord>::new(), &CountrySelection::All);
        assert!(table.is_empty());
        assert_eq!(table.cell(3, 3), PivotCell::Gap);
    }
}
