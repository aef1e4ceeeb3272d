//! Aggregator: one entity per (company, country) pair.

use std::collections::{BTreeSet, HashMap};

use crate::data::{Category, CompanyProductRecord};

/// A company's presence in one country, merged across its product rows.
///
/// Recomputed from scratch on every filter change; it has no identity
/// beyond its `(company, country)` key.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntity {
    pub company: String,
    pub country: String,
    /// Taken from the first row encountered for the pair.
    pub market_cap_millions: f64,
    /// Category of the first row; drives the bubble colour.
    pub primary_category: Category,
    pub categories: BTreeSet<Category>,
    pub product_groups: BTreeSet<String>,
    pub products: BTreeSet<String>,
}

impl AggregatedEntity {
    fn from_first(record: &CompanyProductRecord) -> Self {
        let mut entity = Self {
            company: record.company.clone(),
            country: record.country.clone(),
            market_cap_millions: record.market_cap_millions,
            primary_category: record.category,
            categories: BTreeSet::new(),
            product_groups: BTreeSet::new(),
            products: BTreeSet::new(),
        };
        entity.absorb(record);
        entity
    }

    fn absorb(&mut self, record: &CompanyProductRecord) {
        self.categories.insert(record.category);
        if !record.product_group.is_empty() {
            self.product_groups.insert(record.product_group.clone());
        }
        if !record.product.is_empty() {
            self.products.insert(record.product.clone());
        }
    }

    /// e.g. `"Brain, Integrator"`
    pub fn categories_label(&self) -> String {
        join(self.categories.iter().map(|c| c.as_str()))
    }

    pub fn product_groups_label(&self) -> String {
        join(self.product_groups.iter().map(String::as_str))
    }

    pub fn products_label(&self) -> String {
        join(self.products.iter().map(String::as_str))
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Group rows by `(company, country)` and union their attributes.
///
/// Output follows first-encounter order of each pair; callers should not
/// depend on it.
pub fn aggregate<'a, I>(records: I) -> Vec<AggregatedEntity>
where
    I: IntoIterator<Item = &'a CompanyProductRecord>,
{
    let mut index: HashMap<(&'a str, &'a str), usize> = HashMap::new();
    let mut entities: Vec<AggregatedEntity> = Vec::new();

    for record in records {
        let key = (record.company.as_str(), record.country.as_str());
        match index.get(&key).copied() {
            Some(i) => {
                let entity = &mut entities[i];
                if entity.market_cap_millions != record.market_cap_millions {
                    log::debug!(
                        "{} ({}) has disagreeing market caps {} vs {}; keeping the first",
                        entity.company,
                        entity.country,
                        entity.market_cap_millions,
                        record.market_cap_millions
                    );
                }
                entity.absorb(record);
            }
            None => {
                index.insert(key, entities.len());
                entities.push(AggregatedEntity::from_first(record));
            }
        }
    }

    entities
}
