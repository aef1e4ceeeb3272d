pub mod parser;
pub mod fallback;
pub mod loader;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Where a company sits in the robotics value chain.
///
/// Variants are declared in name order so the derived `Ord` agrees with
/// plain string ordering of their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Physical components: motors, batteries, actuators
    Body,
    /// Software, AI, sensors and compute
    Brain,
    /// Complete robotic systems and end products
    Integrator,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Brain, Category::Body, Category::Integrator];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Body => "Body",
            Category::Brain => "Brain",
            Category::Integrator => "Integrator",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Brain => {
                "Companies focused on software, AI, sensors, and computational hardware"
            }
            Category::Body => {
                "Companies manufacturing physical components like motors, batteries, and actuators"
            }
            Category::Integrator => {
                "Companies that assemble complete robotic systems and end products"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category label outside {Brain, Body, Integrator}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brain" => Ok(Category::Brain),
            "body" => Ok(Category::Body),
            "integrator" => Ok(Category::Integrator),
            _ => Err(UnknownCategory(s.trim().to_string())),
        }
    }
}

/// One row of the dataset: a single product of a single company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProductRecord {
    pub company: String,
    pub country: String,
    /// Identical across every row of the same company.
    pub market_cap_millions: f64,
    pub category: Category,
    pub product: String,
    pub product_group: String,
}

impl CompanyProductRecord {
    pub fn new(
        company: impl Into<String>,
        country: impl Into<String>,
        market_cap_millions: f64,
        category: Category,
        product: impl Into<String>,
        product_group: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            country: country.into(),
            market_cap_millions,
            category,
            product: product.into(),
            product_group: product_group.into(),
        }
    }
}

/// Provenance of the records currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Primary { location: String },
    Fallback { reason: String },
}

/// The loaded record set. Immutable once built; shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<CompanyProductRecord>,
    pub source: DataSource,
}

impl Dataset {
    pub fn primary(records: Vec<CompanyProductRecord>, location: impl Into<String>) -> Self {
        Self {
            records,
            source: DataSource::Primary {
                location: location.into(),
            },
        }
    }

    /// The embedded dataset, tagged with the reason the primary load failed.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            records: fallback::records(),
            source: DataSource::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DataSource::Fallback { .. })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(" brain ".parse::<Category>(), Ok(Category::Brain));
        assert_eq!("BODY".parse::<Category>(), Ok(Category::Body));
        assert_eq!("Integrator".parse::<Category>(), Ok(Category::Integrator));
        let err = "Limb".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Limb".into()));
        assert_eq!(err.to_string(), "unknown category `Limb`");
    }

    #[test]
    fn category_order_matches_label_order() {
        let mut by_enum = Category::ALL.to_vec();
        by_enum.sort();
        let mut by_label: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        by_label.sort();
        let enum_labels: Vec<&str> = by_enum.iter().map(|c| c.as_str()).collect();
        assert_eq!(enum_labels, by_label);
    }

    #[test]
    fn fallback_dataset_is_flagged() {
        let ds = Dataset::fallback("offline");
        assert!(ds.is_fallback());
        assert!(!ds.is_empty());
        assert_eq!(
            ds.source,
            DataSource::Fallback {
                reason: "offline".into()
            }
        );
    }
}
