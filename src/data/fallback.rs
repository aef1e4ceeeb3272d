//! Embedded dataset used when the primary CSV cannot be loaded.

use super::{Category, CompanyProductRecord};

use Category::{Body, Brain, Integrator};

/// (company, country, market cap in millions, category, product, product group)
const ROWS: &[(&str, &str, f64, Category, &str, &str)] = &[
    ("Siemens", "Germany", 164454.0, Brain, "Motors", "Mechanical & Motion"),
    ("Siemens", "Germany", 164454.0, Brain, "Vision", "Sensors/Electronics"),
    ("NVIDIA", "USA", 2_900_000.0, Brain, "AI accelerators", "Compute"),
    ("NVIDIA", "USA", 2_900_000.0, Brain, "Simulation software", "Software & AI"),
    ("Intuitive Surgical", "USA", 170_000.0, Integrator, "Surgical robots", "Robots & Systems"),
    ("Tesla", "USA", 700_000.0, Integrator, "Humanoid robots", "Robots & Systems"),
    ("Tesla", "USA", 700_000.0, Body, "Battery packs", "Power & Energy"),
    ("Teradyne", "USA", 17_000.0, Integrator, "Collaborative arms", "Robots & Systems"),
    ("Fanuc", "Japan", 28_000.0, Integrator, "Industrial arms", "Robots & Systems"),
    ("Yaskawa", "Japan", 9_000.0, Body, "Servo motors", "Mechanical & Motion"),
    ("Yaskawa", "Japan", 9_000.0, Integrator, "Industrial arms", "Robots & Systems"),
    ("Keyence", "Japan", 105_000.0, Brain, "Machine vision", "Sensors/Electronics"),
    ("Harmonic Drive Systems", "Japan", 2_500.0, Body, "Strain wave gears", "Mechanical & Motion"),
    ("Nidec", "Japan", 23_000.0, Body, "Precision motors", "Mechanical & Motion"),
    ("Sony", "Japan", 110_000.0, Brain, "Image sensors", "Sensors/Electronics"),
    ("ABB", "Switzerland", 95_000.0, Integrator, "Industrial arms", "Robots & Systems"),
    ("ABB", "Switzerland", 95_000.0, Body, "Drives", "Mechanical & Motion"),
    ("Infineon", "Germany", 45_000.0, Brain, "Microcontrollers", "Compute"),
    ("Schaeffler", "Germany", 4_500.0, Body, "Bearings", "Mechanical & Motion"),
    ("UBTech", "China", 4_000.0, Integrator, "Humanoid robots", "Robots & Systems"),
    ("CATL", "China", 120_000.0, Body, "Battery cells", "Power & Energy"),
    ("Hikvision", "China", 40_000.0, Brain, "Cameras", "Sensors/Electronics"),
    ("Doosan Robotics", "South Korea", 3_000.0, Integrator, "Collaborative arms", "Robots & Systems"),
    ("Samsung Electronics", "South Korea", 330_000.0, Brain, "Memory", "Compute"),
    ("Samsung Electronics", "South Korea", 330_000.0, Body, "Batteries", "Power & Energy"),
    ("Renishaw", "United Kingdom", 3_500.0, Brain, "Encoders", "Sensors/Electronics"),
    ("Ocado", "United Kingdom", 4_000.0, Integrator, "Warehouse robots", "Robots & Systems"),
    ("Dassault Systemes", "France", 55_000.0, Brain, "Simulation software", "Software & AI"),
    ("Hexagon", "Sweden", 30_000.0, Brain, "Metrology sensors", "Sensors/Electronics"),
    ("TSMC", "Taiwan", 800_000.0, Brain, "Chip fabrication", "Compute"),
];

/// Fresh copy of the embedded records.
pub fn records() -> Vec<CompanyProductRecord> {
    ROWS.iter()
        .map(|&(company, country, cap, category, product, group)| {
            CompanyProductRecord::new(company, country, cap, category, product, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn market_cap_is_consistent_per_company() {
        let mut caps: HashMap<&str, f64> = HashMap::new();
        for r in ROWS {
            let prev = caps.entry(r.0).or_insert(r.2);
            assert_eq!(*prev, r.2, "{} has inconsistent market cap", r.0);
        }
    }

    #[test]
    fn every_category_is_represented() {
        let recs = records();
        for cat in Category::ALL {
            assert!(recs.iter().any(|r| r.category == cat), "{} missing", cat);
        }
    }
}
