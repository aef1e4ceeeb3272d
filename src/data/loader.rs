//! Dataset loading with silent degrade to the embedded records.

use super::parser::parse_csv;
use super::{CompanyProductRecord, Dataset};
use crate::config::DataConfig;
use crate::error::LoadError;
use crate::net::fetch::{fetch_text, FetchOptions};

/// Fetch and parse the configured dataset, surfacing any failure.
pub fn load_records(config: &DataConfig) -> Result<Vec<CompanyProductRecord>, LoadError> {
    let fetched = fetch_text(&config.dataset, &FetchOptions::from(config))?;
    parse_csv(&fetched.body)
}

/// Load the configured dataset, falling back to the embedded records on
/// any fetch or parse failure. Never fails.
pub fn load_dataset(config: &DataConfig) -> Dataset {
    match load_records(config) {
        Ok(records) => {
            log::info!("Loaded {} records from {}", records.len(), config.dataset);
            Dataset::primary(records, config.dataset.clone())
        }
        Err(e) => {
            log::warn!(
                "Dataset load failed [{}] for {}: {}; using embedded data",
                e.phase(),
                config.dataset,
                e
            );
            Dataset::fallback(format!("[{}] {}", e.phase(), e))
        }
    }
}
