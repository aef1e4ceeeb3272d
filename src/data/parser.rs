//! CSV → `CompanyProductRecord` conversion.
//!
//! Header names are matched case-insensitively after trimming, and the
//! market-cap column accepts a handful of spellings seen in exports of the
//! dataset. Rows that cannot be interpreted are skipped with a warning; a
//! file without the required columns or without a single usable row is an
//! error.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{Category, CompanyProductRecord};
use crate::error::LoadError;

const COMPANY: &[&str] = &["company"];
const COUNTRY: &[&str] = &["country"];
const MARKET_CAP: &[&str] = &[
    "mktcap",
    "market cap",
    "market cap (millions)",
    "marketcap",
    "marketcapmillions",
    "market_cap_millions",
];
const CATEGORY: &[&str] = &["category"];
const PRODUCT: &[&str] = &["product"];
const PRODUCT_GROUP: &[&str] = &["products grouped", "product group", "productgroup"];

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    company: usize,
    country: usize,
    market_cap: usize,
    category: usize,
    product: usize,
    product_group: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |aliases: &[&str], name: &'static str| {
            headers
                .iter()
                .position(|h| {
                    let h = h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
                    aliases.contains(&h.as_str())
                })
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            company: find(COMPANY, "Company")?,
            country: find(COUNTRY, "Country")?,
            market_cap: find(MARKET_CAP, "MktCap")?,
            category: find(CATEGORY, "Category")?,
            product: find(PRODUCT, "Product")?,
            product_group: find(PRODUCT_GROUP, "Products Grouped")?,
        })
    }
}

/// Parse the raw dataset text.
pub fn parse_csv(text: &str) -> Result<Vec<CompanyProductRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns = Columns::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in reader.records().enumerate() {
        let row = row?;
        match parse_row(&row, &columns) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                // +2: one for the header, one for 1-based numbering
                log::warn!("Skipping dataset row {}: {}", line + 2, reason);
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    log::debug!("Parsed {} records ({} skipped)", records.len(), skipped);
    Ok(records)
}

fn parse_row(row: &StringRecord, columns: &Columns) -> Result<CompanyProductRecord, String> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    let company = field(columns.company);
    if company.is_empty() {
        return Err("empty company name".into());
    }
    let country = field(columns.country);
    if country.is_empty() {
        return Err(format!("empty country for `{}`", company));
    }

    let raw_cap = field(columns.market_cap);
    let market_cap_millions = parse_market_cap(raw_cap)
        .ok_or_else(|| format!("unreadable market cap `{}` for `{}`", raw_cap, company))?;

    let category: Category = field(columns.category)
        .parse()
        .map_err(|e| format!("{} for `{}`", e, company))?;

    Ok(CompanyProductRecord {
        company: company.to_string(),
        country: country.to_string(),
        market_cap_millions,
        category,
        product: field(columns.product).to_string(),
        product_group: field(columns.product_group).to_string(),
    })
}

/// Read a market-cap cell such as `164454`, `"164,454"` or `$ 1,200.5`.
pub fn parse_market_cap(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
