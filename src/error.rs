//! Error type shared by the dataset and boundary loaders.
//!
//! Every variant is recoverable from the dashboard's point of view: a failed
//! dataset load degrades to the embedded fallback and a failed boundary load
//! degrades to a graticule-only map.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("dataset contains no usable rows")]
    EmptyDataset,

    #[error("invalid topology: {0}")]
    Topology(String),
}

impl LoadError {
    /// Short phase name used in log lines and the fallback notice.
    pub fn phase(&self) -> &'static str {
        match self {
            LoadError::InvalidUrl { .. }
            | LoadError::Request(_)
            | LoadError::Status { .. }
            | LoadError::Io { .. } => "fetch",
            LoadError::Csv(_) | LoadError::MissingColumn(_) | LoadError::EmptyDataset => "parse",
            LoadError::Topology(_) => "decode",
        }
    }
}
