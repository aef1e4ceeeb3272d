use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::config::DataConfig;
use crate::error::LoadError;

/// Result of fetching a dataset or boundary file
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub body: String,
    /// Final URL after redirects, or the file path that was read
    pub source: String,
}

/// A dataset location: a remote `http(s)` URL or a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    Local(PathBuf),
}

impl Location {
    /// Classify a location string. Relative paths, absolute paths and
    /// `file://` URLs are local; `http://` and `https://` are remote.
    pub fn parse(location: &str) -> Result<Self, LoadError> {
        let trimmed = location.trim();
        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Location::Remote(url)),
                "file" => Ok(Location::Local(
                    url.to_file_path()
                        .unwrap_or_else(|_| PathBuf::from(url.path())),
                )),
                // Drive letters such as `C:\data.csv` parse as a scheme
                _ => Ok(Location::Local(PathBuf::from(trimmed))),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Location::Local(PathBuf::from(trimmed)))
            }
            Err(e) if trimmed.starts_with("http://") || trimmed.starts_with("https://") => {
                Err(LoadError::InvalidUrl {
                    url: trimmed.to_string(),
                    source: e,
                })
            }
            Err(_) => Ok(Location::Local(PathBuf::from(trimmed))),
        }
    }
}

/// Client settings for remote fetches.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl From<&DataConfig> for FetchOptions {
    fn from(config: &DataConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

/// Fetch a location and return its text content (blocking).
pub fn fetch_text(location: &str, options: &FetchOptions) -> Result<FetchResult, LoadError> {
    match Location::parse(location)? {
        Location::Local(path) => read_local(path),
        Location::Remote(url) => fetch_remote(url, options),
    }
}

fn read_local(path: PathBuf) -> Result<FetchResult, LoadError> {
    let body = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", body.len(), path.display());

    Ok(FetchResult {
        body,
        source: path.display().to_string(),
    })
}

fn fetch_remote(url: Url, options: &FetchOptions) -> Result<FetchResult, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    let response = client
        .get(url.as_str())
        .header("Accept", "text/csv,application/json;q=0.9,*/*;q=0.8")
        .send()?;

    let status = response.status();
    let final_url = response.url().to_string();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            url: final_url,
        });
    }

    let body = response.text()?;
    log::debug!("Fetched {} bytes from {}", body.len(), final_url);

    Ok(FetchResult {
        body,
        source: final_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_locations() {
        assert!(matches!(
            Location::parse("https://unpkg.com/world-atlas@2/countries-110m.json"),
            Ok(Location::Remote(_))
        ));
        assert_eq!(
            Location::parse("data/robotics_companies.csv").unwrap(),
            Location::Local(PathBuf::from("data/robotics_companies.csv"))
        );
        assert!(matches!(
            Location::parse("/tmp/companies.csv"),
            Ok(Location::Local(_))
        ));
        assert!(matches!(
            Location::parse("http://[::1"),
            Err(LoadError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn reads_local_file() {
        let path = std::env::temp_dir().join(format!("robotics-atlas-fetch-{}.csv", std::process::id()));
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let opts = FetchOptions::from(&DataConfig::default());
        let result = fetch_text(path.to_str().unwrap(), &opts).unwrap();
        assert_eq!(result.body, "a,b\n1,2\n");
        assert_eq!(result.source, path.display().to_string());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_local_file_is_io_error() {
        let opts = FetchOptions::from(&DataConfig::default());
        let err = fetch_text("definitely/not/here.csv", &opts).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
