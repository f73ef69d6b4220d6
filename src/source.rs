//! Where the lounge CSV comes from and how it is fetched.

use crate::error::{LoadError, LoadResult};
use crate::io::{read_lounges, read_lounges_from_reader};
use crate::models::Lounge;
use std::fmt;

const USER_AGENT: &str = "lounge_search/1.0";

/// Location of the lounge CSV document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(String),
    Url(String),
}

impl DataSource {
    /// Interpret a command-line value: `http://` and `https://` prefixes mean
    /// a remote document, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(trimmed.to_string())
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Fetch the CSV document at `url` and parse it
pub async fn fetch_lounges_from_url_async(url: &str) -> LoadResult<Vec<Lounge>> {
    log::info!("Fetching lounge data from {}", url);

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(LoadError::HttpStatus(response.status()));
    }

    let body = response.bytes().await?;
    read_lounges_from_reader(&body[..])
}

/// Load all lounge rows from `source` without blocking the async runtime
pub async fn fetch_lounges_async(source: &DataSource) -> LoadResult<Vec<Lounge>> {
    match source {
        DataSource::File(path) => {
            log::info!("Reading lounge data from {}", path);
            let path = path.clone();
            tokio::task::spawn_blocking(move || read_lounges(&path))
                .await
                .map_err(|e| LoadError::Io(std::io::Error::other(e)))?
        }
        DataSource::Url(url) => fetch_lounges_from_url_async(url).await,
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
