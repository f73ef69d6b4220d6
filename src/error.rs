use std::fmt;

/// Unified error type for loading lounge data and images
#[derive(Debug)]
pub enum LoadError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// CSV document could not be parsed
    Csv(csv::Error),
    /// File I/O error
    Io(std::io::Error),
    /// Image decoding error
    Image(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "Network error: {}", e),
            LoadError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            LoadError::Csv(e) => write!(f, "CSV error: {}", e),
            LoadError::Io(e) => write!(f, "I/O error: {}", e),
            LoadError::Image(msg) => write!(f, "Image error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Network(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;
