use std::fmt;

/// Result type for shipex-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the pipeline layer
#[derive(Debug)]
pub enum Error {
    /// End date precedes start date
    Range(String),

    /// Store layer error
    Store(shipex_store::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// CSV writing failed
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range(msg) => write!(f, "Invalid date range: {}", msg),
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Range(_) => None,
        }
    }
}

impl From<shipex_store::Error> for Error {
    fn from(err: shipex_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
