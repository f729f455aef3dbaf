use std::path::PathBuf;
use thiserror::Error;

/// Failures while fetching a remote feed. Callers treat every variant as
/// "feed unavailable", but the variants keep timeouts, transport problems and
/// upstream rejections distinguishable in the logs.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Whole-feed structural failures. Per-entry problems are skipped with a
/// diagnostic instead of surfacing here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed XML in AQHI feed: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("malformed JSON in AQHI feed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("error reading temperature CSV headers: {0}")]
    Csv(#[from] csv::Error),
    #[error("no column header containing '{token}' in temperature feed")]
    MissingColumn { token: String },
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize row for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
