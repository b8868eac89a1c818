use std::fmt;

use crate::JobHit;

pub type RequestId = u64;

/// Hits of one search plus the server-side total, which may exceed `hits.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    pub hits: Vec<JobHit>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchOutput, FetchError>,
    },
}

/// Any failure of a search. Callers surface all kinds the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Malformed,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}
