pub mod config;
pub mod handler;
pub mod logging;
pub mod mackerel;
pub mod sinks;
pub mod sources;
pub mod translator;

use thiserror::Error;

pub use config::{Config, MackerelConfig};
pub use handler::AlarmRelay;
pub use mackerel::{CheckReport, CheckSource, CheckStatus, ReportBatch};
pub use sinks::{MackerelSink, ReportSink, StdoutSink};
pub use sources::{AlarmNotification, SnsEnvelope};
pub use translator::Translator;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("failed to post: status code {status} {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to read response body: status code {status} {source}")]
    UnreadableResponse {
        status: u16,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// HTTP status returned by Mackerel, when the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayError::Rejected { status, .. } | RelayError::UnreadableResponse { status, .. } => {
                Some(*status)
            }
            RelayError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
