//! Mackerel check-monitoring wire types.
//!
//! See <https://mackerel.io/api-docs/entry/check-monitoring>. A report
//! batch is posted as:
//!
//! ```json
//! {
//!   "reports": [
//!     {
//!       "source": { "type": "host", "hostId": "3Ja5nSy8dkq" },
//!       "name": "Mycron Batch Failed",
//!       "status": "CRITICAL",
//!       "message": "alert message",
//!       "occurredAt": 1704067200
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source type for reports filed against a host.
pub const HOST_SOURCE_TYPE: &str = "host";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    /// Accepted by Mackerel; never produced by the alarm translator.
    Unknown,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSource {
    #[serde(rename = "type")]
    pub source_type: String,

    #[serde(rename = "hostId")]
    pub host_id: String,
}

impl CheckSource {
    pub fn host(host_id: impl Into<String>) -> Self {
        Self {
            source_type: HOST_SOURCE_TYPE.to_string(),
            host_id: host_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub source: CheckSource,

    /// Monitor name.
    pub name: String,

    pub status: CheckStatus,

    /// Free-form memo, Mackerel keeps the first 1024 characters.
    pub message: String,

    /// Epoch seconds.
    pub occurred_at: i64,

    /// Re-notification interval in minutes. Mackerel does not resend when
    /// absent and raises anything under 10 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBatch {
    pub reports: Vec<CheckReport>,
}

impl ReportBatch {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl FromIterator<CheckReport> for ReportBatch {
    fn from_iter<I: IntoIterator<Item = CheckReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}
