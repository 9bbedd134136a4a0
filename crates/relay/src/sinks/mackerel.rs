use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use tracing::{debug, error};

use super::ReportSink;
use crate::{config::MackerelConfig, mackerel::ReportBatch, RelayError, Result};

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Posts check reports to Mackerel's check-monitoring API.
pub struct MackerelSink {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl MackerelSink {
    pub fn new(config: &MackerelConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the whole batch in one request. Any status below 400 counts as
    /// delivered; the response body is only read to report a failure.
    pub async fn post_check_reports(&self, batch: &ReportBatch) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(batch)
            .send()
            .await?;

        let status = response.status();
        if accepted(status) {
            debug!(status = status.as_u16(), reports = batch.len(), "posted check reports");
            return Ok(());
        }

        let status = status.as_u16();
        match response.text().await {
            Ok(body) => {
                error!(status, body = %body, "Mackerel rejected check reports");
                Err(RelayError::Rejected { status, body })
            }
            Err(source) => Err(RelayError::UnreadableResponse { status, source }),
        }
    }
}

fn accepted(status: StatusCode) -> bool {
    status.as_u16() < 400
}

#[async_trait]
impl ReportSink for MackerelSink {
    fn name(&self) -> &str {
        "mackerel"
    }

    async fn submit(&self, batch: &ReportBatch) -> Result<()> {
        self.post_check_reports(batch).await
    }
}
