use async_trait::async_trait;

use super::ReportSink;
use crate::{mackerel::ReportBatch, Result};

/// Prints the batch as it would be posted to Mackerel.
#[derive(Debug, Default)]
pub struct StdoutSink {
    pretty: bool,
}

impl StdoutSink {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, batch: &ReportBatch) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(batch)?
        } else {
            serde_json::to_string(batch)?
        };
        Ok(rendered)
    }
}

#[async_trait]
impl ReportSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn submit(&self, batch: &ReportBatch) -> Result<()> {
        println!("{}", self.render(batch)?);
        Ok(())
    }
}
