pub mod mackerel;
pub mod stdout;

pub use mackerel::MackerelSink;
pub use stdout::StdoutSink;

use async_trait::async_trait;

use crate::{mackerel::ReportBatch, Result};

/// Destination for a translated batch. The whole batch is delivered in one
/// call; there is no partial success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSink: Send + Sync {
    fn name(&self) -> &str;
    async fn submit(&self, batch: &ReportBatch) -> Result<()>;
}
