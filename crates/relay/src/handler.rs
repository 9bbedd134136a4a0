use tracing::{debug, info};

use crate::{sinks::ReportSink, sources::SnsEnvelope, translator::Translator, Result};

/// One invocation: translate every record of an SNS event and hand the
/// resulting batch to the sink in a single call.
pub struct AlarmRelay<S> {
    translator: Translator,
    sink: S,
}

impl<S: ReportSink> AlarmRelay<S> {
    pub fn new(translator: Translator, sink: S) -> Self {
        Self { translator, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Malformed records are dropped from the batch. An empty batch is
    /// still submitted. Only a sink failure fails the invocation.
    pub async fn handle(&self, envelope: SnsEnvelope) -> Result<()> {
        for record in &envelope.records {
            debug!(
                event_source = record.event_source.as_deref().unwrap_or(""),
                message_id = record.sns.message_id.as_deref().unwrap_or(""),
                topic_arn = record.sns.topic_arn.as_deref().unwrap_or(""),
                subject = record.sns.subject.as_deref().unwrap_or(""),
                "received SNS record"
            );
        }

        let received = envelope.len();
        let batch = self.translator.translate_batch(envelope.messages());
        info!(
            received,
            translated = batch.len(),
            skipped = received - batch.len(),
            host_id = self.translator.host_id(),
            "translated alarm notifications"
        );

        self.sink.submit(&batch).await
    }
}
