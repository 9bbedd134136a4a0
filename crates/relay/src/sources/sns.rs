use serde::Deserialize;

use super::null_as_default;

/// SNS event as handed to a Lambda subscriber. Only the fields the relay
/// reads or logs are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Records", default, deserialize_with = "null_as_default")]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "EventSource", default)]
    pub event_source: Option<String>,

    #[serde(rename = "Sns", default, deserialize_with = "null_as_default")]
    pub sns: SnsNotification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnsNotification {
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,

    #[serde(rename = "TopicArn", default)]
    pub topic_arn: Option<String>,

    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,

    /// JSON-encoded alarm notification.
    #[serde(rename = "Message", default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl SnsEnvelope {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw message payloads in delivery order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.sns.message.as_str())
    }

    /// Wraps raw messages in a minimal envelope, one record per message.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: messages
                .into_iter()
                .map(|m| SnsRecord {
                    event_source: Some("aws:sns".to_string()),
                    sns: SnsNotification {
                        message: m.into(),
                        ..Default::default()
                    },
                })
                .collect(),
        }
    }
}
