use serde::Deserialize;

use super::null_as_default;

/// CloudWatch alarm state-change notification, the `Message` body SNS
/// delivers for an alarm action:
///
/// ```json
/// {
///   "AlarmName": "test",
///   "AlarmDescription": "test",
///   "AWSAccountId": "123456789012",
///   "NewStateValue": "OK",
///   "NewStateReason": "Threshold Crossed: no datapoints were received for 1 period ...",
///   "StateChangeTime": "2018-02-16T08:42:33.109+0000",
///   "Region": "Asia Pacific (Tokyo)",
///   "OldStateValue": "ALARM",
///   "Trigger": {
///     "MetricName": "FailedInvocations",
///     "Namespace": "AWS/Events",
///     "Statistic": "SUM",
///     "Period": 60,
///     "Threshold": 0
///   }
/// }
/// ```
///
/// Every field may be missing or `null`; both decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlarmNotification {
    #[serde(rename = "AlarmName", default, deserialize_with = "null_as_default")]
    pub alarm_name: String,

    #[serde(rename = "AlarmDescription", default, deserialize_with = "null_as_default")]
    pub alarm_description: String,

    #[serde(rename = "NewStateValue", default, deserialize_with = "null_as_default")]
    pub new_state: String,

    #[serde(rename = "NewStateReason", default, deserialize_with = "null_as_default")]
    pub state_reason: String,

    #[serde(rename = "StateChangeTime", default, deserialize_with = "null_as_default")]
    pub state_change_time: String,

    #[serde(rename = "Trigger", default, deserialize_with = "null_as_default")]
    pub trigger: AlarmTrigger,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlarmTrigger {
    #[serde(rename = "MetricName", default, deserialize_with = "null_as_default")]
    pub metric_name: String,

    #[serde(
        rename = "Namespace",
        alias = "NameSpace",
        default,
        deserialize_with = "null_as_default"
    )]
    pub namespace: String,
}

impl AlarmNotification {
    /// A notification without an alarm name or new state is not forwarded.
    pub fn is_well_formed(&self) -> bool {
        !self.alarm_name.is_empty() && !self.new_state.is_empty()
    }
}
