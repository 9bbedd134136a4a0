use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{
    mackerel::{CheckReport, CheckSource, CheckStatus, ReportBatch},
    sources::AlarmNotification,
};

/// CloudWatch state that maps to a passing check.
const ALARM_STATE_OK: &str = "OK";
/// Alarm descriptions starting with this mark the alarm as critical.
const CRITICAL_PREFIX: &str = "CRITICAL";

impl AlarmNotification {
    pub fn check_status(&self) -> CheckStatus {
        if self.new_state == ALARM_STATE_OK {
            return CheckStatus::Ok;
        }
        if self.alarm_description.starts_with(CRITICAL_PREFIX) {
            return CheckStatus::Critical;
        }
        CheckStatus::Warning
    }

    pub fn report_message(&self) -> String {
        format!(
            "{} status is '{}', reason: {}, alarm_description: {}, state_change_time: {}, metrics: {}, namespace: {}",
            self.alarm_name,
            self.new_state,
            self.state_reason,
            self.alarm_description,
            self.state_change_time,
            self.trigger.metric_name,
            self.trigger.namespace,
        )
    }
}

/// Turns alarm notifications into check reports for one Mackerel host.
#[derive(Debug, Clone)]
pub struct Translator {
    host_id: String,
}

impl Translator {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
        }
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// Translates with `occurredAt` set to the current time.
    pub fn translate(&self, notification: &AlarmNotification) -> Option<CheckReport> {
        self.translate_at(notification, Utc::now())
    }

    /// `occurred_at` is the translation time, not the alarm's
    /// `StateChangeTime`.
    pub fn translate_at(
        &self,
        notification: &AlarmNotification,
        occurred_at: DateTime<Utc>,
    ) -> Option<CheckReport> {
        if !notification.is_well_formed() {
            warn!(
                ?notification,
                "skipping alarm notification without AlarmName or NewStateValue"
            );
            return None;
        }

        Some(CheckReport {
            source: CheckSource::host(&self.host_id),
            name: notification.alarm_name.clone(),
            status: notification.check_status(),
            message: notification.report_message(),
            occurred_at: occurred_at.timestamp(),
            notification_interval: None,
        })
    }

    /// Decodes and translates raw SNS message bodies. Records that fail to
    /// decode or translate are dropped; the rest keep their order.
    pub fn translate_batch<'a, I>(&self, messages: I) -> ReportBatch
    where
        I: IntoIterator<Item = &'a str>,
    {
        messages
            .into_iter()
            .enumerate()
            .filter_map(|(index, message)| {
                let notification = decode(index, message)?;
                let report = self.translate(&notification)?;
                debug!(
                    index,
                    name = %report.name,
                    status = %report.status,
                    "translated alarm notification"
                );
                Some(report)
            })
            .collect()
    }
}

fn decode(index: usize, message: &str) -> Option<AlarmNotification> {
    match serde_json::from_str(message) {
        Ok(notification) => Some(notification),
        Err(e) => {
            warn!(index, error = %e, "skipping undecodable alarm notification");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::AlarmTrigger;
    use chrono::TimeZone;
    use serde_json::json;

    fn scenario_a() -> AlarmNotification {
        AlarmNotification {
            alarm_name: "cron failed".to_string(),
            alarm_description: String::new(),
            new_state: "ALARM".to_string(),
            state_reason: "threshold breached".to_string(),
            state_change_time: "2024-01-01T00:00:00Z".to_string(),
            trigger: AlarmTrigger {
                metric_name: "Errors".to_string(),
                namespace: "AWS/Lambda".to_string(),
            },
        }
    }

    fn message(name: &str, state: &str, description: &str) -> String {
        json!({
            "AlarmName": name,
            "AlarmDescription": description,
            "NewStateValue": state,
            "NewStateReason": "reason",
            "StateChangeTime": "2024-01-01T00:00:00.000+0000",
            "Trigger": { "MetricName": "Errors", "Namespace": "AWS/Lambda" }
        })
        .to_string()
    }

    #[test]
    fn test_alarm_without_critical_description_is_warning() {
        let translator = Translator::new("3Ja5nSy8dkq");
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
        let report = translator.translate_at(&scenario_a(), at).unwrap();

        assert_eq!(report.status, CheckStatus::Warning);
        assert_eq!(
            report.message,
            "cron failed status is 'ALARM', reason: threshold breached, alarm_description: , \
             state_change_time: 2024-01-01T00:00:00Z, metrics: Errors, namespace: AWS/Lambda"
        );
        assert_eq!(report.name, "cron failed");
        assert_eq!(report.source, CheckSource::host("3Ja5nSy8dkq"));
        assert_eq!(report.occurred_at, at.timestamp());
        assert_eq!(report.notification_interval, None);
    }

    #[test]
    fn test_critical_description_prefix() {
        let mut n = scenario_a();
        n.alarm_description = "CRITICAL: pipeline down".to_string();
        assert_eq!(n.check_status(), CheckStatus::Critical);
    }

    #[test]
    fn test_ok_takes_precedence_over_critical_description() {
        let mut n = scenario_a();
        n.new_state = "OK".to_string();
        n.alarm_description = "CRITICAL: pipeline down".to_string();
        assert_eq!(n.check_status(), CheckStatus::Ok);
    }

    #[test]
    fn test_prefix_match_is_exact() {
        let mut n = scenario_a();
        for description in ["critical: lowercase", " CRITICAL leading space", "NOT CRITICAL"] {
            n.alarm_description = description.to_string();
            assert_eq!(n.check_status(), CheckStatus::Warning, "{description}");
        }

        // Any non-OK state counts, including INSUFFICIENT_DATA.
        n.new_state = "INSUFFICIENT_DATA".to_string();
        n.alarm_description = "CRITICAL".to_string();
        assert_eq!(n.check_status(), CheckStatus::Critical);
    }

    #[test]
    fn test_missing_name_or_state_is_skipped() {
        let translator = Translator::new("host");

        let mut n = scenario_a();
        n.alarm_name.clear();
        assert!(translator.translate(&n).is_none());

        let mut n = scenario_a();
        n.new_state.clear();
        assert!(translator.translate(&n).is_none());
    }

    #[test]
    fn test_occurred_at_is_translation_time() {
        let translator = Translator::new("host");
        let before = Utc::now().timestamp();
        let report = translator.translate(&scenario_a()).unwrap();
        let after = Utc::now().timestamp();

        assert!(report.occurred_at >= before && report.occurred_at <= after);
        // StateChangeTime is 2024-01-01 and is not used.
        assert_ne!(report.occurred_at, 1_704_067_200);
    }

    #[test]
    fn test_batch_keeps_order_and_drops_malformed() {
        let translator = Translator::new("3Ja5nSy8dkq");
        let messages = vec![
            message("first", "ALARM", ""),
            "not json".to_string(),
            message("", "ALARM", ""),
            message("second", "OK", "CRITICAL: x"),
            message("third", "", ""),
            json!({ "AlarmName": 42 }).to_string(),
            message("fourth", "ALARM", "CRITICAL: x"),
        ];

        let batch = translator.translate_batch(messages.iter().map(String::as_str));

        let summary: Vec<_> = batch
            .reports
            .iter()
            .map(|r| (r.name.as_str(), r.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("first", CheckStatus::Warning),
                ("second", CheckStatus::Ok),
                ("fourth", CheckStatus::Critical),
            ]
        );
        assert!(batch
            .reports
            .iter()
            .all(|r| r.source.host_id == "3Ja5nSy8dkq" && r.source.source_type == "host"));
    }

    #[test]
    fn test_batch_of_only_malformed_records_is_empty() {
        let translator = Translator::new("host");
        let batch = translator.translate_batch(["", "{}", "[]"]);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_null_description_renders_empty() {
        let translator = Translator::new("host");
        let raw = json!({
            "AlarmName": "disk",
            "AlarmDescription": null,
            "NewStateValue": "ALARM",
            "NewStateReason": "r",
            "StateChangeTime": "t",
            "Trigger": { "MetricName": "m", "Namespace": "n" }
        })
        .to_string();

        let batch = translator.translate_batch([raw.as_str()]);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.reports[0].status, CheckStatus::Warning);
        assert_eq!(
            batch.reports[0].message,
            "disk status is 'ALARM', reason: r, alarm_description: , state_change_time: t, metrics: m, namespace: n"
        );
    }
}
