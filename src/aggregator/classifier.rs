//! Event classification: human-readable notes from step payloads.
//!
//! Classification is an ordered chain of rules evaluated in priority
//! order; the first rule producing a note wins. Path structure is never
//! consulted here, only the payload.

use crate::parser::automation_trace::Event;
use crate::parser::schema::StepRecord;
use chrono::{DateTime, Utc};

/// One classification rule: payload in, optional note out
type Rule = fn(&StepRecord) -> Option<String>;

/// Priority-ordered rule chain. Extend by inserting at the right spot.
const RULES: &[Rule] = &[zone_note, service_call_note];

/// Classify a step payload into a display note
///
/// **Public** - pure function, used for the timeline Notes column
///
/// Returns an empty string when no rule matches.
pub fn classify(step: &StepRecord) -> String {
    RULES.iter().find_map(|rule| rule(step)).unwrap_or_default()
}

/// Rule: repeat/loop context with a non-empty zone id
fn zone_note(step: &StepRecord) -> Option<String> {
    step.zone_id().map(|id| format!("zone: {}", id))
}

/// Rule: invoked service call (domain and service both present)
fn service_call_note(step: &StepRecord) -> Option<String> {
    let params = step.service_params()?;
    let domain = params.domain.as_deref().unwrap_or_default();
    let service = params.service.as_deref().unwrap_or_default();
    let target = params
        .target
        .as_ref()
        .and_then(|t| t.entity_id.as_ref())
        .and_then(|ids| ids.first())
        .map(entity_leaf)
        .unwrap_or_default();
    Some(format!("{}.{} → {}", domain, service, target))
}

/// Last dot-segment of an entity id ("light.bedroom_lamp" → "bedroom_lamp");
/// the raw id when it contains no dot.
fn entity_leaf(entity_id: &str) -> String {
    entity_id.rsplit('.').next().unwrap_or(entity_id).to_string()
}

/// One service invocation, as listed in the timing ledger
#[derive(Debug, Clone)]
pub struct ServiceCallRecord {
    pub timestamp: DateTime<Utc>,

    /// "domain.service"
    pub service: String,

    /// First target entity id, or "unknown" when the call has no target
    pub target: String,
}

/// Extract the chronological service-call ledger from an event sequence
///
/// **Public** - events are already sorted, so the ledger is too
pub fn collect_service_calls(events: &[Event]) -> Vec<ServiceCallRecord> {
    events
        .iter()
        .filter_map(|event| {
            let params = event.step.service_params()?;
            let service = format!(
                "{}.{}",
                params.domain.as_deref().unwrap_or_default(),
                params.service.as_deref().unwrap_or_default()
            );
            let target = params
                .target
                .as_ref()
                .and_then(|t| t.entity_id.as_ref())
                .and_then(|ids| ids.first())
                .unwrap_or("unknown")
                .to_string();
            Some(ServiceCallRecord {
                timestamp: event.timestamp,
                service,
                target,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::StepRecord;
    use serde_json::json;

    fn step(value: serde_json::Value) -> StepRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_service_call_note_with_entity_leaf() {
        let step = step(json!({
            "result": { "params": {
                "domain": "light",
                "service": "turn_on",
                "target": { "entity_id": ["light.bedroom_lamp"] }
            } }
        }));
        assert_eq!(classify(&step), "light.turn_on → bedroom_lamp");
    }

    #[test]
    fn test_service_call_note_without_dot_keeps_raw_id() {
        let step = step(json!({
            "result": { "params": {
                "domain": "script",
                "service": "run",
                "target": { "entity_id": "all" }
            } }
        }));
        assert_eq!(classify(&step), "script.run → all");
    }

    #[test]
    fn test_zone_note() {
        let step = step(json!({
            "changed_variables": { "repeat": { "item": { "id": "living_room" } } }
        }));
        assert_eq!(classify(&step), "zone: living_room");
    }

    #[test]
    fn test_zone_rule_takes_priority_over_service_call() {
        let step = step(json!({
            "changed_variables": { "repeat": { "item": { "id": "kitchen" } } },
            "result": { "params": { "domain": "light", "service": "turn_on" } }
        }));
        assert_eq!(classify(&step), "zone: kitchen");
    }

    #[test]
    fn test_no_rule_matches_is_empty() {
        assert_eq!(classify(&step(json!({}))), "");
    }

    #[test]
    fn test_ledger_target_is_first_entity_or_unknown() {
        use crate::parser::automation_trace::Event;
        use crate::parser::timestamp::parse_timestamp;

        let ts = |s| parse_timestamp(Some(s)).unwrap();
        let events = vec![
            Event {
                path: "action/0".into(),
                timestamp: ts("2026-02-20T10:00:00Z"),
                step: step(json!({
                    "result": { "params": {
                        "domain": "light",
                        "service": "turn_on",
                        "target": { "entity_id": ["light.a", "light.b"] }
                    } }
                })),
            },
            Event {
                path: "action/1".into(),
                timestamp: ts("2026-02-20T10:00:01Z"),
                step: step(json!({
                    "result": { "params": { "domain": "scene", "service": "apply" } }
                })),
            },
            Event {
                path: "action/2".into(),
                timestamp: ts("2026-02-20T10:00:02Z"),
                step: step(json!({})),
            },
        ];

        let calls = collect_service_calls(&events);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].service, "light.turn_on");
        assert_eq!(calls[0].target, "light.a");
        assert_eq!(calls[1].service, "scene.apply");
        assert_eq!(calls[1].target, "unknown");
    }
}
