//! Input schema definitions for automation trace documents.
//!
//! This module defines the structure of the JSON documents the engine
//! writes for each automation run. Every field below the top-level
//! `trace` wrapper is optional: absence is a valid state, not an error.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level document wrapper
///
/// The engine nests the actual trace under a `trace` key. A document
/// without that key is structurally invalid and rejected at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceFile {
    pub trace: TraceDocument,
}

/// One automation run as recorded by the engine
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceDocument {
    /// Run identifier assigned by the engine
    #[serde(default)]
    pub run_id: Option<String>,

    /// Trigger descriptor; free-form (string or object depending on engine)
    #[serde(default)]
    pub trigger: Option<serde_json::Value>,

    /// Overall run boundaries
    #[serde(default)]
    pub timestamp: RunTimestamps,

    /// Step records grouped by slash-separated path (e.g. "action/3/sequence/1")
    #[serde(default)]
    pub trace: BTreeMap<String, Vec<StepRecord>>,
}

/// Start/finish timestamps for the whole run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunTimestamps {
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub finish: Option<String>,
}

/// One raw step entry under a path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepRecord {
    /// When the step executed (ISO-8601 string)
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Variables the step changed, including loop context if inside a repeat
    #[serde(default)]
    pub changed_variables: Option<ChangedVariables>,

    /// Step result payload, including invoked-service parameters if any
    #[serde(default)]
    pub result: Option<StepResult>,
}

/// Changed-variables payload; only the repeat context matters to us
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangedVariables {
    #[serde(default)]
    pub repeat: Option<RepeatContext>,
}

/// Loop iteration context
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepeatContext {
    #[serde(default)]
    pub item: Option<RepeatItem>,
}

/// The item a repeat iteration is processing (a zone, in practice)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepeatItem {
    #[serde(default)]
    pub id: Option<String>,
}

/// Step result payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepResult {
    #[serde(default)]
    pub params: Option<ServiceParams>,
}

/// Parameters of an invoked service call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceParams {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub target: Option<ServiceTarget>,
}

/// Target of a service call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceTarget {
    #[serde(default)]
    pub entity_id: Option<EntityIds>,
}

/// The engine writes `entity_id` as either one string or a list of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntityIds {
    One(String),
    Many(Vec<String>),
}

impl EntityIds {
    /// First entity id, if any
    pub fn first(&self) -> Option<&str> {
        match self {
            EntityIds::One(id) => Some(id.as_str()),
            EntityIds::Many(ids) => ids.first().map(String::as_str),
        }
    }
}

impl StepRecord {
    /// Zone id from the repeat/loop context, if present and non-empty
    pub fn zone_id(&self) -> Option<&str> {
        let id = self
            .changed_variables
            .as_ref()?
            .repeat
            .as_ref()?
            .item
            .as_ref()?
            .id
            .as_deref()?;
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    /// Service-call parameters, only when both domain and service are named
    pub fn service_params(&self) -> Option<&ServiceParams> {
        let params = self.result.as_ref()?.params.as_ref()?;
        match (&params.domain, &params.service) {
            (Some(_), Some(_)) => Some(params),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_accepts_both_shapes() {
        let one: EntityIds = serde_json::from_value(json!("light.lamp")).unwrap();
        assert_eq!(one.first(), Some("light.lamp"));

        let many: EntityIds = serde_json::from_value(json!(["light.a", "light.b"])).unwrap();
        assert_eq!(many.first(), Some("light.a"));

        let empty: EntityIds = serde_json::from_value(json!([])).unwrap();
        assert_eq!(empty.first(), None);
    }

    #[test]
    fn test_step_with_all_fields_absent() {
        let step: StepRecord = serde_json::from_value(json!({})).unwrap();
        assert!(step.timestamp.is_none());
        assert!(step.zone_id().is_none());
        assert!(step.service_params().is_none());
    }

    #[test]
    fn test_zone_id_empty_string_is_absent() {
        let step: StepRecord = serde_json::from_value(json!({
            "changed_variables": { "repeat": { "item": { "id": "" } } }
        }))
        .unwrap();
        assert!(step.zone_id().is_none());
    }

    #[test]
    fn test_service_params_requires_domain_and_service() {
        let step: StepRecord = serde_json::from_value(json!({
            "result": { "params": { "domain": "light" } }
        }))
        .unwrap();
        assert!(step.service_params().is_none());

        let step: StepRecord = serde_json::from_value(json!({
            "result": { "params": { "domain": "light", "service": "turn_on" } }
        }))
        .unwrap();
        assert!(step.service_params().is_some());
    }
}
