use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// A single procedural event reconstructed from a proceeding, ordered by
/// `step_number`. The step ordering is authoritative for order checks even
/// when `timestamp_label` disagrees.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProcedureEvent {
    pub step_number: u32,
    pub action: String,
    pub speaker: Option<String>,
    pub timestamp_label: Option<String>,
    pub legal_reference: Option<String>,
    pub confidence: f32,
}

/// A case-type checklist from the knowledge base: the canonical required
/// sequence, forbidden actions, and per-step time limits.
///
/// Catalog entries arrive as free-form JSON. A malformed rule field (wrong
/// type, non-string members) deserializes to the empty collection so the
/// pipeline degrades to type-independent checks instead of failing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CaseTypeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub required_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub forbidden_actions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub time_limits: BTreeMap<String, String>,
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default())
}

fn lenient_string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_object())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
                .collect()
        })
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingStep,
    WrongOrder,
    InformalDecision,
    NoJustification,
    Retroactive,
}

/// A single procedural violation. Immutable once produced; created only by
/// the compliance checks.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub description: String,
    pub severity: Severity,
    pub evidence_text: Option<String>,
    pub evidence_time: Option<String>,
    pub violated_rule: Option<String>,
}

/// Aggregate compliance verdict for one case. Recomputed on every analysis
/// run, never incrementally updated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComplianceResult {
    pub case_type_id: Option<String>,
    pub compliance_score: u8,
    pub risk_score: u8,
    pub severity_level: Severity,
    pub violations: Vec<Violation>,
    pub summary: String,
    pub recommendation: String,
    pub checked_at: u64,
}

/// Summary of a prior case from the same institution, used as comparison
/// population for bias detection. Supplied most-recent-first by the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CaseSummary {
    pub compliance_score: Option<u8>,
    pub event_count: u32,
    pub officials: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasKind {
    Ethnic,
    Political,
    Economic,
    Regional,
    Personal,
}

/// One flagged anomaly. `confidence` and `deviation_score` are always
/// produced together; `comparison_data` records the statistics the flag was
/// derived from.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BiasIndicator {
    pub kind: BiasKind,
    pub description: String,
    pub confidence: f64,
    pub deviation_score: f64,
    pub comparison_data: serde_json::Value,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BiasAnalysisResult {
    pub flags: Vec<BiasIndicator>,
    pub overall_bias_risk: u8,
    pub is_anomaly: bool,
    pub comparison_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_malformed_required_steps_default_to_empty() {
        let json = r#"{
            "id": "ct-1",
            "name": "Eviction hearing",
            "required_steps": "not a list",
            "forbidden_actions": [1, 2, 3],
            "time_limits": ["also", "wrong"]
        }"#;
        let def: CaseTypeDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.required_steps, Vec::<String>::new());
        assert_eq!(def.forbidden_actions, Vec::<String>::new());
        assert!(def.time_limits.is_empty());
    }

    #[test]
    fn test_well_formed_catalog_entry_round_trips() {
        let json = r#"{
            "id": "ct-2",
            "name": "Administrative appeal",
            "required_steps": ["Rights reading", "Hearing opened"],
            "forbidden_actions": ["Verbal-only ruling"],
            "time_limits": {"Hearing opened": "30 days"}
        }"#;
        let def: CaseTypeDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.required_steps.len(), 2);
        assert_eq!(def.forbidden_actions, vec!["Verbal-only ruling"]);
        assert_eq!(def.time_limits["Hearing opened"], "30 days");
    }

    #[test]
    fn test_missing_rule_fields_default_to_empty() {
        let json = r#"{"id": "ct-3", "name": "Minimal"}"#;
        let def: CaseTypeDefinition = serde_json::from_str(json).unwrap();
        assert!(def.required_steps.is_empty());
        assert!(def.forbidden_actions.is_empty());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_violation_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ViolationKind::MissingStep).unwrap();
        assert_eq!(json, "\"missing_step\"");
        let json = serde_json::to_string(&ViolationKind::NoJustification).unwrap();
        assert_eq!(json, "\"no_justification\"");
    }
}
