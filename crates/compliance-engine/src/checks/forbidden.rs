use case_types::{CaseTypeDefinition, ProcedureEvent, Severity, Violation, ViolationKind};

use crate::matcher::step_matches;

/// Flag every event matching a forbidden-action rule of the case type.
/// Each match carries the event's action text and timestamp as evidence.
pub fn check_forbidden_actions(
    events: &[ProcedureEvent],
    case_type: &CaseTypeDefinition,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for event in events {
        for forbidden in &case_type.forbidden_actions {
            if step_matches(&event.action, forbidden) {
                violations.push(Violation {
                    kind: ViolationKind::InformalDecision,
                    description: format!(
                        "Forbidden action performed at event {}: {}",
                        event.step_number, event.action
                    ),
                    severity: Severity::High,
                    evidence_text: Some(event.action.clone()),
                    evidence_time: event.timestamp_label.clone(),
                    violated_rule: Some(forbidden.clone()),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(step_number: u32, action: &str, timestamp: Option<&str>) -> ProcedureEvent {
        ProcedureEvent {
            step_number,
            action: action.to_string(),
            speaker: None,
            timestamp_label: timestamp.map(str::to_string),
            legal_reference: None,
            confidence: 1.0,
        }
    }

    fn case_type(forbidden: &[&str]) -> CaseTypeDefinition {
        CaseTypeDefinition {
            id: "ct".to_string(),
            name: "Test".to_string(),
            required_steps: Vec::new(),
            forbidden_actions: forbidden.iter().map(|s| s.to_string()).collect(),
            time_limits: Default::default(),
        }
    }

    #[test]
    fn test_flags_forbidden_action_with_evidence() {
        let ct = case_type(&["Verbal-only ruling"]);
        let events = vec![event(3, "Verbal-only ruling issued", Some("10:42"))];
        let violations = check_forbidden_actions(&events, &ct);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::InformalDecision);
        assert_eq!(violations[0].severity, Severity::High);
        assert_eq!(
            violations[0].evidence_text.as_deref(),
            Some("Verbal-only ruling issued")
        );
        assert_eq!(violations[0].evidence_time.as_deref(), Some("10:42"));
        assert_eq!(
            violations[0].violated_rule.as_deref(),
            Some("Verbal-only ruling")
        );
    }

    #[test]
    fn test_clean_events_pass() {
        let ct = case_type(&["Verbal-only ruling"]);
        let events = vec![event(1, "Hearing opened", None)];
        assert!(check_forbidden_actions(&events, &ct).is_empty());
    }

    #[test]
    fn test_empty_forbidden_list_flags_nothing() {
        let ct = case_type(&[]);
        let events = vec![event(1, "Anything at all", None)];
        assert!(check_forbidden_actions(&events, &ct).is_empty());
    }
}
