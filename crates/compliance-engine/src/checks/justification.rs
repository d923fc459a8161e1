use case_types::{ProcedureEvent, Severity, Violation, ViolationKind};

use crate::patterns::{contains_any, DECISION_KEYWORDS};

/// Type-independent check: every decision-like event must cite a legal
/// reference. A blank reference counts as missing.
pub fn check_justifications(events: &[ProcedureEvent]) -> Vec<Violation> {
    events
        .iter()
        .filter(|e| contains_any(&e.action, DECISION_KEYWORDS))
        .filter(|e| {
            e.legal_reference
                .as_deref()
                .map_or(true, |r| r.trim().is_empty())
        })
        .map(|event| Violation {
            kind: ViolationKind::NoJustification,
            description: format!(
                "Decision at event {} cites no legal basis: {}",
                event.step_number, event.action
            ),
            severity: Severity::Medium,
            evidence_text: Some(event.action.clone()),
            evidence_time: event.timestamp_label.clone(),
            violated_rule: None,
        })
        .collect()
}
