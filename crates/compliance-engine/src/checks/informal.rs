use case_types::{ProcedureEvent, Severity, Violation, ViolationKind};

use crate::patterns::{contains_any, DECISION_KEYWORDS, EVIDENCE_KEYWORDS};

/// Type-independent temporal heuristic: a decision announced before any
/// evidence was handled. Compares the earliest decision-like event against
/// the earliest evidence-like event by step number; emits at most one
/// violation. Runs whether or not a case type was resolved.
pub fn check_early_decision(events: &[ProcedureEvent]) -> Vec<Violation> {
    let first_decision = events
        .iter()
        .filter(|e| contains_any(&e.action, DECISION_KEYWORDS))
        .min_by_key(|e| e.step_number);
    let first_evidence = events
        .iter()
        .filter(|e| contains_any(&e.action, EVIDENCE_KEYWORDS))
        .min_by_key(|e| e.step_number);

    match (first_decision, first_evidence) {
        (Some(decision), Some(evidence)) if decision.step_number < evidence.step_number => {
            vec![Violation {
                kind: ViolationKind::InformalDecision,
                description: format!(
                    "Decision announced at event {} before evidence was handled at event {}",
                    decision.step_number, evidence.step_number
                ),
                severity: Severity::Critical,
                evidence_text: Some(decision.action.clone()),
                evidence_time: decision.timestamp_label.clone(),
                violated_rule: None,
            }]
        }
        _ => Vec::new(),
    }
}
