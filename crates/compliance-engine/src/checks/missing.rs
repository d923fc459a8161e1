use case_types::{CaseTypeDefinition, ProcedureEvent, Violation, ViolationKind};

use crate::matcher::step_matches;
use crate::severity::severity_for_missing_step;

/// Emit one `missing_step` violation for every required step no event
/// matches. Severity comes from the keyword table in [`crate::severity`].
pub fn check_missing_steps(
    events: &[ProcedureEvent],
    case_type: &CaseTypeDefinition,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for step in &case_type.required_steps {
        let found = events.iter().any(|event| step_matches(&event.action, step));
        if !found {
            violations.push(Violation {
                kind: ViolationKind::MissingStep,
                description: format!("Required step not found in proceeding: {}", step),
                severity: severity_for_missing_step(step),
                evidence_text: None,
                evidence_time: None,
                violated_rule: Some(step.clone()),
            });
        }
    }

    violations
}
