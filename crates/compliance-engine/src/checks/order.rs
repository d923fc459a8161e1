use case_types::{CaseTypeDefinition, ProcedureEvent, Severity, Violation, ViolationKind};

use crate::matcher::step_matches;

/// Detect local inversions of the canonical required-step order.
///
/// Events are mapped, in performed order, to the catalog index of the first
/// required step each matches; every adjacent pair of found indices where
/// the later event maps to an earlier catalog position yields one
/// `wrong_order` violation. Only adjacent pairs are compared, so a single
/// misplaced step produces one report instead of a cascade.
pub fn check_step_order(
    events: &[ProcedureEvent],
    case_type: &CaseTypeDefinition,
) -> Vec<Violation> {
    let found: Vec<(usize, u32)> = events
        .iter()
        .filter_map(|event| {
            case_type
                .required_steps
                .iter()
                .position(|step| step_matches(&event.action, step))
                .map(|idx| (idx, event.step_number))
        })
        .collect();

    let mut violations = Vec::new();
    for pair in found.windows(2) {
        let (earlier_idx, earlier_step) = pair[0];
        let (later_idx, later_step) = pair[1];
        if later_idx < earlier_idx {
            violations.push(Violation {
                kind: ViolationKind::WrongOrder,
                description: format!(
                    "Step '{}' (event {}) was performed before '{}' (event {}), \
                     reversing the expected procedural order",
                    case_type.required_steps[earlier_idx],
                    earlier_step,
                    case_type.required_steps[later_idx],
                    later_step,
                ),
                severity: Severity::Medium,
                evidence_text: None,
                evidence_time: None,
                violated_rule: Some(format!(
                    "'{}' must precede '{}'",
                    case_type.required_steps[later_idx], case_type.required_steps[earlier_idx]
                )),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(step_number: u32, action: &str) -> ProcedureEvent {
        ProcedureEvent {
            step_number,
            action: action.to_string(),
            speaker: None,
            timestamp_label: None,
            legal_reference: None,
            confidence: 1.0,
        }
    }

    fn case_type(required: &[&str]) -> CaseTypeDefinition {
        CaseTypeDefinition {
            id: "ct".to_string(),
            name: "Test".to_string(),
            required_steps: required.iter().map(|s| s.to_string()).collect(),
            forbidden_actions: Vec::new(),
            time_limits: Default::default(),
        }
    }

    #[test]
    fn test_single_inversion_yields_one_violation() {
        let ct = case_type(&["Opening statement", "Closing statement"]);
        let events = vec![
            event(1, "Closing statement"),
            event(2, "Opening statement"),
        ];
        let violations = check_step_order(&events, &ct);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::WrongOrder);
        assert_eq!(violations[0].severity, Severity::Medium);
    }

    #[test]
    fn test_correct_order_yields_no_violations() {
        let ct = case_type(&["Opening statement", "Closing statement"]);
        let events = vec![
            event(1, "Opening statement"),
            event(2, "Closing statement"),
        ];
        assert!(check_step_order(&events, &ct).is_empty());
    }

    #[test]
    fn test_unmatched_events_are_skipped() {
        // The interleaved recess does not break adjacency of found steps.
        let ct = case_type(&["Opening statement", "Closing statement"]);
        let events = vec![
            event(1, "Closing statement"),
            event(2, "Recess called"),
            event(3, "Opening statement"),
        ];
        assert_eq!(check_step_order(&events, &ct).len(), 1);
    }

    #[test]
    fn test_only_local_inversions_are_reported() {
        // C A B: one inversion at the C->A boundary; A->B is in order.
        let ct = case_type(&["Alpha reading", "Beta reading", "Gamma reading"]);
        let events = vec![
            event(1, "Gamma reading"),
            event(2, "Alpha reading"),
            event(3, "Beta reading"),
        ];
        assert_eq!(check_step_order(&events, &ct).len(), 1);
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let ct = case_type(&[]);
        assert!(check_step_order(&[], &ct).is_empty());
    }
}
