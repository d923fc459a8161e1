//! Severity inference for missing required steps.
//!
//! Required-step catalogs are free text with no severity field, so severity
//! is inferred from domain vocabulary. The table is ordered; the first rule
//! whose keywords appear in the step text wins.

use case_types::Severity;

/// Ordered keyword rules, most severe first.
const STEP_SEVERITY_RULES: &[(&[&str], Severity)] = &[
    (&["rights", "notify"], Severity::Critical),
    (&["hearing", "evidence"], Severity::High),
    (&["document", "record"], Severity::Medium),
];

/// Classify how severe skipping `step_text` would be.
pub fn severity_for_missing_step(step_text: &str) -> Severity {
    let step_lower = step_text.to_lowercase();
    for (keywords, severity) in STEP_SEVERITY_RULES {
        if keywords.iter().any(|kw| step_lower.contains(kw)) {
            return *severity;
        }
    }
    Severity::Low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_steps_are_critical() {
        assert_eq!(severity_for_missing_step("Rights reading"), Severity::Critical);
        assert_eq!(
            severity_for_missing_step("Notify defendant of appeal window"),
            Severity::Critical
        );
    }

    #[test]
    fn test_hearing_and_evidence_steps_are_high() {
        assert_eq!(severity_for_missing_step("Hearing opened"), Severity::High);
        assert_eq!(severity_for_missing_step("Evidence submitted"), Severity::High);
    }

    #[test]
    fn test_document_steps_are_medium() {
        assert_eq!(
            severity_for_missing_step("Document case file"),
            Severity::Medium
        );
        assert_eq!(
            severity_for_missing_step("Record statement in minutes"),
            Severity::Medium
        );
    }

    #[test]
    fn test_unclassified_steps_are_low() {
        assert_eq!(severity_for_missing_step("Roll call"), Severity::Low);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Contains both "rights" and "hearing"; the critical rule is ordered
        // first.
        assert_eq!(
            severity_for_missing_step("Hearing on rights of the accused"),
            Severity::Critical
        );
    }
}
