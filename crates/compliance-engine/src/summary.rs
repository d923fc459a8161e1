//! Deterministic summary and recommendation rendering.
//!
//! Fixed templates and a rule-to-sentence table, never a language-model
//! call; the output must be reproducible for audit.

use case_types::{Severity, Violation, ViolationKind};

pub fn compose_summary(violations: &[Violation], event_count: usize) -> String {
    if violations.is_empty() {
        return format!(
            "No procedural violations detected across {} recorded event(s). \
             The proceeding follows the expected procedure.",
            event_count
        );
    }

    let critical = count_severity(violations, Severity::Critical);
    let high = count_severity(violations, Severity::High);
    format!(
        "Detected {} procedural violation(s) across {} recorded event(s): \
         {} critical, {} high severity.",
        violations.len(),
        event_count,
        critical,
        high
    )
}

pub fn compose_recommendation(violations: &[Violation]) -> String {
    let mut sentences: Vec<&str> = Vec::new();

    if violations.iter().any(|v| v.severity == Severity::Critical) {
        sentences.push("URGENT: immediate human review required.");
    }
    if has_kind(violations, ViolationKind::MissingStep) {
        sentences.push(
            "Review the case file to confirm whether the missing steps were performed off the record.",
        );
    }
    if has_kind(violations, ViolationKind::WrongOrder) {
        sentences.push("Verify the transcript against the mandated procedural order.");
    }
    if has_kind(violations, ViolationKind::NoJustification) {
        sentences.push("Request written legal justification for decisions lacking a cited basis.");
    }
    if has_kind(violations, ViolationKind::InformalDecision) {
        sentences.push("Escalate to the supervising authority for procedural review.");
    }

    if sentences.is_empty() {
        "No action required.".to_string()
    } else {
        sentences.join(" ")
    }
}

fn count_severity(violations: &[Violation], severity: Severity) -> usize {
    violations.iter().filter(|v| v.severity == severity).count()
}

fn has_kind(violations: &[Violation], kind: ViolationKind) -> bool {
    violations.iter().any(|v| v.kind == kind)
}
