//! Violation list to bounded scores and an aggregate severity tier.

use case_types::{Severity, Violation};

/// Fixed per-severity deltas: (compliance penalty, risk increase).
fn deltas(severity: Severity) -> (i32, i32) {
    match severity {
        Severity::Critical => (25, 30),
        Severity::High => (15, 20),
        Severity::Medium => (8, 10),
        Severity::Low => (3, 5),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub compliance_score: u8,
    pub risk_score: u8,
    pub severity_level: Severity,
}

/// Aggregate a violation list into clamped scores and a tier.
///
/// `total_event_count` is accepted for summary rendering only; scores are
/// absolute and never normalized by event count.
pub fn score_violations(violations: &[Violation], _total_event_count: usize) -> ScoreBreakdown {
    let mut compliance: i32 = 100;
    let mut risk: i32 = 0;

    for violation in violations {
        let (penalty, increase) = deltas(violation.severity);
        compliance -= penalty;
        risk += increase;
    }

    let compliance_score = compliance.clamp(0, 100) as u8;
    let risk_score = risk.clamp(0, 100) as u8;

    ScoreBreakdown {
        compliance_score,
        risk_score,
        severity_level: severity_level(risk_score, violations),
    }
}

/// Tier from the risk sum OR the presence of a critical/high violation.
/// A single critical violation must never be diluted into a low tier by an
/// otherwise-small risk sum.
fn severity_level(risk_score: u8, violations: &[Violation]) -> Severity {
    let has = |s: Severity| violations.iter().any(|v| v.severity == s);

    if risk_score >= 70 || has(Severity::Critical) {
        Severity::Critical
    } else if risk_score >= 50 || has(Severity::High) {
        Severity::High
    } else if risk_score >= 25 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
