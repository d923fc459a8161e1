pub mod checks;
pub mod matcher;
pub mod patterns;
pub mod scoring;
pub mod selector;
pub mod severity;
pub mod summary;

use case_types::{CaseTypeDefinition, ComplianceResult, ProcedureEvent, Violation};

pub use matcher::step_matches;
pub use scoring::{score_violations, ScoreBreakdown};
pub use selector::select_case_type;

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full analysis over one case's ordered event list: all five
    /// checks, score aggregation, summary and recommendation text.
    ///
    /// Without a resolved case type only the type-independent checks run.
    pub fn analyze(
        &self,
        events: &[ProcedureEvent],
        case_type: Option<&CaseTypeDefinition>,
    ) -> ComplianceResult {
        let violations = self.check_events(events, case_type);
        let breakdown = scoring::score_violations(&violations, events.len());

        ComplianceResult {
            case_type_id: case_type.map(|ct| ct.id.clone()),
            compliance_score: breakdown.compliance_score,
            risk_score: breakdown.risk_score,
            severity_level: breakdown.severity_level,
            summary: summary::compose_summary(&violations, events.len()),
            recommendation: summary::compose_recommendation(&violations),
            violations,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Run only the violation checks (for testing and partial pipelines).
    pub fn check_events(
        &self,
        events: &[ProcedureEvent],
        case_type: Option<&CaseTypeDefinition>,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(case_type) = case_type {
            violations.extend(checks::check_missing_steps(events, case_type));
            violations.extend(checks::check_step_order(events, case_type));
            violations.extend(checks::check_forbidden_actions(events, case_type));
        }
        violations.extend(checks::check_early_decision(events));
        violations.extend(checks::check_justifications(events));

        violations
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
