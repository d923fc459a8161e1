//! Synchronous analysis pipeline over the compliance and bias engines.
//!
//! The surrounding service supplies the external collaborators (event
//! extraction, case-type knowledge base, peer-case store, report
//! persistence) through the traits below; the pipeline itself owns no I/O
//! and no shared mutable state. A run is idempotent overwrite; concurrent
//! runs for the *same* case require an external serialization guarantee.

use bias_engine::PEER_CAP;
use case_types::{
    AnalysisError, BiasAnalysisResult, CaseSummary, CaseTypeDefinition, ComplianceResult,
    ProcedureEvent,
};
use compliance_engine::{select_case_type, ComplianceEngine};
use tracing::{debug, info};

/// Extraction collaborator: the reconstructed, step-ordered event list for
/// a recording.
pub trait EventSource {
    fn events(&self, recording_id: &str) -> anyhow::Result<Vec<ProcedureEvent>>;
}

/// Knowledge-base collaborator.
pub trait CaseTypeCatalog {
    fn catalog(&self) -> anyhow::Result<Vec<CaseTypeDefinition>>;
    fn case_type(&self, id: &str) -> anyhow::Result<Option<CaseTypeDefinition>>;
}

/// Case-store collaborator: peer cases from the same institution,
/// most-recent-first.
pub trait PeerCaseStore {
    fn peer_cases(
        &self,
        institution: &str,
        excluding: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<CaseSummary>>;
}

/// Persistence collaborator. Each result is written exactly once per
/// analysis run; bias indicators travel inside the bias result.
pub trait ReportSink {
    fn write_compliance(&self, case_id: &str, result: &ComplianceResult) -> anyhow::Result<()>;
    fn write_bias(&self, case_id: &str, result: &BiasAnalysisResult) -> anyhow::Result<()>;
}

pub struct CaseAnalyzer<'a> {
    events: &'a dyn EventSource,
    catalog: &'a dyn CaseTypeCatalog,
    peers: &'a dyn PeerCaseStore,
    sink: &'a dyn ReportSink,
    engine: ComplianceEngine,
}

impl<'a> CaseAnalyzer<'a> {
    pub fn new(
        events: &'a dyn EventSource,
        catalog: &'a dyn CaseTypeCatalog,
        peers: &'a dyn PeerCaseStore,
        sink: &'a dyn ReportSink,
    ) -> Self {
        Self {
            events,
            catalog,
            peers,
            sink,
            engine: ComplianceEngine::new(),
        }
    }

    /// Run the compliance pipeline for one case and persist the report.
    ///
    /// With no explicit `case_type_id` the best-matching catalog entry is
    /// selected from the observed events; if none matches, only the
    /// type-independent checks run.
    pub fn analyze_compliance(
        &self,
        case_id: &str,
        recording_id: &str,
        case_type_id: Option<&str>,
    ) -> Result<ComplianceResult, AnalysisError> {
        let events = self.events.events(recording_id)?;
        debug!(case_id, event_count = events.len(), "events loaded");

        let case_type = self.resolve_case_type(&events, case_type_id)?;
        match &case_type {
            Some(ct) => debug!(case_id, case_type = %ct.id, "case type resolved"),
            None => debug!(case_id, "no case type resolved; type-independent checks only"),
        }

        let result = self.engine.analyze(&events, case_type.as_ref());
        info!(
            case_id,
            violations = result.violations.len(),
            compliance_score = result.compliance_score,
            risk_score = result.risk_score,
            "compliance analysis complete"
        );

        self.sink.write_compliance(case_id, &result)?;
        Ok(result)
    }

    /// Run the bias analysis for a case that already has a compliance
    /// score and persist the result. A missing baseline is a hard error:
    /// there is nothing to compare without it.
    pub fn analyze_bias(
        &self,
        case_id: &str,
        institution: &str,
        baseline_score: Option<u8>,
        events: &[ProcedureEvent],
    ) -> Result<BiasAnalysisResult, AnalysisError> {
        let baseline =
            baseline_score.ok_or_else(|| AnalysisError::MissingBaseline(case_id.to_string()))?;

        let peers = self.peers.peer_cases(institution, case_id, PEER_CAP)?;
        debug!(case_id, peer_count = peers.len(), "peer cases loaded");

        let result = bias_engine::analyze_bias(baseline, events, &peers);
        info!(
            case_id,
            flags = result.flags.len(),
            bias_risk = result.overall_bias_risk,
            is_anomaly = result.is_anomaly,
            "bias analysis complete"
        );

        self.sink.write_bias(case_id, &result)?;
        Ok(result)
    }

    fn resolve_case_type(
        &self,
        events: &[ProcedureEvent],
        case_type_id: Option<&str>,
    ) -> Result<Option<CaseTypeDefinition>, AnalysisError> {
        match case_type_id {
            Some(id) => Ok(self.catalog.case_type(id)?),
            None => {
                let catalog = self.catalog.catalog()?;
                Ok(select_case_type(events, &catalog).cloned())
            }
        }
    }
}
