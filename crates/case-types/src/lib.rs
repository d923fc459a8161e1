pub mod error;
pub mod types;

pub use error::AnalysisError;
pub use types::{
    BiasAnalysisResult, BiasIndicator, BiasKind, CaseSummary, CaseTypeDefinition,
    ComplianceResult, ProcedureEvent, Severity, Violation, ViolationKind,
};
