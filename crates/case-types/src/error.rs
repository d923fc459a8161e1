use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Bias analysis requires a prior compliance score as baseline.
    #[error("case {0} has no compliance report; run compliance analysis first")]
    MissingBaseline(String),

    /// A failure raised by an external collaborator (event source, catalog,
    /// case store, report sink).
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}
