use crate::types::{AnalysisRequest, AnalysisResult};

/// Fixed message shown when the analysis service cannot be reached.
pub const UNREACHABLE_MESSAGE: &str = "Could not connect to backend.";

/// Result of one round trip to the analysis service.
pub type Outcome = Result<AnalysisResult, AnalysisError>;

/// Anything that can turn legal text into a verdict.
///
/// Implementations are shared with a worker thread, hence `Send + Sync`.
pub trait AnalysisBackend: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> Outcome;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Service answered with a non-success status.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// No response could be obtained.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// Success status, but the body was not a verdict.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl AnalysisError {
    /// Text for the alert overlay.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { detail, .. } => format!("Error: {detail}"),
            Self::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Malformed(_) => "Error: the backend returned an unreadable response.".to_string(),
        }
    }
}
