use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Verdict returned by the analysis service.
///
/// `trust_score` is kept exactly as received; clamping for display happens in
/// [`crate::verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trust_score: i64,
    pub summary: String,
    #[serde(default)]
    pub gotchas: Vec<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn has_red_flags(&self) -> bool {
        !self.gotchas.is_empty()
    }
}

/// Error body sent with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Detail text as shown to the user: strings verbatim, anything else as compact JSON.
    #[must_use]
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
