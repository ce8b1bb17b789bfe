pub mod http;
pub mod traits;

pub use http::{HttpBackend, DEFAULT_ENDPOINT};
pub use traits::{AnalysisBackend, AnalysisError, Outcome, UNREACHABLE_MESSAGE};
