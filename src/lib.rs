pub mod app;
pub mod backend;
pub mod config;
pub mod controller;
pub mod logging;
pub mod report;
pub mod types;
pub mod ui;
pub mod verdict;

pub use backend::{AnalysisBackend, AnalysisError, HttpBackend};
pub use controller::{Controller, RequestState, StateEvent, SubmitError};
pub use types::{AnalysisRequest, AnalysisResult};
pub use verdict::{Tier, VerdictPresentation};
