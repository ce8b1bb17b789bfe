//! Request lifecycle: input text, one in-flight analysis, last verdict.

use crate::backend::{AnalysisBackend, AnalysisError, Outcome};
use crate::types::{AnalysisRequest, AnalysisResult};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

/// Shortest input, in characters, that may be submitted.
pub const MIN_TEXT_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    Failed(AnalysisError),
}

impl RequestState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short name for the status bar.
    #[must_use]
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Analyzing",
            Self::Succeeded(_) => "Done",
            Self::Failed(_) => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please paste a longer text.")]
    TooShort { len: usize, min: usize },
    #[error("An analysis is already in progress.")]
    InFlight,
}

/// Published to subscribers on every state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    Started,
    Succeeded,
    Failed { message: String },
}

/// Owns the input text and the request state machine.
pub struct Controller<B> {
    backend: Arc<B>,
    text: String,
    state: RequestState,
    result: Option<AnalysisResult>,
    subscribers: Vec<Sender<StateEvent>>,
}

impl<B: AnalysisBackend + 'static> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self::with_shared(Arc::new(backend))
    }

    pub fn with_shared(backend: Arc<B>) -> Self {
        Self {
            backend,
            text: String::new(),
            state: RequestState::Idle,
            result: None,
            subscribers: Vec::new(),
        }
    }

    // Getters
    #[must_use]
    pub fn text(&self) -> &str { &self.text }
    #[must_use]
    pub const fn state(&self) -> &RequestState { &self.state }
    #[must_use]
    pub const fn is_loading(&self) -> bool { self.state.is_loading() }
    #[must_use]
    pub fn backend(&self) -> &B { &self.backend }

    /// Latest successful verdict. Survives later failures and stays visible
    /// while a new request is loading.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the pending input. No validation happens here.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Direct access for in-place editing.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn subscribe(&mut self) -> Receiver<StateEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Validate the input and enter `Loading`.
    ///
    /// On error nothing changes and no request may be sent.
    pub fn begin(&mut self) -> Result<AnalysisRequest, SubmitError> {
        if self.state.is_loading() {
            debug!("submit ignored, analysis already in flight");
            return Err(SubmitError::InFlight);
        }

        let len = self.char_count();
        if len < MIN_TEXT_CHARS {
            debug!(len, "submit rejected, text too short");
            return Err(SubmitError::TooShort { len, min: MIN_TEXT_CHARS });
        }

        info!(chars = len, "submitting text for analysis");
        self.state = RequestState::Loading;
        self.publish(&StateEvent::Started);

        Ok(AnalysisRequest { text: self.text.clone() })
    }

    /// Apply the outcome of the request started by [`Self::begin`].
    pub fn complete(&mut self, outcome: Outcome) -> &RequestState {
        if !self.state.is_loading() {
            warn!("analysis outcome arrived with no request in flight, dropping it");
            return &self.state;
        }

        match outcome {
            Ok(result) => {
                info!(trust_score = result.trust_score, "analysis succeeded");
                self.result = Some(result.clone());
                self.state = RequestState::Succeeded(result);
                self.publish(&StateEvent::Succeeded);
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                let message = err.user_message();
                self.state = RequestState::Failed(err);
                self.publish(&StateEvent::Failed { message });
            }
        }

        &self.state
    }

    /// Run one analysis on the calling thread.
    pub fn submit(&mut self) -> Result<&RequestState, SubmitError> {
        let request = self.begin()?;
        let outcome = self.backend.analyze(&request);
        Ok(self.complete(outcome))
    }

    /// Run one analysis on a worker thread.
    ///
    /// The returned receiver yields exactly one outcome, which the caller
    /// passes to [`Self::complete`].
    pub fn dispatch(&mut self) -> Result<Receiver<Outcome>, SubmitError> {
        let request = self.begin()?;
        let backend = Arc::clone(&self.backend);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let outcome = backend.analyze(&request);
            let _ = tx.send(outcome);
        });

        Ok(rx)
    }

    fn publish(&mut self, event: &StateEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
