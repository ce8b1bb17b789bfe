use crate::backend::{AnalysisBackend, AnalysisError, Outcome};
use crate::controller::{Controller, RequestState, StateEvent, SubmitError};
use crate::types::AnalysisResult;
use std::cell::Cell;
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

/// Interactive session: the controller plus everything only the TUI cares about.
pub struct App<B> {
    controller: Controller<B>,
    events: Receiver<StateEvent>,
    pending: Option<Receiver<Outcome>>,
    endpoint: String,
    focus: Focus,
    results_scroll: u16,
    /// Furthest the results card can scroll, refreshed on every draw
    results_max_scroll: Cell<u16>,
    alert: Option<String>,
    show_help: bool,
    tick: usize,
}

impl<B: AnalysisBackend + 'static> App<B> {
    pub fn new(mut controller: Controller<B>, endpoint: impl Into<String>) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            events,
            pending: None,
            endpoint: endpoint.into(),
            focus: Focus::Input,
            results_scroll: 0,
            results_max_scroll: Cell::new(0),
            alert: None,
            show_help: false,
            tick: 0,
        }
    }

    // Getters
    #[must_use]
    pub fn text(&self) -> &str { self.controller.text() }
    #[must_use]
    pub fn char_count(&self) -> usize { self.controller.char_count() }
    #[must_use]
    pub fn state(&self) -> &RequestState { self.controller.state() }
    #[must_use]
    pub fn is_loading(&self) -> bool { self.controller.is_loading() }
    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> { self.controller.result() }
    #[must_use]
    pub fn endpoint(&self) -> &str { &self.endpoint }
    #[must_use]
    pub const fn focus(&self) -> Focus { self.focus }
    #[must_use]
    pub fn results_scroll(&self) -> u16 { self.results_scroll.min(self.results_max_scroll.get()) }
    #[must_use]
    pub fn alert(&self) -> Option<&str> { self.alert.as_deref() }
    #[must_use]
    pub const fn show_help(&self) -> bool { self.show_help }
    #[must_use]
    pub const fn tick(&self) -> usize { self.tick }

    /// Submit control is disabled while a request is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool { !self.controller.is_loading() }

    // Editing
    pub fn insert_char(&mut self, c: char) {
        self.controller.text_mut().push(c);
    }

    /// Pasted text arrives in one piece; normalize CRLF from some terminals.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        self.controller.text_mut().push_str(&normalized);
    }

    pub fn backspace(&mut self) {
        self.controller.text_mut().pop();
    }

    pub fn clear_input(&mut self) {
        self.controller.set_text(String::new());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.controller.set_text(text);
    }

    /// Start an analysis in the background.
    pub fn submit(&mut self) {
        match self.controller.dispatch() {
            Ok(rx) => self.pending = Some(rx),
            Err(err @ SubmitError::TooShort { .. }) => self.alert = Some(err.to_string()),
            Err(SubmitError::InFlight) => debug!("submit pressed while loading"),
        }
    }

    /// Collect a finished request, then react to state events.
    pub fn poll(&mut self) {
        if let Some(rx) = &self.pending {
            let outcome = match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(AnalysisError::Unreachable(
                    "analysis worker exited without a response".to_string(),
                ))),
            };
            if let Some(outcome) = outcome {
                self.pending = None;
                self.controller.complete(outcome);
            }
        }

        while let Ok(event) = self.events.try_recv() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::Started => {}
            // Bring the fresh verdict into view
            StateEvent::Succeeded => {
                self.focus = Focus::Results;
                self.results_scroll = 0;
            }
            StateEvent::Failed { message } => self.alert = Some(message),
        }
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    // Overlays
    pub fn dismiss_alert(&mut self) { self.alert = None; }

    pub fn toggle_help(&mut self) { self.show_help = !self.show_help; }

    // Navigation
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.result().is_some() => Focus::Results,
            Focus::Input | Focus::Results => Focus::Input,
        };
    }

    pub fn scroll_up(&mut self) {
        self.results_scroll = self.results_scroll().saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.result().is_some() {
            self.results_scroll = self
                .results_scroll()
                .saturating_add(1)
                .min(self.results_max_scroll.get());
        }
    }

    /// Record how many wrapped rows the results card has and how many fit.
    pub fn fit_results(&self, content_rows: u16, visible_rows: u16) {
        self.results_max_scroll.set(content_rows.saturating_sub(visible_rows));
    }
}
