mod common;

use common::{verdict, FakeBackend, SAMPLE_TOS};
use legal_lens::app::{App, Focus};
use legal_lens::backend::{AnalysisError, UNREACHABLE_MESSAGE};
use legal_lens::controller::{Controller, RequestState};
use std::thread::sleep;
use std::time::Duration;

fn make_app(backend: FakeBackend) -> App<FakeBackend> {
    App::new(Controller::new(backend), "http://127.0.0.1:8000/analyze")
}

fn wait_until_settled(app: &mut App<FakeBackend>) {
    for _ in 0..500 {
        app.poll();
        if !app.is_loading() {
            return;
        }
        sleep(Duration::from_millis(5));
    }
    panic!("analysis never completed");
}

#[test]
fn test_app_initial_state() {
    let app = make_app(FakeBackend::ok(verdict(50, "ok", &[])));

    assert_eq!(app.focus(), Focus::Input);
    assert!(app.can_submit());
    assert!(app.alert().is_none());
    assert!(!app.show_help());
}

#[test]
fn test_editing() {
    let mut app = make_app(FakeBackend::ok(verdict(50, "ok", &[])));

    app.insert_char('a');
    app.insert_char('b');
    app.backspace();
    app.insert_str("c\r\nd\re");
    assert_eq!(app.text(), "ac\nd\ne");
    assert_eq!(app.char_count(), 6);

    app.clear_input();
    assert_eq!(app.text(), "");
}

#[test]
fn test_short_text_raises_alert() {
    let mut app = make_app(FakeBackend::ok(verdict(50, "ok", &[])));
    app.insert_str("too short");

    app.submit();

    assert_eq!(app.alert(), Some("Please paste a longer text."));
    assert_eq!(app.state(), &RequestState::Idle);
    assert!(app.can_submit());

    app.dismiss_alert();
    assert!(app.alert().is_none());
}

#[test]
fn test_success_scrolls_result_into_view() {
    let mut app = make_app(FakeBackend::ok(verdict(82, "ok", &[])));
    app.insert_str(SAMPLE_TOS);

    app.submit();
    assert!(app.is_loading());
    assert!(!app.can_submit());

    wait_until_settled(&mut app);

    assert_eq!(app.focus(), Focus::Results);
    assert_eq!(app.results_scroll(), 0);
    assert_eq!(app.result().map(|r| r.trust_score), Some(82));
    assert!(app.alert().is_none());
    assert!(app.can_submit());
}

#[test]
fn test_server_failure_alerts_detail() {
    let mut app = make_app(FakeBackend::new(Err(AnalysisError::Server {
        status: 422,
        detail: "text too ambiguous".to_string(),
    })));
    app.insert_str(SAMPLE_TOS);

    app.submit();
    wait_until_settled(&mut app);

    assert_eq!(app.alert(), Some("Error: text too ambiguous"));
    assert!(app.result().is_none());
    assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn test_transport_failure_alerts_generic_message() {
    let mut app = make_app(FakeBackend::new(Err(AnalysisError::Unreachable(
        "connection refused".to_string(),
    ))));
    app.insert_str(SAMPLE_TOS);

    app.submit();
    wait_until_settled(&mut app);

    assert_eq!(app.alert(), Some(UNREACHABLE_MESSAGE));
}

#[test]
fn test_focus_toggle_needs_result() {
    let mut app = make_app(FakeBackend::ok(verdict(82, "ok", &[])));

    app.toggle_focus();
    assert_eq!(app.focus(), Focus::Input);

    app.insert_str(SAMPLE_TOS);
    app.submit();
    wait_until_settled(&mut app);
    assert_eq!(app.focus(), Focus::Results);

    app.toggle_focus();
    assert_eq!(app.focus(), Focus::Input);
    app.toggle_focus();
    assert_eq!(app.focus(), Focus::Results);
}

#[test]
fn test_results_scroll() {
    let mut app = make_app(FakeBackend::ok(verdict(82, "ok", &["a", "b"])));

    app.scroll_down();
    assert_eq!(app.results_scroll(), 0, "nothing to scroll without a result");

    app.insert_str(SAMPLE_TOS);
    app.submit();
    wait_until_settled(&mut app);
    app.fit_results(10, 7);

    app.scroll_down();
    app.scroll_down();
    assert_eq!(app.results_scroll(), 2);
    app.scroll_up();
    app.scroll_up();
    app.scroll_up();
    assert_eq!(app.results_scroll(), 0);
}

#[test]
fn test_results_scroll_stops_at_last_row() {
    let mut app = make_app(FakeBackend::ok(verdict(82, "ok", &["a", "b"])));
    app.insert_str(SAMPLE_TOS);
    app.submit();
    wait_until_settled(&mut app);
    app.fit_results(10, 7);

    for _ in 0..50 {
        app.scroll_down();
    }
    assert_eq!(app.results_scroll(), 3);

    app.scroll_up();
    assert_eq!(app.results_scroll(), 2);
}

#[test]
fn test_results_scroll_without_overflow_stays_put() {
    let mut app = make_app(FakeBackend::ok(verdict(82, "ok", &[])));
    app.insert_str(SAMPLE_TOS);
    app.submit();
    wait_until_settled(&mut app);
    app.fit_results(4, 15);

    app.scroll_down();
    assert_eq!(app.results_scroll(), 0);
}

#[test]
fn test_help_toggle() {
    let mut app = make_app(FakeBackend::ok(verdict(50, "ok", &[])));

    app.toggle_help();
    assert!(app.show_help());
    app.toggle_help();
    assert!(!app.show_help());
}
