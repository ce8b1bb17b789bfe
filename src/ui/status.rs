use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use crate::app::{App, Focus};
use crate::backend::AnalysisBackend;
use crate::controller::{RequestState, MIN_TEXT_CHARS};
use crate::ui::common::{ACCENT, DANGER_COLOR, MUTED_COLOR};

pub fn render<B: AnalysisBackend + 'static>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let focus = match app.focus() {
        Focus::Input => " INPUT ",
        Focus::Results => " RESULTS ",
    };

    // Character count turns red until the text is long enough to submit
    let count_style = if app.char_count() < MIN_TEXT_CHARS {
        Style::default().fg(DANGER_COLOR)
    } else {
        Style::default()
    };

    let phase_style = match app.state() {
        RequestState::Idle => Style::default().fg(MUTED_COLOR),
        RequestState::Loading => Style::default().fg(Color::Yellow),
        RequestState::Succeeded(_) => Style::default().fg(Color::Green),
        RequestState::Failed(_) => Style::default().fg(DANGER_COLOR),
    };

    let line = Line::from(vec![
        Span::styled(focus, Style::default().fg(Color::Black).bg(ACCENT)),
        Span::styled(format!("  {} chars", app.char_count()), count_style),
        Span::styled(format!("  {}", app.state().phase()), phase_style),
        Span::styled(format!("  ▸ {}", app.endpoint()), Style::default().fg(MUTED_COLOR)),
        Span::styled("  F1 help", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
