pub mod alert;
pub mod common;
pub mod help;
pub mod input;
pub mod results;
pub mod status;
pub mod wheel;

use crate::app::App;
use crate::backend::AnalysisBackend;
use common::{MUTED_COLOR, SUBTITLE, TITLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Share of the body given to the input card once results are on screen
pub const INPUT_SHARE_WITH_RESULTS: u16 = 40;

pub fn render<B: AnalysisBackend + 'static>(frame: &mut Frame, app: &App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    if app.result().is_some() {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(INPUT_SHARE_WITH_RESULTS),
                Constraint::Min(0),
            ])
            .split(chunks[1]);
        input::render(frame, app, body[0]);
        results::render(frame, app, body[1]);
    } else {
        input::render(frame, app, chunks[1]);
    }

    status::render(frame, app, chunks[2]);

    if app.show_help() {
        help::render(frame, frame.area());
    }

    // Alert goes on top of everything
    if let Some(message) = app.alert() {
        alert::render(frame, message, frame.area());
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(MUTED_COLOR))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
