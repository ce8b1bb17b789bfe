use crate::app::{App, Focus};
use crate::backend::AnalysisBackend;
use crate::ui::common::{ACCENT, MUTED_COLOR, PLACEHOLDER, SPINNER};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const BUTTON_LABEL: &str = "Analyze Agreement";
pub const BUTTON_LOADING_LABEL: &str = "Consulting AI...";

/// Cursor glyph appended to the text while the input has focus
const CURSOR: char = '▏';

pub fn render<B: AnalysisBackend + 'static>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(3),    // Text area
        Constraint::Length(1), // Button
    ])
    .split(area);

    render_text_area(frame, app, chunks[0]);
    frame.render_widget(Paragraph::new(button_line(app)), chunks[1]);
}

fn render_text_area<B: AnalysisBackend + 'static>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let focused = app.focus() == Focus::Input;
    let border = if focused { ACCENT } else { MUTED_COLOR };
    let block = Block::default()
        .title(" Legal Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let paragraph = if app.text().is_empty() {
        let mut spans = vec![Span::styled(PLACEHOLDER, Style::default().fg(MUTED_COLOR))];
        if focused {
            spans.insert(0, Span::raw(CURSOR.to_string()));
        }
        Paragraph::new(Line::from(spans))
    } else {
        let mut text = app.text().to_string();
        if focused {
            text.push(CURSOR);
        }
        // Keep the tail (where typing happens) in view, counting wrapped rows
        let visible = area.height.saturating_sub(2);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let rows = paragraph.line_count(area.width.saturating_sub(2));
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        paragraph.scroll((rows.saturating_sub(visible), 0))
    };

    frame.render_widget(paragraph.block(block), area);
}

/// The submit button; disabled while a request is in flight.
#[must_use]
pub fn button_line<B: AnalysisBackend + 'static>(app: &App<B>) -> Line<'static> {
    if app.can_submit() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {BUTTON_LABEL} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+S", Style::default().fg(MUTED_COLOR)),
        ])
    } else {
        let spinner = SPINNER[app.tick() % SPINNER.len()];
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {spinner} {BUTTON_LOADING_LABEL} "),
                Style::default()
                    .fg(MUTED_COLOR)
                    .bg(Color::Rgb(40, 40, 40))
                    .add_modifier(Modifier::DIM),
            ),
        ])
    }
}
