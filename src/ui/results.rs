use crate::app::{App, Focus};
use crate::backend::AnalysisBackend;
use crate::report::NO_RED_FLAGS;
use crate::types::AnalysisResult;
use crate::ui::common::{ACCENT, DANGER_COLOR, MUTED_COLOR};
use crate::ui::wheel;
use crate::verdict::{self, VerdictPresentation};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the trust wheel card
pub const WHEEL_CARD_WIDTH: u16 = 28;

pub fn render<B: AnalysisBackend + 'static>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let Some(result) = app.result() else {
        return;
    };
    let presentation = verdict::render(result.trust_score);

    let chunks = Layout::horizontal([
        Constraint::Length(WHEEL_CARD_WIDTH),
        Constraint::Min(0),
    ])
    .split(area);

    render_wheel_card(frame, &presentation, chunks[0]);
    render_summary_card(frame, app, result, chunks[1]);
}

fn render_wheel_card(frame: &mut Frame, presentation: &VerdictPresentation, area: Rect) {
    let block = Block::default()
        .title(" Trust Score ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Wheel
        Constraint::Length(1), // Headline
        Constraint::Length(1), // Tier label
    ])
    .split(inner);

    wheel::render(frame, presentation, chunks[0]);

    let headline = Paragraph::new(Line::from(Span::styled(
        presentation.headline,
        Style::default().fg(presentation.color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(headline, chunks[1]);

    let label = Paragraph::new(Line::from(Span::styled(
        presentation.label,
        Style::default().fg(MUTED_COLOR),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, chunks[2]);
}

/// Lines of the summary card: summary verbatim, then red flags in order.
#[must_use]
pub fn summary_lines(result: &AnalysisResult) -> Vec<Line<'_>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Summary", heading.fg(ACCENT)))];

    lines.extend(result.summary.lines().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Red Flags", heading.fg(DANGER_COLOR))));

    if result.has_red_flags() {
        for item in &result.gotchas {
            lines.push(Line::from(vec![
                Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
                Span::raw(item.as_str()),
            ]));
        }
    } else {
        lines.push(Line::from(Span::styled(
            NO_RED_FLAGS,
            Style::default().fg(verdict::Tier::Safe.color()),
        )));
    }

    lines
}

fn render_summary_card<B: AnalysisBackend + 'static>(
    frame: &mut Frame,
    app: &App<B>,
    result: &AnalysisResult,
    area: Rect,
) {
    let border = if app.focus() == Focus::Results { ACCENT } else { MUTED_COLOR };
    // Stale verdict stays on screen while the next one loads
    let title = if app.is_loading() { " Analysis (previous) " } else { " Analysis " };

    let paragraph = Paragraph::new(summary_lines(result)).wrap(Wrap { trim: false });
    let rows = paragraph.line_count(area.width.saturating_sub(2));
    app.fit_results(
        u16::try_from(rows).unwrap_or(u16::MAX),
        area.height.saturating_sub(2),
    );

    let paragraph = paragraph
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .scroll((app.results_scroll(), 0));

    frame.render_widget(paragraph, area);
}
