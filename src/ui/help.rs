use crate::ui::common::{centered_rect, ACCENT};
use ratatui::{
    Frame,
    layout::{Rect, Alignment},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Clear},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let help_area = centered_rect(50, 16, area);

    // Clear background
    frame.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(Span::styled("CONTROLS", Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from("Ctrl+S     Analyze agreement"),
        Line::from("Enter      New line"),
        Line::from("Ctrl+L     Clear input"),
        Line::from("Tab        Switch input/results"),
        Line::from("j/k        Scroll results"),
        Line::from("Esc/q      Quit (from results)"),
        Line::from("Ctrl+Q     Quit"),
        Line::from("F1         Toggle help"),
        Line::from(""),
        Line::from(Span::styled("Press F1 to close", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)))
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, help_area);
}
