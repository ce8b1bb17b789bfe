//! Common UI constants and utilities shared across UI modules

use ratatui::layout::Rect;
use ratatui::style::Color;

pub const TITLE: &str = "Legal Lens";
pub const SUBTITLE: &str = "Paste a Terms of Service agreement below";
pub const PLACEHOLDER: &str = "Paste legal text here...";

/// Focus/border accent
pub const ACCENT: Color = Color::Cyan;

/// Secondary text - hints, placeholder, unfocused borders
pub const MUTED_COLOR: Color = Color::Rgb(120, 120, 120);

/// Unfilled part of the trust wheel
pub const TRACK_COLOR: Color = Color::Rgb(60, 60, 60);

pub const DANGER_COLOR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Spinner frames shown while a request is in flight
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Center a box of at most `width` x `height` inside `area`, keeping a 2-cell margin.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect { x, y, width, height }
}
