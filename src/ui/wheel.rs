//! Trust wheel: a ring drawn on a braille canvas, filled clockwise from 12 o'clock.

use crate::ui::common::TRACK_COLOR;
use crate::verdict::VerdictPresentation;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Points},
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Points around the full ring
pub const RING_STEPS: usize = 180;

/// Headroom around the unit circle so the ring is not clipped
const BOUNDS_PADDING: f64 = 1.2;

/// Points on the unit circle covering `fraction` of a full turn.
///
/// Starts at the top and runs clockwise, so a fraction of 0.25 ends at 3 o'clock.
#[must_use]
pub fn arc_points(fraction: f64, steps: usize) -> Vec<(f64, f64)> {
    let fraction = fraction.clamp(0.0, 1.0);
    // Safe: fraction is in 0..=1, so the product is within 0..=steps
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (fraction * steps as f64).round() as usize;

    (0..count)
        .map(|i| {
            let angle = FRAC_PI_2 - TAU * i as f64 / steps as f64;
            (angle.cos(), angle.sin())
        })
        .collect()
}

/// Canvas bounds that keep the ring round, given cells about twice as tall as wide.
#[must_use]
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let ratio = f64::from(area.width) / (2.0 * f64::from(area.height.max(1)));
    let (x_half, y_half) = if ratio >= 1.0 {
        (BOUNDS_PADDING * ratio, BOUNDS_PADDING)
    } else {
        (BOUNDS_PADDING, BOUNDS_PADDING / ratio.max(f64::EPSILON))
    };

    ([-x_half, x_half], [-y_half, y_half])
}

pub fn render(frame: &mut Frame, presentation: &VerdictPresentation, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let track = arc_points(1.0, RING_STEPS);
    let arc = arc_points(presentation.gauge_fraction, RING_STEPS);
    let (x_bounds, y_bounds) = canvas_bounds(area);

    let label = format!("{}%", presentation.score);
    let cell_width = (x_bounds[1] - x_bounds[0]) / f64::from(area.width);
    let label_x = -(label.chars().count() as f64) * cell_width / 2.0;
    let color = presentation.color;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Points { coords: &track, color: TRACK_COLOR });
            ctx.layer();
            ctx.draw(&Points { coords: &arc, color });
            ctx.print(
                label_x,
                0.0,
                Span::styled(label.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            );
        });

    frame.render_widget(canvas, area);
}
