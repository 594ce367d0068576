//! Scroll progress gauge.

use ratatui::layout::Rect;
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the reading progress bar. `percent` is clamped to [0, 100].
pub fn render_scroll_progress(
    frame: &mut Frame,
    area: Rect,
    percent: f64,
    scroll_y: u32,
    theme: &ColorTheme,
) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(theme.panel("Scroll"))
        .gauge_style(theme.active_style())
        .label(format!("{:.0}% (y={scroll_y})", ratio * 100.0))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}
