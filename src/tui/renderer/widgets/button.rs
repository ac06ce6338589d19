use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::tui::element::FocusId;
use crate::tui::renderer::{Action, FocusableInfo, RenderContext};

/// Render Button element as a single `[ label ]` line
pub fn render_button<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    id: &FocusId,
    label: &str,
    on_press: &Option<Msg>,
    area: Rect,
) {
    let display = format!("[ {} ]", label);
    let rect = Rect {
        width: (display.chars().count() as u16).min(area.width),
        height: 1,
        ..area
    };

    ctx.focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect,
        action: on_press.clone().map(Action::Message),
    });
    if let Some(msg) = on_press {
        ctx.registry.register_click(rect, msg.clone());
    }

    let style = if ctx.is_focused(id) {
        Style::default().fg(ctx.theme.base).bg(ctx.theme.lavender)
    } else if on_press.is_some() {
        Style::default().fg(ctx.theme.text).bg(ctx.theme.surface0)
    } else {
        // Disabled
        Style::default().fg(ctx.theme.overlay0)
    };

    frame.render_widget(Paragraph::new(display).style(style), rect);
}
