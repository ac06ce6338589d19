use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::tui::element::{FocusId, SelectOption};
use crate::tui::renderer::{Action, DropdownInfo, FocusableInfo, RenderContext};

/// Render the closed part of a Select. Open options are queued as an overlay.
pub fn render_select<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    id: &FocusId,
    label: &str,
    options: &[SelectOption<Msg>],
    is_open: bool,
    on_toggle: &Option<Msg>,
    area: Rect,
) {
    let arrow = if is_open { "▲" } else { "▼" };
    let display = format!("[ {} {} ]", label, arrow);
    let rect = Rect {
        width: (display.chars().count() as u16).min(area.width),
        height: 1,
        ..area
    };

    ctx.focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect,
        action: on_toggle.clone().map(Action::Message),
    });
    if let Some(toggle_msg) = on_toggle {
        ctx.registry.register_click(rect, toggle_msg.clone());
    }

    let style = if ctx.is_focused(id) || is_open {
        Style::default().fg(ctx.theme.base).bg(ctx.theme.lavender)
    } else {
        Style::default().fg(ctx.theme.text).bg(ctx.theme.surface0)
    };
    frame.render_widget(Paragraph::new(display).style(style), rect);

    if is_open && !options.is_empty() {
        ctx.dropdowns.push(DropdownInfo {
            select_id: id.clone(),
            anchor: rect,
            options: options.to_vec(),
        });
    }
}
