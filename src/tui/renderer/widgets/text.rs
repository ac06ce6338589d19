use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::tui::element::FocusId;
use crate::tui::renderer::{Action, FocusableInfo, RenderContext};
use crate::view::link;

pub fn render_text<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    content: &str,
    style: Option<Style>,
    area: Rect,
) {
    let style = style.unwrap_or_else(|| Style::default().fg(ctx.theme.text));
    frame.render_widget(Paragraph::new(content.to_string()).style(style), area);
}

/// Render a span. Spans carrying a decodable link marker become clickable and focusable.
pub fn render_span<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    content: &str,
    classes: &[String],
    area: Rect,
) {
    let rect = Rect {
        width: (content.chars().count() as u16).min(area.width),
        height: 1,
        ..area
    };

    let is_link = classes.iter().any(|c| c == link::LINK_CLASS);
    let marker = if is_link { link::decode_classes(classes) } else { None };

    let Some(raw) = marker else {
        if is_link {
            log::warn!("Link span '{}' carries no decodable marker", content);
        }
        frame.render_widget(Paragraph::new(content.to_string()).style(Style::default().fg(ctx.theme.text)), rect);
        return;
    };

    let id = FocusId::new(format!("{}{}@{},{}", raw.kind, raw.id, rect.x, rect.y));
    let style = if ctx.is_focused(&id) {
        ctx.theme.focused_link_style()
    } else {
        ctx.theme.link_style()
    };

    ctx.focus_registry.register_focusable(FocusableInfo {
        id,
        rect,
        action: Some(Action::Link(raw.clone())),
    });
    ctx.registry.register_link(rect, raw);

    frame.render_widget(Paragraph::new(content.to_string()).style(style), rect);
}
