use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::tui::Element;
use crate::tui::renderer::{RenderContext, Renderer};

/// Largest useful offset: the last screenful of content stays in view
pub fn max_offset<Msg>(child: &Element<Msg>, viewport_height: u16) -> u16 {
    child.height().saturating_sub(viewport_height)
}

/// Render Scroll element: the child minus its first `offset` lines, with arrows
/// in the right margin while content lies above or below the viewport
pub fn render_scroll<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    child: &Element<Msg>,
    offset: u16,
    on_scroll_up: &Option<Msg>,
    on_scroll_down: &Option<Msg>,
    area: Rect,
) {
    let max = max_offset(child, area.height);
    let offset = offset.min(max);

    if let (Some(up), Some(down)) = (on_scroll_up, on_scroll_down) {
        ctx.registry.register_scroll(area, up.clone(), down.clone());
    }

    if max == 0 {
        Renderer::render_element(frame, ctx, child, area);
        return;
    }

    let content = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    Renderer::render_element(frame, ctx, &child.clip_top(offset), content);

    let margin_x = area.x + area.width - 1;
    let style = ctx.theme.caption_style();
    if offset > 0 {
        frame.render_widget(Paragraph::new("↑").style(style), Rect::new(margin_x, area.y, 1, 1));
    }
    if offset < max {
        frame.render_widget(
            Paragraph::new("↓").style(style),
            Rect::new(margin_x, area.y + area.height - 1, 1, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_offset_keeps_last_page() {
        let column: Element<()> = Element::column((0..30).map(|i| Element::text(i.to_string())).collect()).build();
        assert_eq!(max_offset(&column, 10), 20);
        assert_eq!(max_offset(&column, 40), 0);
    }
}
