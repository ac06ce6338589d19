use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::element::{FocusId, SelectOption};
use crate::tui::{Element, Theme};

mod focus_registry;
mod interaction_registry;
mod widgets;

pub use focus_registry::{FocusRegistry, FocusableInfo, LayerFocusContext};
pub use interaction_registry::{Action, InteractionRegistry};

use widgets::{button, layout, scroll, select, table, text};

/// Focus layer used by open dropdowns
pub const OVERLAY_LAYER: usize = 1;

/// A select that was open this frame, drawn after the main UI
pub(crate) struct DropdownInfo<Msg> {
    pub select_id: FocusId,
    pub anchor: Rect,
    pub options: Vec<SelectOption<Msg>>,
}

/// Per-frame rendering state shared by all widgets
pub(crate) struct RenderContext<'a, Msg> {
    pub theme: &'a Theme,
    pub registry: &'a mut InteractionRegistry<Msg>,
    pub focus_registry: &'a mut FocusRegistry<Msg>,
    pub focused_id: Option<&'a FocusId>,
    pub dropdowns: Vec<DropdownInfo<Msg>>,
}

impl<Msg> RenderContext<'_, Msg> {
    pub fn is_focused(&self, id: &FocusId) -> bool {
        self.focused_id == Some(id)
    }
}

/// Renders elements to the terminal
pub struct Renderer;

impl Renderer {
    pub fn render<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        let mut ctx = RenderContext {
            theme,
            registry,
            focus_registry,
            focused_id,
            dropdowns: Vec::new(),
        };

        Self::render_element(frame, &mut ctx, element, area);

        // After rendering main UI, render all dropdowns as overlays
        let dropdowns = std::mem::take(&mut ctx.dropdowns);
        if !dropdowns.is_empty() {
            ctx.focus_registry.push_layer(OVERLAY_LAYER);
            for dropdown in dropdowns {
                Self::render_dropdown(frame, &mut ctx, dropdown);
            }
        }
    }

    pub(crate) fn render_element<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        ctx: &mut RenderContext<'_, Msg>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match element {
            Element::None => {}

            Element::Text { content, style } => text::render_text(frame, ctx, content, *style, area),

            Element::Span { content, classes } => text::render_span(frame, ctx, content, classes, area),

            Element::Button { id, label, on_press } => {
                button::render_button(frame, ctx, id, label, on_press, area)
            }

            Element::Select {
                id,
                label,
                options,
                is_open,
                on_toggle,
            } => select::render_select(frame, ctx, id, label, options, *is_open, on_toggle, area),

            Element::Column { items, spacing } => layout::render_column(frame, ctx, items, *spacing, area),

            Element::Row { items, spacing } => layout::render_row(frame, ctx, items, *spacing, area),

            Element::Panel { child, title } => {
                // Check if the child (or any descendant) contains the focused element
                let child_has_focus = ctx
                    .focused_id
                    .map(|fid| child.contains_focus(fid))
                    .unwrap_or(false);

                let border_color = if child_has_focus {
                    ctx.theme.lavender
                } else {
                    ctx.theme.overlay0
                };

                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(ctx.theme.base));
                if let Some(title_text) = title {
                    block = block.title(title_text.as_str());
                }

                let inner_area = block.inner(area);
                frame.render_widget(block, area);

                Self::render_element(frame, ctx, child, inner_area);
            }

            Element::Table { caption, header, rows } => {
                table::render_table(frame, ctx, caption.as_deref(), header, rows, area)
            }

            Element::Scroll {
                child,
                offset,
                on_scroll_up,
                on_scroll_down,
            } => scroll::render_scroll(frame, ctx, child, *offset, on_scroll_up, on_scroll_down, area),
        }
    }

    fn render_dropdown<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        ctx: &mut RenderContext<'_, Msg>,
        dropdown: DropdownInfo<Msg>,
    ) {
        let screen = frame.area();
        let longest = dropdown
            .options
            .iter()
            .map(|o| o.label.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let width = (longest + 4).max(dropdown.anchor.width).min(screen.width);
        let height = (dropdown.options.len() as u16).min(12) + 2; // +2 for borders

        // Render below the select, or above if no room
        let below = dropdown.anchor.y + dropdown.anchor.height;
        let y = if below + height <= screen.height {
            below
        } else {
            dropdown.anchor.y.saturating_sub(height)
        };
        let x = dropdown.anchor.x.min(screen.width.saturating_sub(width));
        let dropdown_area = Rect {
            x,
            y,
            width,
            height: height.min(screen.height.saturating_sub(y)),
        };

        // First, clear the area to remove any bleed-through
        frame.render_widget(Clear, dropdown_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ctx.theme.overlay1))
            .style(Style::default().bg(ctx.theme.base));
        let inner = block.inner(dropdown_area);
        frame.render_widget(block, dropdown_area);

        for (idx, option) in dropdown.options.iter().enumerate().take(inner.height as usize) {
            let line_area = Rect {
                x: inner.x,
                y: inner.y + idx as u16,
                width: inner.width,
                height: 1,
            };
            let option_id = FocusId::new(format!("{}/{}", dropdown.select_id.as_str(), idx));

            let (prefix, style) = if ctx.is_focused(&option_id) {
                ("> ", Style::default().fg(ctx.theme.text).bg(ctx.theme.surface0))
            } else {
                ("  ", Style::default().fg(ctx.theme.text).bg(ctx.theme.base))
            };
            frame.render_widget(
                Paragraph::new(format!("{}{}", prefix, option.label)).style(style),
                line_area,
            );

            ctx.focus_registry.register_focusable(FocusableInfo {
                id: option_id,
                rect: line_area,
                action: Some(Action::Message(option.on_select.clone())),
            });
            ctx.registry.register_click(line_area, option.on_select.clone());
        }
    }
}
