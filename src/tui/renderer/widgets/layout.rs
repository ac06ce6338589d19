use ratatui::{
    Frame,
    layout::{Direction, Rect},
};

use crate::tui::renderer::{RenderContext, Renderer};
use crate::tui::{Element, LayoutConstraint};

/// Size of each item along the main axis: fixed sizes as given, what is left
/// after them and the gaps shared among the Fill items by weight
pub fn calculate_sizes<Msg>(items: &[(LayoutConstraint, Element<Msg>)], available_space: u16, spacing: u16) -> Vec<u16> {
    // Pass 1: Calculate fixed and minimum sizes
    let mut fixed_total = spacing.saturating_mul(items.len().saturating_sub(1) as u16);
    let mut fill_total_weight = 0u16;

    for (constraint, _) in items {
        match constraint {
            LayoutConstraint::Length(n) | LayoutConstraint::Min(n) => fixed_total = fixed_total.saturating_add(*n),
            LayoutConstraint::Fill(weight) => fill_total_weight += weight,
        }
    }

    // Pass 2: Calculate remaining space for Fill elements
    let remaining = available_space.saturating_sub(fixed_total);

    items
        .iter()
        .map(|(constraint, _)| match constraint {
            LayoutConstraint::Length(n) | LayoutConstraint::Min(n) => *n,
            LayoutConstraint::Fill(weight) if fill_total_weight > 0 => {
                (remaining as u32 * *weight as u32 / fill_total_weight as u32) as u16
            }
            LayoutConstraint::Fill(_) => 0,
        })
        .collect()
}

/// Render Column element
pub fn render_column<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
) {
    render_linear(frame, ctx, items, spacing, area, Direction::Vertical)
}

/// Render Row element
pub fn render_row<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
) {
    render_linear(frame, ctx, items, spacing, area, Direction::Horizontal)
}

/// Items are placed one after another at their full size. When they run past the
/// end of the area the overflowing item is cut and the rest are not drawn, so
/// nothing earlier in the container ever shrinks.
fn render_linear<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    direction: Direction,
) {
    if items.is_empty() {
        return;
    }

    let available = match direction {
        Direction::Vertical => area.height,
        Direction::Horizontal => area.width,
    };
    let sizes = calculate_sizes(items, available, spacing);

    for (start, length, child) in place(&sizes, available, spacing, items) {
        let chunk = match direction {
            Direction::Vertical => Rect {
                y: area.y + start,
                height: length,
                ..area
            },
            Direction::Horizontal => Rect {
                x: area.x + start,
                width: length,
                ..area
            },
        };
        Renderer::render_element(frame, ctx, child, chunk);
    }
}

/// Start offset and clipped length of every item that begins inside the area
fn place<'a, Msg>(
    sizes: &[u16],
    available: u16,
    spacing: u16,
    items: &'a [(LayoutConstraint, Element<Msg>)],
) -> Vec<(u16, u16, &'a Element<Msg>)> {
    let mut placed = Vec::with_capacity(items.len());
    let mut cursor = 0u16;
    for (size, (_, child)) in sizes.iter().zip(items) {
        if cursor >= available {
            break;
        }
        let length = (*size).min(available - cursor);
        placed.push((cursor, length, child));
        cursor = cursor.saturating_add(*size).saturating_add(spacing);
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_shares_remaining_space() {
        let items: Vec<(LayoutConstraint, Element<()>)> = vec![
            (LayoutConstraint::Length(3), Element::None),
            (LayoutConstraint::Fill(1), Element::None),
            (LayoutConstraint::Fill(3), Element::None),
        ];
        assert_eq!(calculate_sizes(&items, 21, 1), vec![3, 4, 12]);
    }

    #[test]
    fn test_overflow_cuts_the_tail_instead_of_squeezing() {
        let items: Vec<(LayoutConstraint, Element<()>)> = vec![
            (LayoutConstraint::Length(6), Element::None),
            (LayoutConstraint::Length(6), Element::None),
            (LayoutConstraint::Length(6), Element::None),
        ];
        let sizes = calculate_sizes(&items, 10, 1);
        let placed: Vec<(u16, u16)> = place(&sizes, 10, 1, &items)
            .into_iter()
            .map(|(start, length, _)| (start, length))
            .collect();
        assert_eq!(placed, vec![(0, 6), (7, 3)]);
    }
}
