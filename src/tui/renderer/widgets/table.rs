use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::tui::element::TableRow;
use crate::tui::renderer::{RenderContext, Renderer};

const COLUMN_GAP: u16 = 2;

/// Natural column widths: the widest of the header and every visible cell
pub fn column_widths<Msg>(header: &[String], rows: &[TableRow<Msg>]) -> Vec<u16> {
    let columns = rows
        .iter()
        .map(|row| row.cells.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    (0..columns)
        .map(|i| {
            let header_width = header.get(i).map_or(0, |h| h.chars().count() as u16);
            rows.iter()
                .filter(|row| !row.hidden)
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.width())
                .fold(header_width, u16::max)
        })
        .collect()
}

/// Render Table element: optional caption, header line, then one line per visible row
pub fn render_table<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    caption: Option<&str>,
    header: &[String],
    rows: &[TableRow<Msg>],
    area: Rect,
) {
    let widths = column_widths(header, rows);
    let bottom = area.y + area.height;
    let mut y = area.y;

    if let Some(caption) = caption {
        frame.render_widget(
            Paragraph::new(caption.to_string()).style(ctx.theme.caption_style()),
            Rect { y, height: 1, ..area },
        );
        y += 1;
    }

    if y < bottom && !header.is_empty() {
        let mut x = area.x;
        for (title, width) in header.iter().zip(&widths) {
            let Some(cell) = cell_rect(area, x, y, *width) else {
                break;
            };
            frame.render_widget(Paragraph::new(title.clone()).style(ctx.theme.header_style()), cell);
            x += width + COLUMN_GAP;
        }
        y += 1;
    }

    for row in rows.iter().filter(|row| !row.hidden) {
        if y >= bottom {
            break;
        }
        let mut x = area.x;
        for (element, width) in row.cells.iter().zip(&widths) {
            let Some(cell) = cell_rect(area, x, y, *width) else {
                break;
            };
            Renderer::render_element(frame, ctx, element, cell);
            x += width + COLUMN_GAP;
        }
        y += 1;
    }
}

fn cell_rect(area: Rect, x: u16, y: u16, width: u16) -> Option<Rect> {
    let right = area.x + area.width;
    if x >= right {
        return None;
    }
    Some(Rect {
        x,
        y,
        width: width.min(right - x),
        height: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Element;

    #[test]
    fn test_widths_ignore_hidden_rows() {
        let header = vec!["Name".to_string(), "Pts".to_string()];
        let rows: Vec<TableRow<()>> = vec![
            TableRow::new(vec![Element::text("Kärpät"), Element::text("7")]),
            TableRow::new(vec![Element::text("A much longer hidden name"), Element::text("1")]).hidden(true),
        ];
        assert_eq!(column_widths(&header, &rows), vec![6, 3]);
    }
}
