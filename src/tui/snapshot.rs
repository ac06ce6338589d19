//! Headless rendering for tests and the `snapshot` command.

use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::tui::{App, Runtime};

/// Draw one frame of `runtime` into an off-screen buffer and return its lines.
pub fn render_lines<A: App>(runtime: &mut Runtime<A>, width: u16, height: u16) -> Result<Vec<String>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| runtime.render(frame))?;
    Ok(buffer_lines(terminal.backend().buffer()))
}

/// Buffer contents as text, one string per row with trailing blanks trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
