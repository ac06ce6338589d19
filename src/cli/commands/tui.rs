use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

use crate::app::{InitParams, SimApp};
use crate::config::Config;
use crate::tui::Runtime;

use super::{connect, theme};

pub async fn tui_command(config: &Config) -> Result<()> {
    let engine = connect(config)?;
    let params = InitParams {
        skip_days: config.ui.skip_days,
        ..InitParams::new(engine)
    };
    let mut runtime: Runtime<SimApp> = Runtime::new(params, theme(config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui(&mut terminal, &mut runtime, Duration::from_millis(config.ui.frame_ms)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, runtime: &mut Runtime<SimApp>, frame: Duration) -> Result<()> {
    loop {
        let frame_start = std::time::Instant::now();

        // Process all pending events FIRST for minimal input latency
        let mut should_quit = false;
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    // Ctrl+C always quits, even with a dropdown open
                    if key.code == crossterm::event::KeyCode::Char('c')
                        && key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
                    {
                        should_quit = true;
                        break;
                    }
                    if !runtime.handle_key(key)? {
                        should_quit = true;
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if !runtime.handle_mouse(mouse)? {
                        should_quit = true;
                        break;
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        runtime.poll_async()?;

        terminal.draw(|f| runtime.render(f))?;

        // Sleep for the remainder of the frame
        if let Some(remaining) = frame.checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }

    Ok(())
}
