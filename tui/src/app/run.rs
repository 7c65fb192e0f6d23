use std::io;
use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use habits::Settings;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::{context::Context, logging};
use crate::ui::screens::{menu, Action, Screen};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// Configuration is read before the terminal is touched so that a bad
/// environment is reported on a normal screen.
///
/// # Errors
/// Returns an error if configuration, terminal setup or rendering fails.
pub fn run() -> Result<()> {
    let settings = Settings::from_env().context("invalid configuration")?;
    logging::init()?;

    let ctx = Context::new(&settings);

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Menu(menu::MenuState::new(ctx));

    loop {
        screen.tick();
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::Back => screen = screen.into_menu(),
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    log::info!("shutting down");
    terminal.show_cursor()?;
    Ok(())
}
