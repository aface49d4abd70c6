use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

type CrossTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

pub fn with_terminal<F>(f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut CrossTerminal) -> anyhow::Result<()>,
{
    let mut terminal = acquire()?;
    set_panic_hook();

    // restore the terminal before reporting the callback's error
    let result = f(&mut terminal);
    release()?;
    result
}

fn acquire() -> anyhow::Result<CrossTerminal> {
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;

    let mut terminal = Terminal::new(backend::CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

fn release() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn set_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        release().ok();
        original_hook(panic);
    }));
}
