//! Terminal User Interface module
//!
//! Live filtering: every edit of the search box re-runs the filter, the
//! table pane shows the rows left visible.

pub mod app;
pub mod events;
pub mod ui;

pub use app::App;

use crate::{FilterError, Result};
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use events::{EventHandler, KeyAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the interactive session until the user quits, then hand the app back
/// so the caller can write out the final state
pub fn run(mut app: App) -> Result<App> {
    enable_raw_mode().map_err(|e| FilterError::terminal_error(&e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(FilterError::terminal_error(&e.to_string()));
    }

    let result = event_loop(&mut app);

    // Restore the terminal even when the loop failed
    let restored =
        disable_raw_mode().and_then(|_| execute!(io::stdout(), LeaveAlternateScreen));
    result?;
    restored?;

    Ok(app)
}

fn event_loop(app: &mut App) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| FilterError::TuiError(e.to_string()))?;
    let handler = EventHandler::new()?;

    while !app.should_quit {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| FilterError::TuiError(format!("Draw failed: {}", e)))?;

        if let Some(Event::Key(key)) = handler.next_event(POLL_INTERVAL)? {
            let action = handler.handle_key_event(key);
            crate::logging::trace_log(&format!("Key action: {:?}", action));
            apply_action(app, action);
        }
    }

    Ok(())
}

/// Map a key action onto the app
pub fn apply_action(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::Quit => app.quit(),
        KeyAction::Submit => app.submit(),
        KeyAction::ScrollUp => app.scroll_up(1),
        KeyAction::ScrollDown => app.scroll_down(1),
        KeyAction::PageUp => app.page_up(),
        KeyAction::PageDown => app.page_down(),
        KeyAction::ClearInput => app.clear_phrase(),
        KeyAction::InputChar(c) => app.input_char(c),
        KeyAction::DeleteChar => app.delete_char(),
        KeyAction::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RowFilter;
    use crate::table::HtmlDocument;

    #[test]
    fn test_apply_action_sequence() {
        let page = r#"<table id="compat"><tr><th>Game</th></tr><tr><td>Foo</td></tr><tr><td>Bar</td></tr></table>"#;
        let document = HtmlDocument::parse(page, "compat").unwrap();
        let mut app = App::new(document, RowFilter::new().unwrap(), String::new());

        for action in [
            KeyAction::InputChar('F'),
            KeyAction::InputChar('o'),
            KeyAction::Submit,
        ] {
            apply_action(&mut app, action);
        }
        assert_eq!(app.phrase, "Fo");
        assert_eq!(app.match_count, 1);

        apply_action(&mut app, KeyAction::ClearInput);
        assert_eq!(app.match_count, 2);

        apply_action(&mut app, KeyAction::None);
        assert!(!app.should_quit);
        apply_action(&mut app, KeyAction::Quit);
        assert!(app.should_quit);
    }
}
