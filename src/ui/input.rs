use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle a key press. Returns true when the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('x') => app.clear_cache_and_reload(),
        KeyCode::Left | KeyCode::Char('h') => app.switch_year(-1),
        KeyCode::Right | KeyCode::Char('l') => app.switch_year(1),
        _ => {}
    }
    false
}
