//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Tab | KeyCode::Down => app.select_next(),
        KeyCode::BackTab | KeyCode::Up => app.select_prev(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.adjust(1),
        KeyCode::Char('-') | KeyCode::Left => app.adjust(-1),
        KeyCode::Char('p') | KeyCode::Enter => app.predict(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('h') => app.toggle_history(),
        // Download is only offered once a forecast exists
        KeyCode::Char('d') if app.session.has_forecast() => app.save_csv(),
        _ => {}
    }
}
