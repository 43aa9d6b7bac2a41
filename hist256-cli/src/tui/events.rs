use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::PageUp => app.page(false),
        KeyCode::PageDown => app.page(true),
        KeyCode::Home | KeyCode::Char('g') => app.jump_first(),
        KeyCode::End | KeyCode::Char('G') => app.jump_last(),
        KeyCode::Char('t') => app.cycle_theme(),
        _ => {}
    }
}
