use crate::app::state::App;
use crate::app::ViewerAction;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return Ok(());
    }

    if key.code == KeyCode::Char('q') {
        app.running = false;
        return Ok(());
    }

    if let Some(action) = action_for_key(key.code) {
        app.perform(action)?;
    }

    Ok(())
}

pub const fn action_for_key(code: KeyCode) -> Option<ViewerAction> {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => Some(ViewerAction::Close),
        KeyCode::Left | KeyCode::Char('h' | 'p') => Some(ViewerAction::Previous),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l' | 'n') => Some(ViewerAction::Next),
        _ => None,
    }
}
