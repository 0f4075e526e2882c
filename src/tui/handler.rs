//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits, even from the load prompt
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        // Editing only happens inside the load prompt
        InputMode::Editing => Ok(()),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('o') => app.open_load_prompt(),

        KeyCode::Tab => app.cycle_focus(true),
        KeyCode::BackTab => app.cycle_focus(false),

        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => app.cycle_month(true),
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => app.cycle_month(false),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        _ => {}
    }

    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Error(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.close_dialog();
            }
        }
        ActiveDialog::LoadWorkbook => handle_load_prompt_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_load_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_load(),
        KeyCode::Esc => {
            if app.session.is_loaded() {
                app.load_input.focused = false;
                app.close_dialog();
            } else {
                app.quit();
            }
        }
        KeyCode::Char(c) => app.load_input.insert(c),
        KeyCode::Backspace => app.load_input.backspace(),
        KeyCode::Delete => app.load_input.delete(),
        KeyCode::Left => app.load_input.move_left(),
        KeyCode::Right => app.load_input.move_right(),
        KeyCode::Home => app.load_input.move_start(),
        KeyCode::End => app.load_input.move_end(),
        _ => {}
    }
}
