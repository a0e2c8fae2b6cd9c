use crate::ui::app::App;
use crate::ui::dialog::{DialogField, TodoDialogIntent, TodoDialogState};
use crate::ui::todos::TodoListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key event to the dialog or the list, depending on focus.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.dialog_visible() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch_todos(TodoListIntent::SelectPrevious),
        KeyCode::Down => app.dispatch_todos(TodoListIntent::SelectNext),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            app.dispatch_todos(TodoListIntent::SwitchFilter)
        }
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') => app.open_create_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_dialog();
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch_dialog(TodoDialogIntent::RequestClose),
        KeyCode::Tab => app.dispatch_dialog(TodoDialogIntent::FocusNext),
        KeyCode::Backspace => app.dispatch_dialog(TodoDialogIntent::Backspace),
        KeyCode::Enter => {
            // The title is single-line: Enter moves on to the description.
            let intent = match app.dialog() {
                TodoDialogState::Visible {
                    focus: DialogField::Title,
                    ..
                } => TodoDialogIntent::FocusNext,
                _ => TodoDialogIntent::NewLine,
            };
            app.dispatch_dialog(intent);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.dispatch_dialog(TodoDialogIntent::Input(ch));
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
