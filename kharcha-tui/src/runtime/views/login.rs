use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

/// The login screen owns the whole keyboard: any printable character goes
/// into the focused field, so quitting is Esc / Ctrl+C only.
pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.login_form.next_field();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login_form.input_char(c);
        }
        KeyCode::Backspace => {
            app.login_form.backspace();
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SubmitLogin);
        }
        KeyCode::Esc => {
            app.quit();
        }
        _ => {}
    }
}
