use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kharcha_client::ReportPeriod;

use crate::app::{App, FormField};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_add_expense_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::Logout);
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.prev_field();
        }
        KeyCode::Right => {
            app.form.select_next();
        }
        KeyCode::Left => {
            app.form.select_prev();
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            open_expenses(app, action_tx, ReportPeriod::Daily);
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            open_expenses(app, action_tx, ReportPeriod::Weekly);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            open_expenses(app, action_tx, ReportPeriod::Monthly);
        }
        KeyCode::Char(c) if app.form.focused_field == FormField::Amount => {
            app.form.amount_input_char(c);
        }
        KeyCode::Backspace if app.form.focused_field == FormField::Amount => {
            app.form.amount_backspace();
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SubmitExpense);
        }
        _ => {}
    }
}

fn open_expenses(app: &mut App, action_tx: &ActionTx, period: ReportPeriod) {
    let generation = app.begin_fetch();
    enqueue_action(action_tx, Action::OpenExpenses { period, generation });
}
