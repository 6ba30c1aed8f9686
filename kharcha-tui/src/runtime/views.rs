use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod add_expense;
mod expenses;
mod login;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Login => login::handle_login_key(key, app, action_tx),
        View::AddExpense => add_expense::handle_add_expense_key(key, app, action_tx),
        View::Expenses(period) => expenses::handle_expenses_key(key, period, app, action_tx),
    }
}
