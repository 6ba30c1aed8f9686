use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kharcha_client::ReportPeriod;

use crate::app::{App, View};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_expenses_key(
    key: KeyEvent,
    period: ReportPeriod,
    app: &mut App,
    action_tx: &ActionTx,
) {
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
        KeyCode::Char('g') | KeyCode::Char('G') => {
            let generation = app.begin_fetch();
            enqueue_action(action_tx, Action::GenerateReport { period, generation });
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            open_expenses(app, action_tx, period);
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Esc => {
            app.navigate_to(View::AddExpense);
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
        KeyCode::Up | KeyCode::Char('k') => {
            app.expenses_scroll = app.expenses_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.expenses_scroll = app.expenses_scroll.saturating_add(1);
        }
        _ => {}
    }
}

fn open_expenses(app: &mut App, action_tx: &ActionTx, period: ReportPeriod) {
    let generation = app.begin_fetch();
    enqueue_action(action_tx, Action::OpenExpenses { period, generation });
}
