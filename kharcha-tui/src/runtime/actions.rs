use anyhow::Result;
use kharcha_client::{KharchaClient, ReportPeriod};

use crate::app::{App, View};

use super::action_queue::Action;

pub(super) async fn run_action(
    action: Action,
    app: &mut App,
    client: &mut KharchaClient,
) -> Result<()> {
    match action {
        Action::SubmitLogin => handle_submit_login(app, client).await,
        Action::SubmitExpense => handle_submit_expense(app, client).await,
        Action::OpenExpenses { period, generation } => {
            open_expenses(app, client, period, generation).await;
        }
        Action::GenerateReport { period, generation } => {
            generate_report(app, client, period, generation).await;
        }
        Action::Logout => handle_logout(app, client),
    }
    Ok(())
}

async fn handle_submit_login(app: &mut App, client: &mut KharchaClient) {
    let mobile = app.login_form.mobile.value.trim().to_string();
    let password = app.login_form.password.value.clone();
    if mobile.is_empty() || password.is_empty() {
        app.login_form.error = Some("Please enter mobile number and password.".to_string());
        return;
    }

    app.is_loading = true;
    let outcome = client.login(&mobile, &password).await;
    app.is_loading = false;

    match outcome {
        Ok(success) => {
            client.set_token(Some(success.token.clone()));
            if app.auth.login(success.identity, success.token).is_err() {
                app.set_status(
                    "Warning: could not save session; you will be logged out on exit".to_string(),
                );
            }
            app.login_form.reset();
            // Same landing view the web client redirects "/" to.
            app.navigate_to(View::AddExpense);
        }
        Err(e) => {
            app.login_form.error = Some(e.to_string());
        }
    }
}

async fn handle_submit_expense(app: &mut App, client: &mut KharchaClient) {
    app.error = None;
    app.clear_status();

    // Local checks short-circuit before any network call.
    let new_expense = match app.form.validate() {
        Ok(expense) => expense,
        Err(message) => {
            app.error = Some(message);
            return;
        }
    };

    app.is_loading = true;
    let outcome = client.add_expense(&new_expense).await;
    app.is_loading = false;

    match outcome {
        Ok(()) => {
            app.form.reset();
            app.set_status("Expense added successfully!".to_string());
            let generation = app.begin_fetch();
            open_expenses(app, client, ReportPeriod::Daily, generation).await;
        }
        Err(e) => {
            app.error = Some(e.to_string());
        }
    }
}

async fn open_expenses(
    app: &mut App,
    client: &mut KharchaClient,
    period: ReportPeriod,
    generation: u64,
) {
    // Route guard: an anonymous session lands on Login and the protected
    // fetch never fires.
    if app.auth.current_identity().is_none() {
        app.navigate_to(View::Expenses(period));
        return;
    }

    app.navigate_to(View::Expenses(period));
    app.is_loading = true;
    let outcome = client.expenses(period).await;
    app.is_loading = false;

    if !app.is_current_fetch(generation) {
        // A newer trigger owns the view now.
        return;
    }

    match outcome {
        Ok(expenses) => {
            app.expenses = expenses;
            app.error = None;
        }
        Err(e) => {
            app.error = Some(e.to_string());
        }
    }
}

async fn generate_report(
    app: &mut App,
    client: &mut KharchaClient,
    period: ReportPeriod,
    generation: u64,
) {
    if app.auth.current_identity().is_none() {
        app.navigate_to(View::Expenses(period));
        return;
    }

    app.is_loading = true;
    let outcome = client.report(period).await;
    app.is_loading = false;

    if !app.is_current_fetch(generation) {
        return;
    }

    match outcome {
        Ok(report) => {
            app.report = Some(report);
            app.error = None;
        }
        Err(e) => {
            app.error = Some(e.to_string());
        }
    }
}

fn handle_logout(app: &mut App, client: &mut KharchaClient) {
    app.auth.logout();
    client.set_token(None);
    app.expenses.clear();
    app.report = None;
    app.navigate_to(View::Login);
    app.set_status("Logged out.".to_string());
}
