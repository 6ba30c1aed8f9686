mod form;
mod navigation;

pub use form::{ExpenseForm, FormField};
pub use navigation::View;

use kharcha_client::{Expense, Report};
use throbber_widgets_tui::ThrobberState;

use crate::auth::AuthSession;

/// A minimal append-at-end text input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
}

impl TextInput {
    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoginField {
    #[default]
    Mobile,
    Password,
}

/// State of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mobile: TextInput,
    pub password: TextInput,
    pub focused_field: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            LoginField::Mobile => LoginField::Password,
            LoginField::Password => LoginField::Mobile,
        };
    }

    pub fn input_char(&mut self, c: char) {
        match self.focused_field {
            LoginField::Mobile => self.mobile.insert(c),
            LoginField::Password => self.password.insert(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field {
            LoginField::Mobile => self.mobile.backspace(),
            LoginField::Password => self.password.backspace(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Whole-app state: the session, the mounted view, and whatever that view
/// has fetched or typed so far.
pub struct App {
    pub auth: AuthSession,
    pub current_view: View,
    pub running: bool,
    pub is_loading: bool,
    pub throbber_state: ThrobberState,
    pub status_message: Option<String>,
    /// Inline error for the current view, in the server's words when it
    /// came from the API.
    pub error: Option<String>,
    pub expenses: Vec<Expense>,
    pub report: Option<Report>,
    pub expenses_scroll: usize,
    pub form: ExpenseForm,
    pub login_form: LoginForm,
    fetch_generation: u64,
}

impl App {
    pub fn new(auth: AuthSession) -> Self {
        let mut app = Self {
            auth,
            current_view: View::Login,
            running: true,
            is_loading: false,
            throbber_state: ThrobberState::default(),
            status_message: None,
            error: None,
            expenses: Vec::new(),
            report: None,
            expenses_scroll: 0,
            form: ExpenseForm::new(),
            login_form: LoginForm::new(),
            fetch_generation: 0,
        };
        // The guard decides where an anonymous session actually lands.
        app.navigate_to(View::AddExpense);
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Stamp a new fetch trigger. Responses carry the stamp they were issued
    /// with; only the latest stamp is applied, so the last *issued* request
    /// wins rendering even if an older one resolves later.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    pub fn is_current_fetch(&self, generation: u64) -> bool {
        generation == self.fetch_generation
    }
}
