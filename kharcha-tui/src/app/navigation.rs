use kharcha_client::ReportPeriod;

use super::App;

/// Screens of the client. Everything except Login requires a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Login,
    AddExpense,
    Expenses(ReportPeriod),
}

impl View {
    pub fn is_protected(self) -> bool {
        !matches!(self, View::Login)
    }
}

impl App {
    /// Route guard: consulted on every navigation, never cached across
    /// navigations. An anonymous session lands on Login no matter the
    /// requested view; there is no back-stack to escape the redirect
    /// through.
    pub fn navigate_to(&mut self, view: View) {
        let target = if view.is_protected() && self.auth.current_identity().is_none() {
            View::Login
        } else {
            view
        };
        if target != self.current_view {
            // Per-view state does not carry across mounts.
            self.error = None;
            self.report = None;
            self.expenses_scroll = 0;
        }
        self.current_view = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSession;
    use crate::session_store::SessionStore;
    use kharcha_client::Identity;

    fn identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Asha Rao".to_string(),
            mobile: "9999999999".to_string(),
        }
    }

    fn app_with_session(logged_in: bool) -> App {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSession::bootstrap(SessionStore::with_root(dir.path()));
        if logged_in {
            auth.login(identity(), "abc123".to_string()).unwrap();
        }
        App::new(auth)
    }

    #[test]
    fn anonymous_navigation_to_a_protected_view_lands_on_login() {
        let mut app = app_with_session(false);
        app.navigate_to(View::Expenses(ReportPeriod::Daily));
        assert_eq!(app.current_view, View::Login);
    }

    #[test]
    fn an_anonymous_app_starts_on_login() {
        let app = app_with_session(false);
        assert_eq!(app.current_view, View::Login);
    }

    #[test]
    fn an_authenticated_app_starts_on_add_expense() {
        let app = app_with_session(true);
        assert_eq!(app.current_view, View::AddExpense);
    }

    #[test]
    fn authenticated_navigation_mounts_the_requested_view() {
        let mut app = app_with_session(true);
        app.navigate_to(View::Expenses(ReportPeriod::Weekly));
        assert_eq!(app.current_view, View::Expenses(ReportPeriod::Weekly));
    }

    #[test]
    fn the_guard_is_rechecked_after_logout() {
        let mut app = app_with_session(true);
        app.navigate_to(View::Expenses(ReportPeriod::Daily));
        assert_eq!(app.current_view, View::Expenses(ReportPeriod::Daily));

        app.auth.logout();
        app.navigate_to(View::Expenses(ReportPeriod::Daily));
        assert_eq!(app.current_view, View::Login);
    }

    #[test]
    fn navigating_away_drops_per_view_state() {
        let mut app = app_with_session(true);
        app.error = Some("Token is not valid".to_string());
        app.navigate_to(View::Expenses(ReportPeriod::Monthly));
        assert!(app.error.is_none());
    }
}
