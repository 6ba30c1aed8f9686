use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod add_expense_view;
mod expenses_view;
mod login_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Login => login_view::render_login_view(frame, app, body),
        View::AddExpense => add_expense_view::render_add_expense_view(frame, app, body),
        View::Expenses(period) => expenses_view::render_expenses_view(frame, app, period, body),
    }
}

/// One-line header: app name on the left, status or loading indicator on
/// the right.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Kharcha ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, columns[0]);

    if app.is_loading {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading...")
            .style(Style::default().fg(Color::Yellow));
        frame.render_stateful_widget(throbber, columns[1], &mut app.throbber_state);
    } else if let Some(status) = &app.status_message {
        let status_line = Paragraph::new(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(status_line, columns[1]);
    }
}

/// Inline error banner, red, rendered inside the current view.
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(banner, area);
}
