use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rupee display. Whole amounts drop the fraction, as the server sends them.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{}", amount)
    }
}

/// Day-of-month nudge on the monthly view.
pub fn monthly_budget_message(day_of_month: u8) -> &'static str {
    if day_of_month <= 10 {
        "New month, new budget! Plan wisely!"
    } else if day_of_month <= 20 {
        "You're halfway through the month! Keep an eye on your spending."
    } else {
        "Month-end is here! Time to review and plan for next month."
    }
}
