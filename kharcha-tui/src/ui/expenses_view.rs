use kharcha_client::{Expense, Report, ReportPeriod};
use time::OffsetDateTime;

use super::utils::{format_amount, monthly_budget_message};
use super::*;
use crate::time_utils::{clock_label, month_heading, to_local_time, weekday_heading};

pub fn render_expenses_view(frame: &mut Frame, app: &App, period: ReportPeriod, body: Rect) {
    let report_height = app
        .report
        .as_ref()
        .map(|r| r.category_summary.len() as u16 + 5);

    let mut constraints = vec![Constraint::Length(1)]; // greeting line
    if app.error.is_some() {
        constraints.push(Constraint::Length(3));
    }
    if let Some(height) = report_height {
        constraints.push(Constraint::Length(height));
    }
    constraints.push(Constraint::Min(0)); // expense rows
    constraints.push(Constraint::Length(3)); // controls

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(constraints)
        .split(body);
    let mut next = 0;
    let mut chunk = || {
        let area = chunks[next];
        next += 1;
        area
    };

    render_greeting(frame, chunk(), app, period);
    if let Some(error) = &app.error {
        render_error_banner(frame, chunk(), error);
    }
    if let Some(report) = &app.report {
        render_report(frame, chunk(), report, period);
    }
    render_rows(frame, chunk(), app, period);
    render_controls(frame, chunk());
}

fn render_greeting(frame: &mut Frame, area: Rect, app: &App, period: ReportPeriod) {
    let Some(identity) = app.auth.current_identity() else {
        return;
    };
    let text = match period {
        ReportPeriod::Daily => {
            format!("Hey {} how are u doing today?", identity.first_name())
        }
        ReportPeriod::Monthly => {
            let day = to_local_time(OffsetDateTime::now_utc()).day();
            format!("Hey {}, {}", identity.first_name(), monthly_budget_message(day))
        }
        ReportPeriod::Weekly => return,
    };
    let greeting = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(greeting, area);
}

fn render_report(frame: &mut Frame, area: Rect, report: &Report, period: ReportPeriod) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Total: {}", format_amount(report.total)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Category Summary:",
            Style::default().fg(Color::White),
        )),
    ];
    // Lines appear in the server's mapping order.
    for (category, amount) in &report.category_summary {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {}: ", category), Style::default().fg(Color::Cyan)),
            Span::styled(format_amount(*amount), Style::default().fg(Color::White)),
        ]));
    }

    let title = match period {
        ReportPeriod::Daily => " Daily Report ",
        ReportPeriod::Weekly => " Weekly Report ",
        ReportPeriod::Monthly => " Monthly Report ",
    };
    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(title, Style::default().fg(Color::Green)))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(block, area);
}

fn render_rows(frame: &mut Frame, area: Rect, app: &App, period: ReportPeriod) {
    let title = match period {
        ReportPeriod::Daily => "Daily Expenses",
        ReportPeriod::Weekly => "Weekly Expenses",
        ReportPeriod::Monthly => "Monthly Expenses",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" {} ({}) ", title, app.expenses.len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));

    if app.expenses.is_empty() {
        let empty = Paragraph::new("No expenses recorded")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = vec![header_line()];
    let mut last_heading: Option<String> = None;
    for expense in &app.expenses {
        if let Some(heading) = group_heading(expense, period) {
            if last_heading.as_deref() != Some(heading.as_str()) {
                lines.push(Line::from(Span::styled(
                    format!("── {} ──", heading),
                    Style::default().fg(Color::Cyan),
                )));
                last_heading = Some(heading);
            }
        }
        lines.push(expense_line(expense));
    }

    // Keep the scroll inside the content.
    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(inner_height);
    let scroll = app.expenses_scroll.min(max_scroll) as u16;

    let rows = Paragraph::new(lines).scroll((scroll, 0)).block(block);
    frame.render_widget(rows, area);
}

fn header_line() -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{:<8}{:<16}{:<18}{:>10}",
            "Time", "Category", "Sub Category", "Amount"
        ),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

fn expense_line(expense: &Expense) -> Line<'static> {
    let local = to_local_time(expense.date);
    Line::from(vec![
        Span::styled(
            format!("{:<8}", clock_label(local)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:<16}", expense.category),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:<18}", expense.sub_category),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:>10}", format_amount(expense.amount)),
            Style::default().fg(Color::White),
        ),
    ])
}

/// Weekly and monthly views group rows under per-date headings; the daily
/// view is a flat table.
fn group_heading(expense: &Expense, period: ReportPeriod) -> Option<String> {
    let date = to_local_time(expense.date).date();
    match period {
        ReportPeriod::Daily => None,
        ReportPeriod::Weekly => Some(weekday_heading(date)),
        ReportPeriod::Monthly => Some(month_heading(date)),
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("G", Style::default().fg(Color::Yellow)),
        Span::raw(": Generate report  "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(": Refresh  "),
        Span::styled("A", Style::default().fg(Color::Yellow)),
        Span::raw(": Add expense  "),
        Span::styled("D/W/M", Style::default().fg(Color::Yellow)),
        Span::raw(": Views  "),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Scroll  "),
        Span::styled("Ctrl+L", Style::default().fg(Color::Yellow)),
        Span::raw(": Logout  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Controls ",
                Style::default().fg(Color::DarkGray),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(controls, area);
}
