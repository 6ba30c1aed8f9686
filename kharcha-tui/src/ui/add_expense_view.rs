use super::*;
use crate::app::FormField;

pub fn render_add_expense_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // error banner (or blank)
            Constraint::Min(8),    // form
            Constraint::Length(3), // controls
        ])
        .split(body);

    if let Some(error) = &app.error {
        render_error_banner(frame, chunks[0], error);
    }

    let form = &app.form;
    let field_style = |field: FormField| {
        if form.focused_field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let value_span = |value: Option<String>, placeholder: &str, field: FormField| {
        let focused = form.focused_field == field;
        match value {
            Some(v) => Span::styled(
                v,
                if focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                },
            ),
            None => Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)),
        }
    };

    let amount_display = if form.amount.is_empty() {
        None
    } else {
        Some(format!("₹{}", form.amount.value))
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Category:     ", field_style(FormField::Category)),
            value_span(
                form.category.map(|c| c.to_string()),
                "Select a category",
                FormField::Category,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Sub Category: ", field_style(FormField::SubCategory)),
            value_span(
                form.sub_category.map(str::to_string),
                "Select a subcategory",
                FormField::SubCategory,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Amount (₹):   ", field_style(FormField::Amount)),
            value_span(amount_display, "Enter amount", FormField::Amount),
        ]),
    ];

    let form_block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(
                " Add New Expense ",
                Style::default().fg(Color::White),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(form_block, chunks[1]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(": Change selection  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Add  "),
        Span::styled("D/W/M", Style::default().fg(Color::Yellow)),
        Span::raw(": Views  "),
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
    frame.render_widget(controls, chunks[2]);
}
