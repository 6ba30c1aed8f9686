use super::*;
use crate::app::LoginField;

pub fn render_login_view(frame: &mut Frame, app: &App, body: Rect) {
    let area = utils::centered_rect(60, 14, body);

    let form = &app.login_form;
    let mobile_focused = form.focused_field == LoginField::Mobile;
    let password_focused = form.focused_field == LoginField::Password;

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let value_style = |focused: bool| {
        if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    // Password is masked
    let password_display = "•".repeat(form.password.value.len());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sign in to your expense tracker.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mobile:   ", label_style(mobile_focused)),
            Span::styled(form.mobile.value.clone(), value_style(mobile_focused)),
        ]),
        Line::from(vec![
            Span::styled("Password: ", label_style(password_focused)),
            Span::styled(password_display, value_style(password_focused)),
        ]),
        Line::from(""),
    ];

    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Switch field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Sign in  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(" Login ", Style::default().fg(Color::Yellow)))
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
