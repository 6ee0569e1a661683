use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let Some(source) = app.counting() else {
        return;
    };
    let (current, total) = app.count_progress();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Document {} of {}", current, total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("How many questions from "),
            Span::styled(source.label.as_str(), Style::default().fg(Color::Cyan).bold()),
            Span::raw("?"),
        ]),
        Line::from(Span::styled(
            format!("{} available", source.playable()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}_", app.count_input()),
            Style::default().fg(Color::Yellow).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    super::render_status(frame, chunks[2], app.status());
    super::render_controls(frame, chunks[4], "1-100  ·  enter confirm  ·  q quit");
}
