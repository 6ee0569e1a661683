use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new("Choose the documents to practice with")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    render_entries(frame, chunks[1], app);
    super::render_status(frame, chunks[2], app.status());
    super::render_controls(
        frame,
        chunks[3],
        "j/k navigate  ·  space select  ·  enter continue  ·  q quit",
    );
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_cursor = index == app.cursor();
            let style = if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_cursor { ">" } else { " " };
            let check = if entry.is_selected() { "[x]" } else { "[ ]" };

            let mut spans = vec![
                Span::styled(format!(" {} {} ", marker, check), style),
                Span::styled(entry.label(), style),
            ];
            if let Some(source) = &entry.source {
                spans.push(Span::styled(
                    format!("  ({} questions)", source.playable()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();

    // Keep the cursor visible in long listings.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = app.cursor().saturating_sub(visible.saturating_sub(1));

    let widget = Paragraph::new(lines).scroll((scroll as u16, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Files ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
