use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::Summary;

pub fn render(frame: &mut Frame, area: Rect, summary: &Summary) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], summary);
    super::render_controls(frame, chunks[3], "press any key to finish");
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &Summary) {
    let percentage = summary.percentage();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total: {}", summary.total),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Good: {}", summary.good),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Bad: {}", summary.bad),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.0}%", percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color(100.0), Color::Green);
        assert_eq!(grade_color(75.0), Color::Cyan);
        assert_eq!(grade_color(50.0), Color::Yellow);
        assert_eq!(grade_color(10.0), Color::Red);
    }
}
