use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::models::{QuestionKind, QuizOption};
use crate::presenter::QuestionView;

pub fn render(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], view);
    render_progress(frame, chunks[1], view);
    render_question_text(frame, chunks[2], view);
    render_options(frame, chunks[3], view);
    render_feedback(frame, chunks[4], view);
    super::render_controls(frame, chunks[5], controls(view));
}

fn render_header(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let progress = view.progress;
    let line = Line::from(vec![
        Span::styled(
            format!("Question {}/{}", progress.index, progress.total),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!("   Good: {}", progress.score.good),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("   Bad: {}", progress.score.bad),
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let progress = view.progress;
    let ratio = if progress.total > 0 {
        progress.index.saturating_sub(1) as f64 / progress.total as f64
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let question = view.question;
    let text = match question.number {
        Some(number) => format!("{}. {}", number, question.text),
        None => question.text.clone(),
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let answered = view.verdict.is_some();

    let lines: Vec<Line> = view
        .question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_cursor = index == view.cursor && !answered;
            let is_chosen = view.is_chosen(index);
            let is_answer = answered && view.question.answers.contains(&option.answer());

            let style = if is_answer {
                Style::default().fg(Color::Green).bold()
            } else if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else if answered {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };

            let marker = if is_cursor { ">" } else { " " };
            let check = match (option, is_chosen) {
                (QuizOption::Lettered { .. }, true) => "[x]",
                (QuizOption::Lettered { .. }, false) => "[ ]",
                (QuizOption::TrueFalse(_), true) => "(*)",
                (QuizOption::TrueFalse(_), false) => "( )",
            };
            let hotkey = match option {
                QuizOption::Lettered { .. } if index < 9 => format!("{} ", index + 1),
                QuizOption::Lettered { .. } => "  ".to_string(),
                QuizOption::TrueFalse(value) => format!("{} ", &value.as_str()[..1]),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(hotkey, Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", check), style),
                Span::styled(option.label(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let lines = if let Some(verdict) = &view.verdict {
        if verdict.correct {
            vec![Line::from(Span::styled(
                "Correct!",
                Style::default().fg(Color::Green).bold(),
            ))]
        } else {
            vec![
                Line::from(Span::styled(
                    "Incorrect.",
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(Span::styled(
                    verdict.explanation(),
                    Style::default().fg(Color::Gray),
                )),
            ]
        }
    } else if let Some(warning) = &view.warning {
        vec![Line::from(Span::styled(
            warning.as_str(),
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        Vec::new()
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn controls(view: &QuestionView) -> &'static str {
    if view.verdict.is_some() {
        return "enter/n next  ·  q quit";
    }
    match view.question.kind {
        Some(QuestionKind::TrueFalse) => "v/f choose  ·  enter verify  ·  q quit",
        _ => "1-9 or j/k + space toggle  ·  enter verify  ·  q quit",
    }
}
