mod counts;
mod picker;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;
use crate::presenter::QuestionView;
use crate::session::Summary;

/// Draw whichever setup screen `app` is on.
pub fn render_setup(frame: &mut Frame, app: &App) {
    let area = clear(frame);

    match app.state {
        AppState::Welcome => welcome::render(frame, area),
        AppState::Picker => picker::render(frame, area, app),
        AppState::Counts => counts::render(frame, area, app),
    }
}

pub fn render_question(frame: &mut Frame, view: &QuestionView) {
    let area = clear(frame);
    quiz::render(frame, area, view);
}

pub fn render_summary(frame: &mut Frame, summary: &Summary) {
    let area = clear(frame);
    result::render(frame, area, summary);
}

fn clear(frame: &mut Frame) -> Rect {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);
    area
}

/// One-line key help at the bottom of a screen.
fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Status or validation message, if any.
fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if let Some(status) = status {
        let widget = Paragraph::new(status.to_string())
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}
