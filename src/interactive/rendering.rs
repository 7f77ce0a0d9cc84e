//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Phase;
use crate::output::formatters::{attempts_label, feedback_message, spaced_letters};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Scrambled word
            Constraint::Length(3), // Guess input
            Constraint::Length(5), // Feedback
            Constraint::Min(4),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_scrambled(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_feedback(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_scrambled<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let scrambled = spaced_letters(app.engine.state().word_pair.scrambled());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            scrambled,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Unscramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let guess = app.engine.state().user_guess.as_str();
    let (content, style) = if guess.is_empty() {
        ("Your guess", Style::default().fg(Color::DarkGray))
    } else {
        (
            guess,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .title(" Guess | Enter to submit ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);
}

fn render_feedback<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let state = app.engine.state();

    // Result and attempts only appear once the word has been checked
    let content = match state.phase() {
        Phase::Guessing => vec![],
        Phase::Checked { correct } => {
            let message = feedback_message(Some(correct)).unwrap_or_default();
            let color = if correct { Color::Green } else { Color::Red };
            let mut lines = vec![
                Line::from(Span::styled(
                    message,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(attempts_label(state.attempts)),
            ];
            if correct {
                lines.push(Line::from(Span::styled(
                    "[ Ctrl+N: Next Word ]",
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Result ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Solved: {}/{} | Words: {}",
        app.stats.words_solved,
        app.stats.rounds_played,
        app.engine.words().len()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.engine.state().is_solved() {
        "Esc: Quit | Ctrl+N: Next Word"
    } else {
        "Esc: Quit | Enter: Submit | Ctrl+U: Clear"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
