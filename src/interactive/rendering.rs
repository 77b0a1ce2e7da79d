//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{EXACT_MARKER, Feedback, INCORRECT_MARKER, MISPLACED_MARKER};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND - Crack the Code")
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

fn feedback_spans(feedback: Feedback) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            EXACT_MARKER.to_string().repeat(feedback.exact()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            MISPLACED_MARKER.to_string().repeat(feedback.misplaced()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            INCORRECT_MARKER.to_string().repeat(feedback.incorrect()),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let title = app.session.as_ref().map_or_else(
        || " Board ".to_string(),
        |session| format!(" Board | {} ", session.settings()),
    );

    let items: Vec<ListItem> = app.session.as_ref().map_or_else(Vec::new, |session| {
        let mut items: Vec<ListItem> = session
            .history()
            .iter()
            .enumerate()
            .map(|(i, turn)| {
                let mut spans = vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        turn.guess.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                ];
                spans.extend(feedback_spans(turn.feedback));
                ListItem::new(Line::from(spans))
            })
            .collect();

        if session.is_finished() {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("Code: "),
                Span::styled(
                    session.secret().to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ])));
        }

        if session.is_repeat() {
            items.push(ListItem::new(Span::styled(
                "(this code was issued before)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        items
    });

    let board = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Turns gauge
            Constraint::Length(7),   // Messages
            Constraint::Ratio(1, 3), // Archive in key order
            Constraint::Ratio(1, 3), // Ranked scores
            Constraint::Ratio(1, 3), // Issued codes
        ])
        .split(area);

    render_turns(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_lines(
        f,
        " Scores in History Order ",
        &app.engine.dump_archive_in_order(),
        chunks[2],
    );
    render_lines(f, " Scores by Points ", &app.engine.dump_ranked(), chunks[3]);
    render_lines(f, " Issued Codes ", &app.engine.dump_buckets(), chunks[4]);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let (left, max) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.turns_left(), s.max_turns()));
    let percent = if max == 0 { 0 } else { (left * 100 / max) as u16 };

    let color = match percent {
        0..=20 => Color::Red,
        21..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_lines(f: &mut Frame, title: &str, lines: &[String], area: Rect) {
    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ChooseLength => (
            " Choose the code length: 4 / 6 / 8 ",
            String::new(),
            Color::Cyan,
        ),
        InputMode::ChooseDuplicates => (
            " Play with duplicates? [y/n] | ESC to go back ",
            app.pending_length
                .map(|l| format!("Length {l}"))
                .unwrap_or_default(),
            Color::Cyan,
        ),
        InputMode::Guess => (
            " Enter Guess (digits 1-8) | ENTER submit | ? help | ESC abandon ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let played = app.games_played();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        played,
        if played > 0 {
            app.games_won() as f64 / played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let issued_text = format!("Codes issued: {}", app.engine.issued().len());
    let issued = Paragraph::new(issued_text).alignment(Alignment::Center);
    f.render_widget(issued, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLength, DuplicatePolicy};
    use crate::game::{Engine, GameConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn statistics_panels_show_archive_ranking_and_buckets() {
        let mut app = App::new(Engine::new(&GameConfig::default().with_seed(4)));
        app.engine
            .archive_outcome(CodeLength::Six, DuplicatePolicy::Allowed, true);
        app.engine
            .archive_outcome(CodeLength::Four, DuplicatePolicy::Forbidden, false);
        app.engine.record_issued_sequence("1234".parse().unwrap());

        let text = screen_text(&app);

        assert!(text.contains("Scores in History Order"));
        assert!(text.contains("Length: 4, No duplicates - Result: Loss"));
        assert!(text.contains("Length: 6, Duplicates - Result: Win"));
        assert!(text.contains("Scores by Points"));
        assert!(text.contains("Length: 6, Duplicates, Points: 1"));
        assert!(text.contains("Bucket 0 --> 1234"));
    }

    #[test]
    fn history_panel_follows_key_order() {
        let mut app = App::new(Engine::new(&GameConfig::default().with_seed(4)));
        app.engine
            .archive_outcome(CodeLength::Eight, DuplicatePolicy::Allowed, false);
        app.engine
            .archive_outcome(CodeLength::Four, DuplicatePolicy::Allowed, false);

        let text = screen_text(&app);
        let four = text.find("Length: 4, Duplicates - Result: Loss").unwrap();
        let eight = text.find("Length: 8, Duplicates - Result: Loss").unwrap();
        assert!(four < eight);
    }
}
