//! TUI rendering with ratatui
//!
//! Layout and widgets for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_LIVES, Status};
use crate::output::formatters::{gallows_lines, masked_word, token_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    if app.input_mode == InputMode::ChooseCategory {
        render_category_picker(f, app, main_chunks[0]);
    } else {
        render_board(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_category_picker(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("Choose a category:"), Line::from("")];
    for (i, category) in app.categories().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(category.label()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let gallows_color = match session.status() {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::NotStarted | Status::InProgress => Color::White,
    };

    let mut content: Vec<Line> = gallows_lines(session.gallows_stage())
        .iter()
        .map(|line| Line::styled(*line, Style::default().fg(gallows_color)))
        .collect();

    // Show the full answer once the game is over
    let word = if session.is_over() {
        session
            .secret()
            .map(|w| {
                w.tokens()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    } else {
        masked_word(session.revealed())
    };

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        word,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Misses: "),
        Span::styled(
            token_list(session.wrong_guesses()),
            Style::default().fg(Color::Red),
        ),
    ]));
    let wrong_words = token_list(session.wrong_words());
    if !wrong_words.is_empty() {
        content.push(Line::from(vec![
            Span::raw("Not it: "),
            Span::styled(wrong_words, Style::default().fg(Color::Red)),
        ]));
    }

    let title = session
        .category()
        .map_or_else(|| " Board ".to_string(), |c| format!(" {} ", c.label()));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Length(4), // Statistics
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.session.lives_remaining();
    let percent = u16::try_from(lives * 100 / MAX_LIVES).unwrap_or(100);
    let color = match lives {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{lives}/{MAX_LIVES} lives left"));

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let distribution = stats
        .miss_distribution
        .iter()
        .enumerate()
        .map(|(misses, count)| format!("{misses}:{count}"))
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {win_rate:.0}%",
            stats.total_games, stats.games_won
        )),
        Line::from(format!("Wins by misses: {distribution}")),
    ];

    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Stats ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ChooseCategory => (
            " Press a number to pick a category ",
            "",
            Color::Cyan,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            if app.session.status() == Status::Won {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Letter => (
            " Guess a letter, Enter to submit | TAB for whole word | ? for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Word => (
            " Guess the whole word, Enter to submit | ESC to cancel ",
            app.input_buffer.as_str(),
            Color::Magenta,
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
    let help_text = match app.input_mode {
        InputMode::ChooseCategory => "1-5: Category | q: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
        InputMode::Letter => "Enter: Submit | TAB: Word | ?: Hint | Ctrl-N: New Game | ESC: Quit",
        InputMode::Word => "Enter: Submit | ESC/TAB: Back to letters",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, GameRng};
    use crate::wordbank::WordBank;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_category_picker() {
        let bank = WordBank::embedded();
        let app = App::new(&bank, Box::new(GameRng::new(1)));
        let screen = draw(&app);

        assert!(screen.contains("Choose a category"));
        assert!(screen.contains("Programming Language"));
    }

    #[test]
    fn renders_board_after_start() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["PEAR"])
            .build();
        let mut app = App::new(&bank, Box::new(GameRng::new(1)));
        app.choose_category(1);
        app.input_buffer.push('Z');
        app.submit_letter();

        let screen = draw(&app);
        assert!(screen.contains("_ _ _ _"));
        assert!(screen.contains("5/6 lives left"));
        assert!(screen.contains("Misses: Z"));
    }
}
