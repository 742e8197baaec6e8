use crate::config::UiConfig;
use crate::game::{Board, Cell, GameEngine, GameStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal color for each player: Player 1 plays blue, Player 2 red.
fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Blue,
        Player::Two => Color::Red,
    }
}

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    config: &UiConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine.board(), selected_column, config, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: ratatui::layout::Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over: {} won", player.name()),
            player_color(player),
        ),
        GameStatus::Tied => ("Game Over: Tie".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    config: &UiConfig,
    area: ratatui::layout::Rect,
) {
    let piece = if config.ascii_pieces { " O " } else { " ● " };
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (piece, player_color(Player::One)),
                Cell::Two => (piece, player_color(Player::Two)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→: Move  |  Enter/Space: Drop  |  1-7: Drop in column  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
