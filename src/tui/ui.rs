//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use super::overlay::OverlayLine;
use crate::config::Theme;
use crate::games::tictactoe::{Player, Position, Square, WinningLine};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as Stroke},
    },
};

const HELP: &str = "1-9 / click: place | arrows + Enter: cursor | R: reset | Q: quit";

/// Draws the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());
    let status = app.game().status();

    let title = Paragraph::new("Tic Tac Toe Game")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let mut status_text = app.status_line();
    if let Some(message) = app.message() {
        status_text = format!("{}   ({})", status_text, message);
    }
    let status_line = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, layout.status);

    draw_grid(frame, layout.board, theme);
    for pos in Position::iter() {
        draw_cell(frame, &layout, app, theme, pos, status.winning_line());
    }
    if let Some(line) = status.winning_line() {
        draw_overlay(frame, &layout, app, theme, line);
    }

    let reset = Paragraph::new("Reset Board")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reset, layout.reset_button);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_grid(frame: &mut Frame, board: Rect, theme: &Theme) {
    let style = Style::default().fg(*theme.grid());

    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        let area = Rect::new(x, board.y, 1, board.height).intersection(board);
        let lines = vec![Line::from("│"); usize::from(board.height)];
        frame.render_widget(Paragraph::new(lines).style(style), area);
    }

    let mut horizontal = String::new();
    for x in 0..board.width {
        horizontal.push(if (x + 1) % (CELL_WIDTH + 1) == 0 { '┼' } else { '─' });
    }
    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), area);
    }
}

fn mark_style(theme: &Theme, player: Player) -> Style {
    let color = match player {
        Player::X => *theme.x(),
        Player::O => *theme.o(),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_cell(
    frame: &mut Frame,
    layout: &ScreenLayout,
    app: &App,
    theme: &Theme,
    pos: Position,
    winning: Option<WinningLine>,
) {
    let area = layout.cell(pos);
    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(*theme.grid()),
        ),
        Square::Occupied(player) => (player.to_string(), mark_style(theme, player)),
    };

    if winning.is_some_and(|line| line.contains(pos)) {
        style = Style::default()
            .fg(*theme.win())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    } else if pos == app.cursor() && winning.is_none() && app.accepts_move_at(pos) {
        style = style.bg(*theme.cursor()).fg(Color::Black);
    }

    let mut lines = vec![Line::default(); usize::from(area.height)];
    if let Some(middle) = lines.get_mut(usize::from(area.height / 2)) {
        *middle = Line::from(symbol);
    }
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_overlay(
    frame: &mut Frame,
    layout: &ScreenLayout,
    app: &App,
    theme: &Theme,
    line: WinningLine,
) {
    let Some(overlay) = OverlayLine::compute(layout, line) else {
        return;
    };
    let (x1, y1, x2, y2) = overlay.flipped();
    let color = *theme.win();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, overlay.width])
        .y_bounds([0.0, overlay.height])
        .paint(move |ctx| {
            ctx.draw(&Stroke {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        });
    frame.render_widget(canvas, layout.board);

    // The stroke runs through the cell centers; put the marks back on top.
    let style = Style::default()
        .fg(color)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    for pos in line.positions() {
        let cell = layout.cell(pos);
        if let Some(mark) = app.game().board().get(pos).mark() {
            frame.buffer_mut().set_string(
                cell.x + cell.width / 2,
                cell.y + cell.height / 2,
                mark.to_string(),
                style,
            );
        }
    }
}
