use super::rarity_style;
use crate::app::App;
use crate::market::{market_value, TrendDirection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_trends(frame, chunks[0], app);
    draw_quote(frame, chunks[1], app);
}

fn draw_trends(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Market Trends ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for trend in app.trends.iter().take(inner.height as usize) {
        let (arrow, color) = match trend.direction {
            TrendDirection::Up => ("▲", Color::Green),
            TrendDirection::Down => ("▼", Color::Red),
            TrendDirection::Stable => ("-", Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<14}", trend.rarity.label()),
                rarity_style(trend.rarity),
            ),
            Span::raw(format!("{:>5.2}x ", trend.multiplier)),
            Span::styled(arrow.to_string(), Style::default().fg(color)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Quotes the selected title at the current multipliers.
fn draw_quote(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Quote ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match app.player.inventory.get(app.inventory_cursor) {
        None => lines.push(Line::from(Span::styled(
            "  Nothing to sell.",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(title) => {
            lines.push(Line::from(Span::styled(
                format!(" {}", title.full_text()),
                rarity_style(title.rarity),
            )));
            lines.push(Line::from(format!(" Base value: {:.0}", title.value)));
            lines.push(Line::from(vec![
                Span::raw(" Sells for: "),
                Span::styled(
                    format!("{}", market_value(title, &app.trends)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(" (world {} currency)", title.world)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [j/k] select  [s]ell",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
