pub mod arsenal_scene;
pub mod defense_scene;
pub mod forge_scene;
pub mod market_scene;

use crate::app::{App, Tab};
use crate::rarity::Rarity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Converts a `#rrggbb` tier color to a terminal color. Anything
/// malformed renders white rather than panicking mid-draw.
pub fn hex_color(hex: &str) -> Color {
    let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or("ff"), 16).unwrap_or(0xff);
    if hex.len() == 7 && hex.starts_with('#') {
        Color::Rgb(parse(1..3), parse(3..5), parse(5..7))
    } else {
        Color::White
    }
}

pub fn rarity_style(rarity: Rarity) -> Style {
    let style = Style::default().fg(hex_color(rarity.color()));
    if rarity >= Rarity::Legendary {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

const TABS: [Tab; 4] = [Tab::Forge, Tab::Arsenal, Tab::Market, Tab::Defense];

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header: currencies and world
            Constraint::Length(1),  // Tab bar
            Constraint::Min(10),    // Active scene
            Constraint::Length(6),  // Status log
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_tab_bar(frame, chunks[1], app);
    match app.tab {
        Tab::Forge => forge_scene::draw(frame, chunks[2], app),
        Tab::Arsenal => arsenal_scene::draw(frame, chunks[2], app),
        Tab::Market => market_scene::draw(frame, chunks[2], app),
        Tab::Defense => defense_scene::draw(frame, chunks[2], app),
    }
    draw_status(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Title Forge ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let player = &app.player;
    let line = Line::from(vec![
        Span::styled(
            format!(" Glyphs {:.0} ", player.glyphs),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("| Shards {:.0} ", player.astral_shards),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("| Essence {:.0} ", player.cosmic_essence),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("| Materials {:.1} ", player.materials),
            Style::default().fg(Color::Green),
        ),
        Span::raw(format!("| World {} ", player.current_world)),
        Span::styled(
            format!(
                "| Base {:.0}/{:.0}",
                player.base_health, player.max_base_health
            ),
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for tab in TABS {
        let style = if tab == app.tab {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .status
        .iter()
        .take(inner.height as usize)
        .map(|msg| Line::from(Span::raw(msg.clone())))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
