use super::{hex_color, rarity_style};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Arsenal ({}) ", app.player.arsenal.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if app.player.arsenal.is_empty() {
        lines.push(Line::from(Span::styled(
            "  [w] to forge a weapon (200 glyphs, 10 materials)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (index, weapon) in app.player.arsenal.iter().enumerate() {
        if lines.len() + 2 >= inner.height as usize {
            break;
        }
        let cursor = if index == app.arsenal_cursor { ">" } else { " " };
        let equipped = if app.player.equipped_weapon_id.as_deref() == Some(&weapon.id) {
            Span::styled(" [equipped]", Style::default().fg(Color::Green))
        } else {
            Span::raw("")
        };
        let mut spans = vec![
            Span::raw(format!("{} ", cursor)),
            Span::styled(weapon.name.clone(), rarity_style(weapon.rarity)),
            Span::styled(
                format!(
                    "  dmg {:.1}  spd {:.2}",
                    weapon.damage, weapon.attack_speed
                ),
                Style::default().fg(Color::Gray),
            ),
        ];
        if let Some(mutation) = weapon.mutation {
            spans.push(Span::styled(
                format!("  {}", mutation.kind.label()),
                Style::default().fg(hex_color(mutation.kind.color())),
            ));
        }
        spans.push(equipped);
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [w] forge weapon  [enter] equip",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
