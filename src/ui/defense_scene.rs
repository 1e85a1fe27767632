use crate::app::App;
use crate::constants::{BREACH_THRESHOLD, ENEMY_SPAWN_POSITION};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.defense.active {
        format!(" Siege: {} kills ", app.defense.kills)
    } else {
        " Siege (idle) ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.defense.active {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if !app.defense.active {
        lines.push(Line::from(Span::styled(
            "  [d] to begin the siege (weapon required)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Each enemy as a march lane: position rendered as distance-to-base.
    let lane_width = inner.width.saturating_sub(24) as usize;
    for (index, enemy) in app.defense.enemies.iter().enumerate() {
        if lines.len() + 2 >= inner.height as usize {
            break;
        }
        let cursor = if index == app.enemy_cursor { ">" } else { " " };
        let fraction = (enemy.position / ENEMY_SPAWN_POSITION).clamp(0.0, 1.0);
        let offset = (fraction * lane_width as f64) as usize;
        let mut lane: String = " ".repeat(lane_width.saturating_sub(offset));
        lane.push('@');

        let danger = enemy.position < BREACH_THRESHOLD * 4.0;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", cursor)),
            Span::styled(
                lane,
                Style::default().fg(if danger { Color::Red } else { Color::Yellow }),
            ),
            Span::styled(
                format!(" {:>5.1}m  {:.0}/{:.0}hp", enemy.position, enemy.hp, enemy.max_hp),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [d] start  [j/k] target  [a]ttack  [q] abandon",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
