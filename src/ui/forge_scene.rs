use super::{hex_color, rarity_style};
use crate::app::App;
use crate::title::Title;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_inventory(frame, chunks[0], app);
    draw_reveal(frame, chunks[1], app);
}

fn draw_inventory(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Titles ({}) ", app.player.inventory.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if app.player.inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "  [f] to forge your first title",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the cursor visible when the list outgrows the panel.
    let visible = inner.height as usize;
    let skip = app.inventory_cursor.saturating_sub(visible.saturating_sub(1));
    for (index, title) in app.player.inventory.iter().enumerate().skip(skip) {
        if lines.len() >= visible {
            break;
        }
        let cursor = if index == app.inventory_cursor { ">" } else { " " };
        let mark = if app.marked.contains(&title.id) { "*" } else { " " };
        let mut spans = vec![
            Span::raw(format!("{}{} ", cursor, mark)),
            Span::styled(title.full_text(), rarity_style(title.rarity)),
            Span::styled(
                format!("  [{}]", title.rarity.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(mutation) = title.mutation {
            spans.push(Span::styled(
                format!(" {}", mutation.kind.label()),
                Style::default().fg(hex_color(mutation.kind.color())),
            ));
        }
        if app.player.equipped_id.as_deref() == Some(&title.id) {
            spans.push(Span::styled(
                " [borne]",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_reveal(frame: &mut Frame, area: Rect, app: &App) {
    let border = if app.crack_active() {
        // Reality-crack flash for top-tier reveals.
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Last Forge ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match &app.last_forge {
        None => lines.push(Line::from(Span::styled(
            "  The forge is cold.",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(outcome) => {
            let title = app
                .player
                .title(&outcome.title.id)
                .unwrap_or(&outcome.title);
            describe_title(&mut lines, title);
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [f]orge  [enter] bear  [s]ell  [space] mark  [x] sacrifice  [c] fuse",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        " [1/2/3] world  [l]uck/[p]urity/[y]synergy charm",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn describe_title(lines: &mut Vec<Line>, title: &Title) {
    lines.push(Line::from(Span::styled(
        format!(" {}", title.full_text()),
        rarity_style(title.rarity).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw(" Tier: "),
        Span::styled(title.rarity.label(), rarity_style(title.rarity)),
        Span::raw(format!("   World {}   Value {:.0}", title.world, title.value)),
    ]));

    let mut traits = Vec::new();
    if title.is_purity {
        traits.push(Span::styled(" PURE x5", Style::default().fg(Color::White)));
    }
    if title.is_synergy {
        traits.push(Span::styled(" SYNERGY x3", Style::default().fg(Color::Cyan)));
    }
    if let Some(mutation) = title.mutation {
        traits.push(Span::styled(
            format!(" {} x{}", mutation.kind.label(), mutation.value_multiplier),
            Style::default().fg(hex_color(mutation.kind.color())),
        ));
    }
    if !traits.is_empty() {
        lines.push(Line::from(traits));
    }

    if let Some(history) = &title.history {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" \"{}\"", history),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
}
