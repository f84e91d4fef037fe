//! Root layout widget - orchestrates the picker screen.

use crate::app::state::AppState;
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use swatch::color::convert::contrast_text;
use swatch::{validate_color, ColorPalette, ColorSwatch, Lexicon};

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

/// Main layout structure:
/// ┌─────────────────────────────────────────────┐
/// │ swatch  1:material  2:traffic               │
/// ├───────────────────────────┬─────────────────┤
/// │ ┌ material (21) ────────┐ │ ┌ detail ─────┐ │
/// │ │ ██ ██ ██ ██ ██ ██     │ │ │ red         │ │
/// │ │ ██ ██ ██ ██           │ │ │ css #f44336 │ │
/// │ └───────────────────────┘ │ └─────────────┘ │
/// ├───────────────────────────┴─────────────────┤
/// │ q quit · arrows move · enter pick           │
/// └─────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, tr: &Lexicon, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Palette tabs
            Constraint::Min(4),    // Grid + detail pane
            Constraint::Length(1), // Hints / status
        ])
        .split(root);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(24),    // Palette grid
            Constraint::Length(30), // Detail pane
        ])
        .split(rows[1]);

    render_header(frame, state, rows[0]);
    render_grid(frame, cfg, tr, state, cols[0]);
    render_detail(frame, cfg, tr, state, cols[1]);
    render_status(frame, state, rows[2]);
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        " swatch ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];

    for (i, (name, _)) in state.palettes.iter().enumerate() {
        spans.push(Span::raw(if i == 0 { " " } else { "  " }));
        let style = if i == state.active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!("{}:{}", i + 1, name), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(frame: &mut Frame, cfg: &Config, tr: &Lexicon, state: &mut AppState, area: Rect) {
    let title = format!(" {} ({}) ", state.active_name(), state.active_palette().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DIM))
        .title(title)
        .title_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let AppState {
        palettes,
        active,
        grid,
        ..
    } = state;

    let widget = ColorPalette::new(&palettes[*active].1)
        .size(cfg.ui.size)
        .border_width(cfg.ui.border_width)
        .disable_alpha(cfg.ui.disable_alpha)
        .translator(tr);
    frame.render_stateful_widget(widget, inner, grid);
}

fn render_detail(frame: &mut Frame, cfg: &Config, tr: &Lexicon, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DIM))
        .title(" detail ")
        .title_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some((name, input)) = state
        .grid
        .hovered
        .or(state.grid.selected)
        .and_then(|idx| state.active_palette().entry(idx))
    else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "hover or arrow onto a chip",
            Style::default().fg(DIM),
        )));
        frame.render_widget(hint, inner);
        return;
    };

    let color = validate_color(input, cfg.ui.disable_alpha, tr);

    let dim = Style::default().fg(DIM);
    let mut lines = vec![
        Line::from(Span::styled(
            color.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![Span::styled("key   ", dim), Span::raw(name.to_string())]),
        Line::from(vec![Span::styled("raw   ", dim), Span::raw(input.to_string())]),
        Line::from(vec![Span::styled("css   ", dim), Span::raw(color.css.clone())]),
        Line::from(vec![
            Span::styled("rgb   ", dim),
            Span::raw(format!(
                "{} {} {}",
                color.rgb[0], color.rgb[1], color.rgb[2]
            )),
        ]),
        Line::from(vec![
            Span::styled("hsl   ", dim),
            Span::raw(format!(
                "{:.0} {:.0}% {:.0}%",
                color.hsl[0], color.hsl[1], color.hsl[2]
            )),
        ]),
        Line::from(vec![
            Span::styled("alpha ", dim),
            Span::raw(format!("{:.2}", color.alpha)),
        ]),
    ];
    if color.error {
        lines.push(Line::from(Span::styled(
            "unparsable, shown as fallback",
            Style::default().fg(Color::Red),
        )));
    }
    let text_height = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), inner);

    // Large preview under the readout, with a text specimen in the
    // contrasting foreground for this color.
    let preview_y = inner.y + text_height + 1;
    if preview_y >= inner.bottom() {
        return;
    }
    let preview = Rect::new(inner.x, preview_y, inner.width, inner.bottom() - preview_y);
    let chip = ColorSwatch::new(input.clone())
        .size(56)
        .border_width(2)
        .disable_alpha(cfg.ui.disable_alpha)
        .translator(tr);
    let cells = chip.cell_size();
    let chip_area = Rect::new(preview.x, preview.y, cells.width, cells.height).intersection(preview);
    frame.render_widget(chip, preview);

    if !color.error && chip_area.width >= 4 && chip_area.height >= 3 {
        let [r, g, b] = contrast_text(color.rgb);
        let specimen = Rect::new(
            chip_area.x + chip_area.width / 2 - 1,
            chip_area.y + chip_area.height / 2,
            2,
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Aa",
                Style::default().fg(Color::Rgb(r, g, b)),
            ))),
            specimen,
        );
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut hints =
        String::from(" q quit   arrows move   enter pick   tab palette   a alpha");
    if !state.status.is_empty() {
        hints.push_str("   ");
        hints.push_str(&state.status);
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(DIM)))),
        area,
    );
}
