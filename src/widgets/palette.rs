//! Palette grid widget.
//!
//! Renders a [`Palette`] as a wrapped row of color chips and turns mouse and
//! key input into hover and selection events. The widget itself is stateless;
//! hit boxes and the hover/selection cursor live in [`PaletteState`].

use crate::color::ColorInput;
use crate::palette::Palette;
use crate::translate::{NoTranslate, Translate};
use crate::widgets::swatch::{chip_cells, ColorSwatch, DEFAULT_SIZE_PX};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{StatefulWidget, Widget},
};

/// Hover cursor movement, one chip at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// Interaction result from the state handlers. A `Selected` event is resolved
/// into a name/color payload with [`Palette::selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    Hovered(usize),
    Selected(usize),
}

/// Render-time geometry plus the hover and selection cursors.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
    cells: Vec<Rect>,
}

impl PaletteState {
    /// Chip index under a buffer position, from the last render.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(pos))
    }

    pub fn on_mouse(&mut self, ev: &MouseEvent) -> Option<PaletteEvent> {
        match ev.kind {
            MouseEventKind::Moved => {
                let hit = self.hit(ev.column, ev.row);
                if hit != self.hovered {
                    self.hovered = hit;
                    hit.map(PaletteEvent::Hovered)
                } else {
                    None
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.hit(ev.column, ev.row)?;
                self.hovered = Some(hit);
                self.selected = Some(hit);
                Some(PaletteEvent::Selected(hit))
            }
            _ => None,
        }
    }

    /// Default key bindings: arrows or hjkl move, Enter or Space select.
    pub fn on_key(&mut self, key: &KeyEvent) -> Option<PaletteEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_hover(Dir::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_hover(Dir::Right),
            KeyCode::Up | KeyCode::Char('k') => self.move_hover(Dir::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_hover(Dir::Down),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_hovered(),
            _ => None,
        }
    }

    /// Move the hover cursor. The first movement lands on the first chip.
    pub fn move_hover(&mut self, dir: Dir) -> Option<PaletteEvent> {
        if self.cells.is_empty() {
            return None;
        }
        let next = match self.hovered {
            None => 0,
            Some(cur) => match dir {
                Dir::Left => cur.saturating_sub(1),
                Dir::Right => (cur + 1).min(self.cells.len() - 1),
                Dir::Up => self.row_neighbor(cur, false),
                Dir::Down => self.row_neighbor(cur, true),
            },
        };
        if Some(next) != self.hovered {
            self.hovered = Some(next);
            Some(PaletteEvent::Hovered(next))
        } else {
            None
        }
    }

    pub fn select_hovered(&mut self) -> Option<PaletteEvent> {
        let idx = self.hovered?;
        self.selected = Some(idx);
        Some(PaletteEvent::Selected(idx))
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
        self.cells.clear();
    }

    /// Nearest chip by column in the adjacent row, or stay put at an edge.
    fn row_neighbor(&self, cur: usize, down: bool) -> usize {
        let Some(from) = self.cells.get(cur).copied() else {
            // The cursor can be steered past the painted cells by hand;
            // stay put rather than index out of range.
            return cur;
        };
        let mut row_y: Option<u16> = None;
        let mut best: Option<(u16, usize)> = None;
        for (idx, cell) in self.cells.iter().enumerate() {
            let crosses = if down { cell.y > from.y } else { cell.y < from.y };
            if !crosses {
                continue;
            }
            let closer_row = match row_y {
                None => true,
                Some(y) => {
                    if down {
                        cell.y < y
                    } else {
                        cell.y > y
                    }
                }
            };
            let dist = cell.x.abs_diff(from.x);
            if closer_row {
                row_y = Some(cell.y);
                best = Some((dist, idx));
            } else if Some(cell.y) == row_y
                && best.is_none_or(|(best_dist, _)| dist < best_dist)
            {
                best = Some((dist, idx));
            }
        }
        best.map_or(cur, |(_, idx)| idx)
    }
}

/// A wrapped grid of [`ColorSwatch`] chips, one per palette entry.
pub struct ColorPalette<'a> {
    palette: &'a Palette,
    tr: &'a dyn Translate,
    size_px: u16,
    border_width_px: u16,
    disable_alpha: bool,
    base: Style,
}

impl<'a> ColorPalette<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            tr: &NoTranslate,
            size_px: DEFAULT_SIZE_PX,
            border_width_px: 0,
            disable_alpha: false,
            base: Style::default(),
        }
    }

    /// Chip side length in px, forwarded to every chip.
    pub fn size(mut self, px: u16) -> Self {
        self.size_px = px;
        self
    }

    pub fn border_width(mut self, px: u16) -> Self {
        self.border_width_px = px;
        self
    }

    pub fn disable_alpha(mut self, disable_alpha: bool) -> Self {
        self.disable_alpha = disable_alpha;
        self
    }

    /// Translator for tooltips; selections translate through
    /// [`Palette::selection`].
    pub fn translator(mut self, tr: &'a dyn Translate) -> Self {
        self.tr = tr;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.base = style;
        self
    }
}

impl StatefulWidget for ColorPalette<'_> {
    type State = PaletteState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut PaletteState) {
        buf.set_style(area, self.base);
        state.cells.clear();
        if let Some(selected) = state.selected
            && selected >= self.palette.len()
        {
            state.selected = None;
        }

        if area.width >= 2 && area.height >= 2 {
            let chip = chip_cells(self.size_px);
            // One cell of padding top and left, one gap cell after each chip.
            let origin_x = area.x + 1;
            let mut x = origin_x;
            let mut y = area.y + 1;
            for (idx, (name, input)) in self.palette.iter().enumerate() {
                if x + chip.width > area.right() && x > origin_x {
                    x = origin_x;
                    y += chip.height + 1;
                }
                if y >= area.bottom() {
                    break;
                }
                let rect = Rect::new(x, y, chip.width, chip.height).intersection(area);
                if rect.is_empty() {
                    break;
                }
                // The chip may float its tooltip below itself, so hand it the
                // rest of the grid as canvas.
                let canvas = Rect::new(x, y, area.right() - x, area.bottom() - y);
                swatch_for(&self, name, input)
                    .hovered(state.hovered == Some(idx))
                    .render(canvas, buf);
                state.cells.push(rect);
                x += chip.width + 1;
            }
        }

        // The hover cursor indexes painted cells; a shrink between frames
        // can leave it past the rebuilt layout.
        if let Some(hovered) = state.hovered
            && hovered >= state.cells.len()
        {
            state.hovered = None;
        }
    }
}

fn swatch_for<'a>(grid: &ColorPalette<'a>, name: &str, input: &ColorInput) -> ColorSwatch<'a> {
    ColorSwatch::new(input.clone())
        .size(grid.size_px)
        .border_width(grid.border_width_px)
        .disable_alpha(grid.disable_alpha)
        .tooltip(name)
        .translator(grid.tr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hover_shade, validate_color};
    use crate::translate::Lexicon;
    use crossterm::event::KeyModifiers;
    use ratatui::style::Color;

    fn sample() -> Palette {
        [
            ("red", "#f44336"),
            ("green", "#4caf50"),
            ("blue", "#2196f3"),
            ("amber", "#ffc107"),
            ("teal", "#009688"),
        ]
        .into_iter()
        .collect()
    }

    fn render_grid(palette: &Palette, width: u16, height: u16, state: &mut PaletteState) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ColorPalette::new(palette).render(area, &mut buf, state);
        buf
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wraps_into_rows() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);
        let expected = [
            Rect::new(1, 1, 3, 2),
            Rect::new(5, 1, 3, 2),
            Rect::new(1, 4, 3, 2),
            Rect::new(5, 4, 3, 2),
            Rect::new(1, 7, 3, 2),
        ];
        assert_eq!(state.cells, expected);
    }

    #[test]
    fn test_overflowing_rows_are_clipped() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 4, &mut state);
        assert_eq!(state.cells.len(), 2);

        // a partially visible row keeps a partial hit box
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 5, &mut state);
        assert_eq!(state.cells.len(), 4);
        assert_eq!(state.cells[2], Rect::new(1, 4, 3, 1));
    }

    #[test]
    fn test_mouse_hover_and_select() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);

        let ev = state.on_mouse(&mouse(MouseEventKind::Moved, 6, 2));
        assert_eq!(ev, Some(PaletteEvent::Hovered(1)));
        // moving within the same chip is quiet
        assert_eq!(state.on_mouse(&mouse(MouseEventKind::Moved, 5, 1)), None);

        let ev = state.on_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 5));
        assert_eq!(ev, Some(PaletteEvent::Selected(2)));
        assert_eq!(state.selected, Some(2));

        // clicking the padding selects nothing
        assert_eq!(
            state.on_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            None
        );
    }

    #[test]
    fn test_key_navigation_walks_the_grid() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);

        assert_eq!(state.move_hover(Dir::Right), Some(PaletteEvent::Hovered(0)));
        assert_eq!(state.move_hover(Dir::Right), Some(PaletteEvent::Hovered(1)));
        assert_eq!(state.move_hover(Dir::Down), Some(PaletteEvent::Hovered(3)));
        assert_eq!(state.move_hover(Dir::Left), Some(PaletteEvent::Hovered(2)));
        assert_eq!(state.move_hover(Dir::Up), Some(PaletteEvent::Hovered(0)));
        // already on the top row
        assert_eq!(state.move_hover(Dir::Up), None);
        assert_eq!(state.select_hovered(), Some(PaletteEvent::Selected(0)));
    }

    #[test]
    fn test_default_keys_map_to_navigation() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);

        let right = KeyEvent::from(KeyCode::Right);
        assert_eq!(state.on_key(&right), Some(PaletteEvent::Hovered(0)));
        let enter = KeyEvent::from(KeyCode::Enter);
        assert_eq!(state.on_key(&enter), Some(PaletteEvent::Selected(0)));
    }

    #[test]
    fn test_selection_payload_keeps_raw_color() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);
        state.on_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 5));

        let de = Lexicon::new("de").with("blue", "Blau");
        let sel = palette.selection(state.selected.unwrap(), &de).unwrap();
        assert_eq!(sel.name, "Blau");
        assert_eq!(sel.color, ColorInput::from("#2196f3"));
    }

    #[test]
    fn test_hovered_chip_uses_shade_and_tooltip() {
        let palette = sample();
        let mut state = PaletteState::default();
        state.hovered = Some(0);
        let buf = render_grid(&palette, 20, 8, &mut state);

        let canonical = validate_color(&ColorInput::from("#f44336"), false, &NoTranslate);
        let shade = hover_shade(&canonical);
        assert_eq!(buf[(1, 1)].bg, Color::Rgb(shade[0], shade[1], shade[2]));

        // tooltip floats in the gap row under the chip
        let label: String = (1..4).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert_eq!(label, "red");
    }

    #[test]
    fn test_unhovered_chips_keep_their_color() {
        let palette = sample();
        let mut state = PaletteState::default();
        state.hovered = Some(0);
        let buf = render_grid(&palette, 20, 8, &mut state);
        assert_eq!(buf[(5, 1)].bg, Color::Rgb(0x4c, 0xaf, 0x50));
    }

    #[test]
    fn test_empty_palette_is_inert() {
        let palette = Palette::new();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);
        assert!(state.cells.is_empty());
        assert_eq!(state.move_hover(Dir::Right), None);
        assert_eq!(state.select_hovered(), None);
    }

    #[test]
    fn test_stale_cursors_reset_on_render() {
        let palette = sample();
        let mut state = PaletteState::default();
        state.hovered = Some(17);
        state.selected = Some(17);
        render_grid(&palette, 10, 10, &mut state);
        assert_eq!(state.hovered, None);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_area_shrink_resets_hover() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);
        state.on_mouse(&mouse(MouseEventKind::Moved, 2, 8));
        assert_eq!(state.hovered, Some(4));

        // fewer rows fit after a resize; the hovered chip loses its cell
        render_grid(&palette, 10, 5, &mut state);
        assert_eq!(state.hovered, None);
        assert_eq!(state.move_hover(Dir::Up), Some(PaletteEvent::Hovered(0)));
    }

    #[test]
    fn test_move_hover_tolerates_out_of_range_cursor() {
        let palette = sample();
        let mut state = PaletteState::default();
        render_grid(&palette, 10, 10, &mut state);
        state.hovered = Some(palette.len() + 3);
        assert_eq!(state.move_hover(Dir::Up), None);
        assert_eq!(state.move_hover(Dir::Down), None);
    }
}
