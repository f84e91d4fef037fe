//! Color swatch chip widget.

use crate::color::{self, CanonicalColor, ColorInput};
use crate::translate::{NoTranslate, Translate};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    widgets::{Block, BorderType, Widget},
};

/// Default chip side in px.
pub const DEFAULT_SIZE_PX: u16 = 24;

/// Checkerboard shades behind translucent and invalid colors.
const CHECKER_DARK: [u8; 3] = [0xcc, 0xcc, 0xcc];
const CHECKER_LIGHT: [u8; 3] = [0xff, 0xff, 0xff];
/// Accent for the invalid pattern (css `#f44336`).
const ERROR_RED: [u8; 3] = [0xf4, 0x43, 0x36];
/// Border fallback (css `#767676`).
const DEFAULT_BORDER: [u8; 3] = [0x76, 0x76, 0x76];
/// Tooltip colors (css `#616161` over white).
const TOOLTIP_BG: [u8; 3] = [0x61, 0x61, 0x61];

/// Px covered by one terminal cell, assuming a common 8x16 font box.
const CELL_PX_W: u16 = 8;
const CELL_PX_H: u16 = 16;

/// Chip footprint in cells for a pixel size, one cell minimum.
pub(crate) fn chip_cells(size_px: u16) -> Size {
    let scale = |px: u16, per_cell: u16| (px.saturating_add(per_cell / 2) / per_cell).max(1);
    Size::new(scale(size_px, CELL_PX_W), scale(size_px, CELL_PX_H))
}

/// A clickable color chip.
///
/// Renders one color as a square anchored at the top left of its area. Valid
/// opaque colors paint every cell background with the exact color; a
/// translucent color is composited over a checkerboard; an unparsable color
/// shows the checkerboard with red hatching and a red ring instead of any
/// solid fill.
#[derive(Clone)]
pub struct ColorSwatch<'a> {
    color: ColorInput,
    size_px: u16,
    border_width_px: u16,
    border_color: ColorInput,
    tooltip: Option<String>,
    disable_alpha: bool,
    hovered: bool,
    base: Style,
    tr: &'a dyn Translate,
}

impl std::fmt::Debug for ColorSwatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSwatch")
            .field("color", &self.color)
            .field("size_px", &self.size_px)
            .field("border_width_px", &self.border_width_px)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: impl Into<ColorInput>) -> Self {
        Self {
            color: color.into(),
            size_px: DEFAULT_SIZE_PX,
            border_width_px: 0,
            border_color: ColorInput::Css("#767676".to_string()),
            tooltip: None,
            disable_alpha: false,
            hovered: false,
            base: Style::default(),
            tr: &NoTranslate,
        }
    }

    /// Side length in px. Cells are derived from an 8x16 font box, so the
    /// default of 24 covers 3x2 cells.
    pub fn size(mut self, px: u16) -> Self {
        self.size_px = px;
        self
    }

    /// Border width in px; zero (the default) draws no border.
    pub fn border_width(mut self, px: u16) -> Self {
        self.border_width_px = px;
        self
    }

    pub fn border_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Label floated under the chip while hovered, translated for display.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn disable_alpha(mut self, disable_alpha: bool) -> Self {
        self.disable_alpha = disable_alpha;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Base style painted under the fill.
    pub fn style(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    pub fn translator(mut self, tr: &'a dyn Translate) -> Self {
        self.tr = tr;
        self
    }

    /// Cell footprint of the chip itself, before any tooltip row.
    pub fn cell_size(&self) -> Size {
        chip_cells(self.size_px)
    }

    fn canonical(&self) -> CanonicalColor {
        color::validate_color(&self.color, self.disable_alpha, self.tr)
    }
}

impl Widget for ColorSwatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.cell_size();
        let chip = Rect::new(area.x, area.y, size.width, size.height).intersection(area);
        if chip.is_empty() {
            return;
        }

        let canonical = self.canonical();
        buf.set_style(chip, self.base);
        fill(buf, chip, &canonical, self.hovered);
        if canonical.error {
            hatch(buf, chip);
        }

        let ring = if canonical.error {
            Some(ERROR_RED)
        } else if self.border_width_px > 0 {
            let border = color::validate_color(&self.border_color, true, &NoTranslate);
            Some(if border.error { DEFAULT_BORDER } else { border.rgb })
        } else {
            None
        };
        if let Some(rgb) = ring
            && chip.width >= 2
            && chip.height >= 2
        {
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(rgb_color(rgb)))
                .render(chip, buf);
        }

        if self.hovered
            && let Some(tooltip) = &self.tooltip
        {
            let label = self.tr.translate(tooltip);
            float_label(buf, area, chip, &label);
        }
    }
}

fn rgb_color(rgb: [u8; 3]) -> Color {
    Color::Rgb(rgb[0], rgb[1], rgb[2])
}

fn fill(buf: &mut Buffer, chip: Rect, canonical: &CanonicalColor, hovered: bool) {
    if canonical.error {
        checker(buf, chip, None);
        return;
    }
    let rgb = if hovered {
        color::hover_shade(canonical)
    } else {
        canonical.rgb
    };
    if canonical.alpha < 1.0 {
        checker(buf, chip, Some((rgb, canonical.alpha)));
    } else {
        buf.set_style(chip, Style::default().bg(rgb_color(rgb)));
    }
}

/// Cell-sized checkerboard, optionally compositing a translucent color on top.
fn checker(buf: &mut Buffer, chip: Rect, over: Option<([u8; 3], f32)>) {
    for y in chip.top()..chip.bottom() {
        for x in chip.left()..chip.right() {
            let dark = (x - chip.x + y - chip.y) % 2 == 0;
            let base = if dark { CHECKER_DARK } else { CHECKER_LIGHT };
            let rgb = match over {
                Some((fg, alpha)) => color::convert::blend_over(fg, alpha, base),
                None => base,
            };
            buf[(x, y)].set_bg(rgb_color(rgb));
        }
    }
}

/// Red diagonal hatching drawn over the checker on invalid colors.
fn hatch(buf: &mut Buffer, chip: Rect) {
    for y in chip.top()..chip.bottom() {
        for x in chip.left()..chip.right() {
            if (x - chip.x + y - chip.y) % 2 == 0 {
                buf[(x, y)].set_char('╲').set_fg(rgb_color(ERROR_RED));
            }
        }
    }
}

/// Tooltip line under the chip, or over it when there is no room below.
/// Skipped entirely when the area leaves no free row.
fn float_label(buf: &mut Buffer, area: Rect, chip: Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let row = if chip.bottom() < area.bottom() {
        chip.bottom()
    } else if chip.y > area.y {
        chip.y - 1
    } else {
        return;
    };
    let max_width = area.right().saturating_sub(chip.x) as usize;
    let style = Style::default()
        .fg(Color::White)
        .bg(rgb_color(TOOLTIP_BG));
    buf.set_stringn(chip.x, row, label, max_width, style);
}
