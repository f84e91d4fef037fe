//! Color swatch and palette widgets for ratatui.
//!
//! A [`ColorSwatch`] renders one color as a clickable square chip; a
//! [`ColorPalette`] lays a named set of them out as a wrapped grid and turns
//! mouse and key input into selection events. Both accept anything
//! [`validate_color`] can normalize: css strings, packed integers, or
//! structured components. Colors that fail to parse are never an error at the
//! widget boundary; the chip falls back to a crosshatched pattern instead.

pub mod color;
pub mod palette;
pub mod translate;
pub mod widgets;

pub use color::{hover_shade, validate_color, CanonicalColor, ColorInput};
pub use palette::{Palette, Selection};
pub use translate::{Lexicon, NoTranslate, Translate};
pub use widgets::palette::{ColorPalette, Dir, PaletteEvent, PaletteState};
pub use widgets::swatch::ColorSwatch;
