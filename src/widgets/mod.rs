//! Ratatui widgets: the swatch chip and the palette grid.

pub mod palette;
pub mod swatch;
