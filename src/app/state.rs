use swatch::{Palette, PaletteState, Selection};

pub struct AppState {
    pub should_quit: bool,

    // Loaded palettes in display order, builtin first
    pub palettes: Vec<(String, Palette)>,
    pub active: usize,

    // Hover/selection state for the visible grid
    pub grid: PaletteState,

    pub last_selection: Option<Selection>,

    // Status message (for hints/info)
    pub status: String,
}

impl AppState {
    pub fn new(mut palettes: Vec<(String, Palette)>) -> Self {
        if palettes.is_empty() {
            palettes.push(("material".to_string(), Palette::material()));
        }
        Self {
            should_quit: false,
            palettes,
            active: 0,
            grid: PaletteState::default(),
            last_selection: None,
            status: String::new(),
        }
    }

    pub fn active_palette(&self) -> &Palette {
        &self.palettes[self.active].1
    }

    pub fn active_name(&self) -> &str {
        &self.palettes[self.active].0
    }

    /// Steps to the neighbouring palette, wrapping at either end.
    pub fn cycle_palette(&mut self, step: isize) {
        let len = self.palettes.len() as isize;
        self.active = (self.active as isize + step).rem_euclid(len) as usize;
        self.grid.clear();
    }

    /// Jumps straight to palette `idx`; out-of-range indices are ignored.
    pub fn set_palette(&mut self, idx: usize) {
        if idx < self.palettes.len() && idx != self.active {
            self.active = idx;
            self.grid.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_palettes() -> Vec<(String, Palette)> {
        vec![
            ("material".to_string(), Palette::material()),
            ("traffic".to_string(), [("go", "#4caf50")].into_iter().collect()),
        ]
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut state = AppState::new(two_palettes());
        state.cycle_palette(-1);
        assert_eq!(state.active_name(), "traffic");
        state.cycle_palette(1);
        assert_eq!(state.active_name(), "material");
    }

    #[test]
    fn test_switching_forgets_hover() {
        let mut state = AppState::new(two_palettes());
        state.grid.hovered = Some(3);
        state.cycle_palette(1);
        assert_eq!(state.grid.hovered, None);
    }

    #[test]
    fn test_set_palette_ignores_out_of_range() {
        let mut state = AppState::new(two_palettes());
        state.set_palette(9);
        assert_eq!(state.active, 0);
    }

    #[test]
    fn test_empty_input_falls_back_to_builtin() {
        let state = AppState::new(Vec::new());
        assert_eq!(state.active_name(), "material");
        assert!(!state.active_palette().is_empty());
    }
}
