use crossterm::event::MouseEvent;
use swatch::Dir;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // Grid navigation
    Move(Dir),
    Select,

    // Palette switching
    NextPalette,
    PrevPalette,
    SetPalette(usize),

    ToggleAlpha,

    Mouse(MouseEvent),
    Resize,
}
