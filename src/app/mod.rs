pub mod actions;
pub mod state;

use crate::config::{self, Config};
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use crossterm::event;
use state::AppState;
use std::path::PathBuf;
use std::time::Duration;
use swatch::{Lexicon, PaletteEvent, Selection, Translate};

pub struct App {
    cfg: Config,
    config_path: Option<PathBuf>,
    tr: Lexicon,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, config_path: Option<PathBuf>) -> Self {
        let tr = cfg.locale.lexicon();
        let state = AppState::new(config::palettes(&cfg));
        tracing::debug!(
            language = %tr.language(),
            palettes = state.palettes.len(),
            "picker ready"
        );
        Self {
            cfg,
            config_path,
            tr,
            state,
        }
    }

    /// Runs the picker until quit. Returns the confirmed pick, if any.
    pub fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<Option<Selection>> {
        while !self.state.should_quit {
            tui::draw(terminal, &self.cfg, &self.tr, &mut self.state)?;

            if event::poll(Duration::from_millis(250))? {
                let ev = event::read()?;
                if let Some(action) = input::map_input_to_action(&ev) {
                    self.handle_action(action);
                }
            }
        }

        self.save_on_quit();

        Ok(self.state.last_selection.take())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,

            // Grid navigation
            Action::Move(dir) => {
                self.state.grid.move_hover(dir);
            }
            Action::Select => {
                if self.state.grid.select_hovered().is_some() {
                    self.confirm();
                }
            }
            Action::Mouse(m) => {
                if let Some(PaletteEvent::Selected(_)) = self.state.grid.on_mouse(&m) {
                    self.confirm();
                }
            }

            // Palette switching
            Action::NextPalette => self.state.cycle_palette(1),
            Action::PrevPalette => self.state.cycle_palette(-1),
            Action::SetPalette(idx) => self.state.set_palette(idx),

            Action::ToggleAlpha => {
                self.cfg.ui.disable_alpha = !self.cfg.ui.disable_alpha;
                self.state.status = if self.cfg.ui.disable_alpha {
                    "alpha ignored".to_string()
                } else {
                    "alpha honored".to_string()
                };
            }

            // Redraw happens on every loop pass anyway
            Action::Resize => {}
        }
    }

    fn confirm(&mut self) {
        let Some(idx) = self.state.grid.selected else {
            return;
        };
        if let Some(sel) = self.state.active_palette().selection(idx, &self.tr) {
            tracing::debug!(name = %sel.name, "color picked");
            self.state.last_selection = Some(sel);
            self.state.should_quit = true;
        }
    }

    fn save_on_quit(&self) {
        // Persist runtime toggles (best-effort)
        let _ = config::save(&self.cfg, self.config_path.as_deref());
    }
}
