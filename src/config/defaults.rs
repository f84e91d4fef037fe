//! Built-in configuration - written to disk on first run.

use super::{Config, PaletteConfig};

/// Starter config: stock UI settings plus one sample palette showing
/// the `[name, color]` entry format.
pub fn defaults() -> Config {
    Config {
        palettes: vec![PaletteConfig {
            name: "traffic".to_string(),
            colors: vec![
                ("go".to_string(), "#4caf50".to_string()),
                ("wait".to_string(), "#ffeb3b".to_string()),
                ("stop".to_string(), "#f44336".to_string()),
            ],
        }],
        ..Config::default()
    }
}
