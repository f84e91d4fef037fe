use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use swatch::{Lexicon, Palette};

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub locale: LocaleConfig,
    pub palettes: Vec<PaletteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Swatch side in px; cells are derived from an 8x16 font box.
    pub size: u16,
    /// Chip border width in px, 0 for none.
    pub border_width: u16,
    /// Treat every color as opaque.
    pub disable_alpha: bool,
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language tag reported alongside translated names.
    pub language: String,
    /// Display-name overrides for palette entries and color keywords.
    pub strings: HashMap<String, String>,
}

/// One user palette: ordered `[name, color]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaletteConfig {
    pub name: String,
    pub colors: Vec<(String, String)>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            size: 24,
            border_width: 0,
            disable_alpha: false,
            mouse: true,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            strings: HashMap::new(),
        }
    }
}

impl LocaleConfig {
    pub fn lexicon(&self) -> Lexicon {
        let mut lexicon = Lexicon::new(self.language.clone());
        lexicon.extend(self.strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        lexicon
    }
}

impl PaletteConfig {
    pub fn to_palette(&self) -> Palette {
        self.colors
            .iter()
            .map(|(name, css)| (name.clone(), css.clone()))
            .collect()
    }
}

/// All palettes in display order: the built-in material set, then the
/// configured ones.
pub fn palettes(cfg: &Config) -> Vec<(String, Palette)> {
    let mut all = vec![("material".to_string(), Palette::material())];
    for pc in &cfg.palettes {
        all.push((pc.name.clone(), pc.to_palette()));
    }
    all
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "swatch", "swatch").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch::{ColorInput, Translate};

    #[test]
    fn test_default_config_round_trips() {
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.ui.size, cfg.ui.size);
        assert_eq!(back.ui.mouse, cfg.ui.mouse);
        assert_eq!(back.palettes.len(), cfg.palettes.len());
    }

    #[test]
    fn test_palette_pairs_keep_order() {
        let raw = r##"
            [[palettes]]
            name = "traffic"
            colors = [["go", "#4caf50"], ["wait", "#ffeb3b"], ["stop", "#f44336"]]
        "##;
        let cfg: Config = toml::from_str(raw).unwrap();
        let palette = cfg.palettes[0].to_palette();
        assert_eq!(palette.entry(0).map(|(n, _)| n), Some("go"));
        assert_eq!(palette.entry(2).map(|(n, _)| n), Some("stop"));
        assert_eq!(palette.get("wait"), Some(&ColorInput::from("#ffeb3b")));
    }

    #[test]
    fn test_material_comes_first() {
        let cfg = defaults::defaults();
        let all = palettes(&cfg);
        assert_eq!(all[0].0, "material");
        assert!(all.len() > 1);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.size, 24);
        assert_eq!(cfg.locale.language, "en");
        assert!(cfg.palettes.is_empty());
    }

    #[test]
    fn test_lexicon_from_locale() {
        let raw = r#"
            [locale]
            language = "de"
            [locale.strings]
            red = "Rot"
        "#;
        let cfg: Config = toml::from_str(raw).unwrap();
        let lexicon = cfg.locale.lexicon();
        assert_eq!(lexicon.language(), "de");
        assert_eq!(lexicon.translate("red"), "Rot");
        assert_eq!(lexicon.translate("unset"), "unset");
    }
}
