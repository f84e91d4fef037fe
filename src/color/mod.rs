//! Color normalization.
//!
//! Every color a widget renders flows through [`validate_color`], which turns
//! a raw [`ColorInput`] into a [`CanonicalColor`]. Bad input never errors out
//! of this module; it comes back with the `error` flag set so widgets can fall
//! back to the invalid pattern.

use crate::translate::Translate;
use lru::LruCache;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Mutex;

pub mod convert;
pub mod names;
pub mod parse;

use parse::Parsed;

/// Raw color value accepted by the widgets: a css expression, a packed
/// `0xRRGGBB` integer, or structured components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Css(String),
    Packed(u32),
    Rgb {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "opaque")]
        alpha: f32,
    },
    Hsl {
        h: f32,
        s: f32,
        l: f32,
        #[serde(default = "opaque")]
        alpha: f32,
    },
}

fn opaque() -> f32 {
    1.0
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

impl From<u32> for ColorInput {
    fn from(v: u32) -> Self {
        Self::Packed(v)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb { r, g, b, alpha: 1.0 }
    }
}

impl From<(u8, u8, u8, f32)> for ColorInput {
    fn from((r, g, b, alpha): (u8, u8, u8, f32)) -> Self {
        Self::Rgb { r, g, b, alpha }
    }
}

impl std::fmt::Display for ColorInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorInput::Css(s) => f.write_str(s),
            ColorInput::Packed(v) => write!(f, "#{v:06x}"),
            ColorInput::Rgb { r, g, b, alpha } if *alpha < 1.0 => {
                write!(f, "rgba({r}, {g}, {b}, {})", trim_alpha(*alpha))
            }
            ColorInput::Rgb { r, g, b, .. } => write!(f, "rgb({r}, {g}, {b})"),
            ColorInput::Hsl { h, s, l, alpha } if *alpha < 1.0 => {
                write!(f, "hsla({h}, {s}%, {l}%, {})", trim_alpha(*alpha))
            }
            ColorInput::Hsl { h, s, l, .. } => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

/// The normalized color every widget consumes. Built fresh on each render,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalColor {
    /// Canonical css expression: `#rrggbb`, `rgba(r, g, b, a)`, or
    /// `transparent` when invalid.
    pub css: String,
    /// Hue in degrees, saturation and lightness in percent.
    pub hsl: [f32; 3],
    /// 8-bit channels matching `hsl`.
    pub rgb: [u8; 3],
    /// Opacity in `0..=1`.
    pub alpha: f32,
    /// Display name: translated keyword when the input names one, or when a
    /// structured input lands exactly on one; otherwise the css expression,
    /// or translated `none` when invalid.
    pub name: String,
    /// Set when the input could not be parsed.
    pub error: bool,
}

/// String parses are memoized; normalization runs once per swatch per frame.
static PARSE_CACHE: Lazy<Mutex<LruCache<String, Result<Parsed, parse::ParseColorError>>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(512).unwrap())));

fn cached_parse(raw: &str) -> Result<Parsed, parse::ParseColorError> {
    if let Ok(mut cache) = PARSE_CACHE.lock() {
        if let Some(hit) = cache.get(raw) {
            return *hit;
        }
        let parsed = parse::parse_css(raw);
        cache.put(raw.to_string(), parsed);
        return parsed;
    }
    parse::parse_css(raw)
}

/// Normalize a raw input. `disable_alpha` forces full opacity after parsing;
/// the translator supplies display names for keywords and for the invalid
/// placeholder.
pub fn validate_color(
    input: &ColorInput,
    disable_alpha: bool,
    tr: &dyn Translate,
) -> CanonicalColor {
    let (rgb, hsl, alpha, keyword, error) = match input {
        ColorInput::Css(raw) => match cached_parse(raw) {
            Ok(p) => {
                let hsl = p.hsl.unwrap_or_else(|| convert::rgb_to_hsl(p.rgb));
                (p.rgb, hsl, p.alpha, p.keyword, false)
            }
            Err(e) => {
                tracing::debug!(input = %raw, "rejected color: {e}");
                invalid()
            }
        },
        ColorInput::Packed(v) => {
            if *v > 0xFF_FFFF {
                tracing::debug!(input = *v, "rejected packed color: out of range");
                invalid()
            } else {
                let rgb = [(v >> 16) as u8, (v >> 8) as u8, *v as u8];
                (rgb, convert::rgb_to_hsl(rgb), 1.0, names::name_of(rgb), false)
            }
        }
        ColorInput::Rgb { r, g, b, alpha } => {
            let rgb = [*r, *g, *b];
            (
                rgb,
                convert::rgb_to_hsl(rgb),
                alpha.clamp(0.0, 1.0),
                names::name_of(rgb),
                false,
            )
        }
        ColorInput::Hsl { h, s, l, alpha } => {
            let hsl = [
                h.rem_euclid(360.0),
                s.clamp(0.0, 100.0),
                l.clamp(0.0, 100.0),
            ];
            let rgb = convert::hsl_to_rgb(hsl);
            (rgb, hsl, alpha.clamp(0.0, 1.0), names::name_of(rgb), false)
        }
    };

    let alpha = if disable_alpha && !error { 1.0 } else { alpha };
    let css = if error {
        "transparent".to_string()
    } else if alpha < 1.0 {
        format!(
            "rgba({}, {}, {}, {})",
            rgb[0],
            rgb[1],
            rgb[2],
            trim_alpha(alpha)
        )
    } else {
        format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
    };
    let name = if error {
        tr.translate("none")
    } else if let Some(keyword) = keyword {
        tr.translate(keyword)
    } else {
        css.clone()
    };

    CanonicalColor {
        css,
        hsl,
        rgb,
        alpha,
        name,
        error,
    }
}

fn invalid() -> ([u8; 3], [f32; 3], f32, Option<&'static str>, bool) {
    ([0, 0, 0], [0.0, 0.0, 0.0], 0.0, None, true)
}

/// Background shade used while the pointer is over a swatch: lightness drops
/// by 10, or jumps up by 50 when that would land below 30.
pub fn hover_shade(color: &CanonicalColor) -> [u8; 3] {
    let [h, s, l] = color.hsl;
    let mut shifted = l - 10.0;
    if shifted < 30.0 {
        shifted = l + 50.0;
    }
    convert::hsl_to_rgb([h, s, shifted.clamp(0.0, 100.0)])
}

/// Alpha formatted for css output: at most three decimals, no trailing zeros.
fn trim_alpha(alpha: f32) -> String {
    let s = format!("{alpha:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}
