//! CSS color string parsing.
//!
//! Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` with comma-separated components, css keywords, and
//! `transparent`. Case and surrounding whitespace are ignored.

use super::{convert, names};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    Empty,
    BadHex,
    BadComponent,
    OutOfRange,
    UnknownFormat,
}

impl std::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseColorError::Empty => "empty color string",
            ParseColorError::BadHex => "malformed hex color",
            ParseColorError::BadComponent => "unreadable color component",
            ParseColorError::OutOfRange => "color component out of range",
            ParseColorError::UnknownFormat => "unknown color format",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseColorError {}

/// Parser output, before canonicalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed {
    pub rgb: [u8; 3],
    pub alpha: f32,
    /// Exact h/s/l as given, when the input was an hsl form.
    pub hsl: Option<[f32; 3]>,
    /// Canonical keyword when the input was a css name.
    pub keyword: Option<&'static str>,
}

pub fn parse_css(input: &str) -> Result<Parsed, ParseColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if lower == "transparent" {
        return Ok(Parsed {
            rgb: [0, 0, 0],
            alpha: 0.0,
            hsl: None,
            keyword: Some("transparent"),
        });
    }
    if let Some(args) = func_args(&lower, "rgba").or_else(|| func_args(&lower, "rgb")) {
        return parse_rgb_func(args);
    }
    if let Some(args) = func_args(&lower, "hsla").or_else(|| func_args(&lower, "hsl")) {
        return parse_hsl_func(args);
    }
    if let Some((keyword, rgb)) = names::lookup(&lower) {
        return Ok(Parsed {
            rgb,
            alpha: 1.0,
            hsl: None,
            keyword: Some(keyword),
        });
    }

    Err(ParseColorError::UnknownFormat)
}

fn parse_hex(hex: &str) -> Result<Parsed, ParseColorError> {
    let digits = hex.as_bytes();
    let mut v = [0u8, 0, 0, 255];
    match digits.len() {
        3 | 4 => {
            for (i, &d) in digits.iter().enumerate() {
                let n = nibble(d)?;
                v[i] = n << 4 | n;
            }
        }
        6 | 8 => {
            for i in 0..digits.len() / 2 {
                v[i] = nibble(digits[2 * i])? << 4 | nibble(digits[2 * i + 1])?;
            }
        }
        _ => return Err(ParseColorError::BadHex),
    }
    Ok(Parsed {
        rgb: [v[0], v[1], v[2]],
        alpha: v[3] as f32 / 255.0,
        hsl: None,
        keyword: None,
    })
}

fn nibble(d: u8) -> Result<u8, ParseColorError> {
    match d {
        b'0'..=b'9' => Ok(d - b'0'),
        b'a'..=b'f' => Ok(d - b'a' + 10),
        b'A'..=b'F' => Ok(d - b'A' + 10),
        _ => Err(ParseColorError::BadHex),
    }
}

/// Argument list of `head(...)`, if `s` is that call form.
fn func_args<'a>(s: &'a str, head: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(head)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_func(args: &str) -> Result<Parsed, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ParseColorError::BadComponent);
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(parts.iter().copied()) {
        let v: f32 = part.parse().map_err(|_| ParseColorError::BadComponent)?;
        if !(0.0..=255.0).contains(&v) {
            return Err(ParseColorError::OutOfRange);
        }
        *slot = v.round() as u8;
    }
    let alpha = match parts.get(3) {
        Some(&part) => parse_alpha(part)?,
        None => 1.0,
    };

    Ok(Parsed {
        rgb,
        alpha,
        hsl: None,
        keyword: None,
    })
}

fn parse_hsl_func(args: &str) -> Result<Parsed, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ParseColorError::BadComponent);
    }

    let h: f32 = parts[0]
        .parse()
        .map_err(|_| ParseColorError::BadComponent)?;
    let h = h.rem_euclid(360.0);
    let s = parse_percent(parts[1])?;
    let l = parse_percent(parts[2])?;
    let alpha = match parts.get(3) {
        Some(&part) => parse_alpha(part)?,
        None => 1.0,
    };

    Ok(Parsed {
        rgb: convert::hsl_to_rgb([h, s, l]),
        alpha,
        hsl: Some([h, s, l]),
        keyword: None,
    })
}

fn parse_percent(part: &str) -> Result<f32, ParseColorError> {
    let raw = part.strip_suffix('%').unwrap_or(part);
    let v: f32 = raw.parse().map_err(|_| ParseColorError::BadComponent)?;
    if !(0.0..=100.0).contains(&v) {
        return Err(ParseColorError::OutOfRange);
    }
    Ok(v)
}

fn parse_alpha(part: &str) -> Result<f32, ParseColorError> {
    let v: f32 = part.parse().map_err(|_| ParseColorError::BadComponent)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(ParseColorError::OutOfRange);
    }
    Ok(v)
}
