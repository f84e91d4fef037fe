//! sRGB/HSL conversions and small blending helpers.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness in percent
//! `[0, 100]`, matching the canonical color triple.

pub fn rgb_to_hsl(rgb: [u8; 3]) -> [f32; 3] {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l * 100.0];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    // Hue in sixths of a turn, then degrees.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h * 60.0, s * 100.0, l * 100.0]
}

pub fn hsl_to_rgb(hsl: [f32; 3]) -> [u8; 3] {
    let h = hsl[0].rem_euclid(360.0) / 360.0;
    let s = (hsl[1] / 100.0).clamp(0.0, 1.0);
    let l = (hsl[2] / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Straight-alpha composite of `fg` over an opaque `bg`.
pub fn blend_over(fg: [u8; 3], alpha: f32, bg: [u8; 3]) -> [u8; 3] {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)).round() as u8;
    [mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2])]
}

/// ITU-R BT.709 weighted luminance in `[0, 1]`.
pub fn relative_luminance(rgb: [u8; 3]) -> f32 {
    (0.2126 * rgb[0] as f32 + 0.7152 * rgb[1] as f32 + 0.0722 * rgb[2] as f32) / 255.0
}

/// Black or white, whichever reads against the given background.
pub fn contrast_text(rgb: [u8; 3]) -> [u8; 3] {
    if relative_luminance(rgb) < 0.5 {
        [255, 255, 255]
    } else {
        [0, 0, 0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: [f32; 3], want: [f32; 3]) {
        for (g, w) in got.iter().zip(want.iter()) {
            assert!((g - w).abs() < 0.5, "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn test_rgb_to_hsl_anchors() {
        assert_close(rgb_to_hsl([255, 0, 0]), [0.0, 100.0, 50.0]);
        assert_close(rgb_to_hsl([0, 255, 0]), [120.0, 100.0, 50.0]);
        assert_close(rgb_to_hsl([0, 0, 255]), [240.0, 100.0, 50.0]);
        assert_close(rgb_to_hsl([255, 255, 255]), [0.0, 0.0, 100.0]);
        assert_close(rgb_to_hsl([0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsl([128, 128, 128]), [0.0, 0.0, 50.2]);
    }

    #[test]
    fn test_hsl_to_rgb_anchors() {
        assert_eq!(hsl_to_rgb([0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb([240.0, 100.0, 50.0]), [0, 0, 255]);
        assert_eq!(hsl_to_rgb([0.0, 0.0, 100.0]), [255, 255, 255]);
        assert_eq!(hsl_to_rgb([0.0, 0.0, 40.0]), [102, 102, 102]);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(hsl_to_rgb([360.0, 100.0, 50.0]), hsl_to_rgb([0.0, 100.0, 50.0]));
        assert_eq!(hsl_to_rgb([-120.0, 100.0, 50.0]), hsl_to_rgb([240.0, 100.0, 50.0]));
    }

    #[test]
    fn test_round_trip_stays_close() {
        for rgb in [[244u8, 67, 54], [33, 150, 243], [121, 85, 72]] {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            for (a, b) in rgb.iter().zip(back.iter()) {
                assert!(a.abs_diff(*b) <= 1, "{rgb:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_blend_over() {
        assert_eq!(blend_over([255, 0, 0], 0.5, [255, 255, 255]), [255, 128, 128]);
        assert_eq!(blend_over([255, 0, 0], 0.5, [204, 204, 204]), [230, 102, 102]);
        assert_eq!(blend_over([10, 20, 30], 1.0, [0, 0, 0]), [10, 20, 30]);
        assert_eq!(blend_over([10, 20, 30], 0.0, [1, 2, 3]), [1, 2, 3]);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text([0, 0, 0]), [255, 255, 255]);
        assert_eq!(contrast_text([255, 255, 255]), [0, 0, 0]);
        assert_eq!(contrast_text([255, 235, 59]), [0, 0, 0]); // bright yellow
        assert_eq!(contrast_text([63, 81, 181]), [255, 255, 255]); // indigo
    }
}
