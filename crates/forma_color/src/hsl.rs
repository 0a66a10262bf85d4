//! HSL color space

/// Hue in degrees (`0.0..360.0`), saturation and lightness in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Build from `0..=255` channels
    pub fn from_rgb(r: f64, g: f64, b: f64, a: f64) -> Self {
        let r = unit(r);
        let g = unit(g);
        let b = unit(b);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l, a };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h * 60.0,
            s,
            l,
            a,
        }
    }

    /// Convert to `0..=255` channels
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return (l * 255.0, l * 255.0, l * 255.0);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }
}

fn unit(channel: f64) -> f64 {
    (channel / 255.0).clamp(0.0, 1.0)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
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
