//! Colour values and piecewise-linear colour ramps
//!
//! Hex strings follow the config convention: 6-digit `RRGGBB` gets full
//! opacity, 8-digit is `AARRGGBB`. The leading `#` is optional.

use std::fmt;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Rgba = Rgba::rgb(0xFF, 0x4B, 0x4B);
    pub const GREEN: Rgba = Rgba::rgb(0x4C, 0xAF, 0x50);
    pub const ORANGE: Rgba = Rgba::rgb(0xFF, 0xA5, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn from_argb32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn to_argb32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_argb32(0xFF00_0000 | value)),
            8 => Some(Self::from_argb32(value)),
            _ => None,
        }
    }

    /// Component-wise linear blend, `t` clamped to [0, 1]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb32())
    }
}

/// Maps a scalar onto colour stops, clamping outside the first/last input
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<(f32, Rgba)>,
}

impl ColorRamp {
    /// Stops must be sorted by input; unsorted inputs are sorted here.
    pub fn new(mut stops: Vec<(f32, Rgba)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    pub fn sample(&self, input: f32) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::WHITE;
        };
        if input.is_nan() || input <= first.0 {
            return first.1;
        }
        if input >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if input <= hi.0 {
                let span = hi.0 - lo.0;
                if span <= f32::EPSILON {
                    return hi.1;
                }
                return lo.1.lerp(hi.1, (input - lo.0) / span);
            }
        }
        last.1
    }
}
