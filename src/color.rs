//! RGBA color values and the light/dark classifier.
//!
//! Persisted preferences store colors as hex strings; this module parses
//! them and answers the one question the theme engine needs: is a color
//! light or dark?

use anyhow::{Result, bail};
use std::fmt;

/// An RGBA color. Alpha 0 means fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    /// Fully transparent (used for the see-through status bar).
    pub const TRANSPARENT: Rgb = Rgb {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Create an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16)?;
                Ok(Self::new(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            8 => {
                let value = u32::from_str_radix(hex, 16)?;
                Ok(Self {
                    a: (value >> 24) as u8,
                    r: (value >> 16) as u8,
                    g: (value >> 8) as u8,
                    b: value as u8,
                })
            }
            _ => bail!("invalid color literal: {s:?}"),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Perceived darkness in `[0, 1]`, 0 being pure white.
    ///
    /// ITU-R BT.601 luma weights.
    pub fn darkness(&self) -> f64 {
        1.0 - (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Light/dark classifier driving theme selection.
    pub fn is_light(&self) -> bool {
        self.darkness() < 0.4
    }

    /// Scale each channel toward black. `factor` 1.0 is identity.
    pub fn darken(&self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Terminal rendition. Transparent maps to the terminal default.
    pub fn to_color(self) -> ratatui::style::Color {
        if self.is_transparent() {
            ratatui::style::Color::Reset
        } else {
            ratatui::style::Color::Rgb(self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_hex() {
        let c = Rgb::from_hex("#1e88e5").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x1e, 0x88, 0xe5, 0xff));
        assert_eq!(Rgb::from_hex("1e88e5").unwrap(), c);
    }

    #[test]
    fn test_parse_argb_hex() {
        let c = Rgb::from_hex("#001e88e5").unwrap();
        assert!(c.is_transparent());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("not-a-color").is_err());
    }

    #[test]
    fn test_white_is_light_black_is_dark() {
        assert!(Rgb::new(0xff, 0xff, 0xff).is_light());
        assert!(!Rgb::new(0, 0, 0).is_light());
    }

    #[test]
    fn test_saturated_blue_is_dark() {
        // Blue carries the smallest luma weight, so even a vivid blue
        // classifies as dark and selects the dark style.
        assert!(!Rgb::from_hex("#1e88e5").unwrap().is_light());
    }

    #[test]
    fn test_transparent_renders_as_terminal_default() {
        assert_eq!(Rgb::TRANSPARENT.to_color(), ratatui::style::Color::Reset);
    }

    #[test]
    fn test_darken_scales_channels() {
        let c = Rgb::new(100, 200, 50).darken(0.5);
        assert_eq!((c.r, c.g, c.b), (50, 100, 25));
    }
}
