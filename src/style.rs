//! Terminal styling primitives.
//!
//! # Responsibilities
//! - Parse `#RRGGBB` hex colors into an RGB triple
//! - Render badge/emphasis styling as ANSI truecolor escapes
//!
//! # Design Decisions
//! - Escapes always reset (`\x1b[0m`) at the end of each styled span, so a
//!   stripped line reads identically to a styled one minus the color
//! - No terminal-capability detection; the sink decides where lines go

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 24-bit RGB color, written and parsed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error for color strings that are not `#RRGGBB`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color `{0}`, expected #RRGGBB")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6)
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Render `text` as a badge: white on the given background color.
/// Without a color the text is passed through unstyled.
pub fn badge(text: &str, background: Option<Rgb>) -> String {
    match background {
        Some(c) => format!("\x1b[48;2;{};{};{}m\x1b[97m{text}\x1b[0m", c.r, c.g, c.b),
        None => text.to_string(),
    }
}

/// Bold emphasis.
pub fn bold(text: &str) -> String {
    format!("\x1b[1m{text}\x1b[0m")
}

/// Success emphasis: bold green (#008000).
pub fn success(text: &str) -> String {
    format!("\x1b[1;38;2;0;128;0m{text}\x1b[0m")
}

/// Failure emphasis: bold underlined red (#CC0000).
pub fn failure(text: &str) -> String {
    format!("\x1b[1;4;38;2;204;0;0m{text}\x1b[0m")
}

/// De-emphasis for size/time suffixes.
pub fn dim(text: &str) -> String {
    format!("\x1b[2m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color: Rgb = "#E17E00".parse().unwrap();
        assert_eq!(color, Rgb::new(0xE1, 0x7E, 0x00));
    }

    #[test]
    fn test_display_round_trip() {
        let color = Rgb::new(0xA5, 0x00, 0x6F);
        assert_eq!(color.to_string(), "#A5006F");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_rejects_malformed_colors() {
        assert!("E17E00".parse::<Rgb>().is_err()); // missing '#'
        assert!("#E17E0".parse::<Rgb>().is_err()); // too short
        assert!("#GGGGGG".parse::<Rgb>().is_err()); // not hex
    }

    #[test]
    fn test_badge_without_color_is_plain() {
        assert_eq!(badge(" >> query #1 ", None), " >> query #1 ");
    }

    #[test]
    fn test_badge_resets_styling() {
        let styled = badge(" >> query #1 ", Some(Rgb::new(225, 126, 0)));
        assert!(styled.starts_with("\x1b[48;2;225;126;0m"));
        assert!(styled.ends_with("\x1b[0m"));
        assert!(styled.contains(" >> query #1 "));
    }
}
