//! Color representation with hex and named-color parsing.

use serde::{Deserialize, Serialize};

/// RGB color with components in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
}

impl Color {
    /// White.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    /// Black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new color, clamping components to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit components.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 6-character hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength);
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError::InvalidHex)?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError::InvalidHex)?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError::InvalidHex)?;
        Ok(Self::rgb8(r, g, b))
    }

    /// Parse a color from a hex string or a named color.
    ///
    /// Accepts `#rrggbb`, `rrggbb`, and the common terminal color names
    /// used in dashboard configurations ("red", "lime", "dodgerblue", ...).
    ///
    /// # Errors
    ///
    /// Returns an error when the string is neither valid hex nor a known name.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') || trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            if let Ok(color) = Self::from_hex(trimmed) {
                return Ok(color);
            }
        }
        named_color(trimmed).ok_or_else(|| ColorParseError::UnknownName(trimmed.to_string()))
    }

    /// Convert to a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Perceived luminance using Rec. 601 weights, in [0.0, 1.0].
    #[must_use]
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Darken towards black by `amount` (0.0 = unchanged, 1.0 = black).
    #[must_use]
    pub fn darken(&self, amount: f32) -> Self {
        let k = 1.0 - amount.clamp(0.0, 1.0);
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Lighten towards white by `amount` (0.0 = unchanged, 1.0 = white).
    #[must_use]
    pub fn lighten(&self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self::new(
            self.r + (1.0 - self.r) * t,
            self.g + (1.0 - self.g) * t,
            self.b + (1.0 - self.b) * t,
        )
    }
}

/// Look up a named color.
fn named_color(name: &str) -> Option<Color> {
    let hex = match name.to_ascii_lowercase().as_str() {
        "black" => "#000000",
        "white" => "#ffffff",
        "red" => "#ff0000",
        "green" => "#008000",
        "lime" => "#00ff00",
        "blue" => "#0000ff",
        "yellow" => "#ffff00",
        "cyan" | "aqua" => "#00ffff",
        "magenta" | "fuchsia" => "#ff00ff",
        "gray" | "grey" => "#808080",
        "silver" => "#c0c0c0",
        "maroon" => "#800000",
        "olive" => "#808000",
        "navy" => "#000080",
        "teal" => "#008080",
        "purple" => "#800080",
        "orange" => "#ffa500",
        "pink" => "#ffc0cb",
        "brown" => "#a52a2a",
        "gold" => "#ffd700",
        "dodgerblue" => "#1e90ff",
        "tomato" => "#ff6347",
        "crimson" => "#dc143c",
        "darkgreen" => "#006400",
        "skyblue" => "#87ceeb",
        "slategray" | "slategrey" => "#708090",
        _ => return None,
    };
    Color::from_hex(hex).ok()
}

/// Error parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex string is not 6 characters long.
    InvalidLength,
    /// Hex string contains non-hex characters.
    InvalidHex,
    /// Not a hex string and not a known color name.
    UnknownName(String),
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "hex color must have 6 digits"),
            Self::InvalidHex => write!(f, "invalid hex digit in color"),
            Self::UnknownName(name) => write!(f, "unknown color name: {name}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.0).abs() < 0.01);
        assert!((c.b - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert!((c.g - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Color::from_hex("#ff00").unwrap_err(), ColorParseError::InvalidLength);
        assert_eq!(Color::from_hex("#zzzzzz").unwrap_err(), ColorParseError::InvalidHex);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("lime").unwrap(), Color::from_hex("#00ff00").unwrap());
        assert_eq!(
            Color::parse("dodgerblue").unwrap(),
            Color::from_hex("#1e90ff").unwrap()
        );
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::from_hex("#ff0000").unwrap());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Color::parse("not-a-color"),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn test_to_hex_roundtrip() {
        let c = Color::from_hex("#1e90ff").unwrap();
        assert_eq!(c.to_hex(), "#1e90ff");
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(Color::BLACK.luminance() < 0.01);
        assert!(Color::WHITE.luminance() > 0.99);
    }

    #[test]
    fn test_luminance_bright_lime() {
        let lime = Color::parse("lime").unwrap();
        assert!(lime.luminance() > 0.5);
    }

    #[test]
    fn test_darken() {
        let c = Color::new(1.0, 0.5, 0.0).darken(0.5);
        assert!((c.r - 0.5).abs() < 0.01);
        assert!((c.g - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_darken_full() {
        assert_eq!(Color::WHITE.darken(1.0), Color::BLACK);
    }

    #[test]
    fn test_lighten() {
        let c = Color::BLACK.lighten(0.3);
        assert!((c.r - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_new_clamps() {
        let c = Color::new(2.0, -1.0, 0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
    }
}
